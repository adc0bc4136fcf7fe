//! Readiness-Scout: AI readiness signals for sales lead lists
//!
//! This crate enriches a list of companies with heuristic signals scraped from
//! each company's homepage and careers pages, and derives a 0-100 readiness
//! score from them.
//!
//! The pipeline is linear: read rows, fetch pages, extract signals, score,
//! write rows. Records are processed concurrently with a bounded worker count.

pub mod config;
pub mod crawler;
pub mod output;
pub mod records;
pub mod signals;
pub mod url;

use crate::output::{CsvOutputHandler, OutputHandler, RunStatistics};
use std::path::Path;
use thiserror::Error;

/// Main error type for Readiness-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Enrichment task failed: {0}")]
    Task(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid user agent: {0}")]
    InvalidUserAgent(String),
}

/// Result type alias for Readiness-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::ScoutConfig;
pub use records::{EnrichStatus, EnrichedRecord, Enrichment, LeadRecord};
pub use signals::{score, SignalBundle};
pub use url::normalize_website;

/// Runs a complete enrichment pass from an input file to an output file
///
/// Input read failures propagate before any network activity. Per-record
/// failures are logged and counted, never fatal.
///
/// # Returns
///
/// * `Ok(RunStatistics)` - Summary of what was read, enriched, dropped and written
/// * `Err(ScoutError)` - Input could not be read or output could not be written
pub async fn run(config: ScoutConfig, input: &Path, output_path: &Path) -> Result<RunStatistics> {
    let leads = records::read_leads(input)?;
    tracing::info!("Loaded {} lead records from {}", leads.len(), input.display());
    let total = leads.len();

    let coordinator = crawler::Coordinator::new(config)?;
    let outcome = coordinator.run(leads).await;

    let mut handler = CsvOutputHandler::new(output_path);
    let written = handler.write_records(&outcome.records)?;

    Ok(RunStatistics::from_records(
        total,
        &outcome.records,
        outcome.dropped,
        written,
    ))
}
