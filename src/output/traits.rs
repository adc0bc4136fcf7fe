//! Output handler traits and types
//!
//! This module defines the trait interface for output handlers and the
//! errors they report.

use crate::records::EnrichedRecord;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for output handlers
///
/// Output handlers receive the enriched records of a run, in completion
/// order, and persist them.
pub trait OutputHandler {
    /// Writes all records
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of data rows written; 0 if nothing was written
    /// * `Err(OutputError)` - Failed to write output
    fn write_records(&mut self, records: &[EnrichedRecord]) -> OutputResult<usize>;
}
