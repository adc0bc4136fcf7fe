//! Readiness-Scout main entry point
//!
//! This is the command-line interface for the Readiness-Scout lead enricher.

use anyhow::Context;
use clap::Parser;
use readiness_scout::config::{ScoutConfig, DEFAULT_WORKERS};
use readiness_scout::output::print_statistics;
use readiness_scout::records::read_leads;
use readiness_scout::url::normalize_website;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Readiness-Scout: AI readiness signals for lead lists
///
/// Reads a CSV of companies, fetches each company's homepage and up to two
/// careers pages, and writes the rows back with detected signals and a
/// 0-100 readiness score.
#[derive(Parser, Debug)]
#[command(name = "readiness-scout")]
#[command(version)]
#[command(about = "Score lead lists for AI readiness", long_about = None)]
struct Cli {
    /// Input CSV with company_name and website columns
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Maximum number of leads processed concurrently
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Pause after each successful fetch within a lead, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Read the input and show what would be fetched without any network access
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn to_config(&self) -> ScoutConfig {
        let mut config = ScoutConfig {
            workers: self.workers,
            ..Default::default()
        };
        if let Some(timeout) = self.timeout {
            config.fetch.timeout_secs = timeout;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.fetch.politeness_delay_ms = delay_ms;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if cli.dry_run {
        handle_dry_run(&cli.input)
    } else {
        handle_enrich(cli.to_config(), &cli.input, &cli.output, cli.quiet).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("readiness_scout=info,warn"),
            1 => EnvFilter::new("readiness_scout=debug,info"),
            2 => EnvFilter::new("readiness_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: reads input and shows what would be fetched
fn handle_dry_run(input: &Path) -> anyhow::Result<()> {
    let leads = read_leads(input)
        .with_context(|| format!("Failed to read input {}", input.display()))?;

    println!("=== Readiness-Scout Dry Run ===\n");
    println!("Input: {}", input.display());
    println!("Leads: {}\n", leads.len());

    let mut fetchable = 0;
    for lead in &leads {
        match normalize_website(lead.website()) {
            Some(url) => {
                fetchable += 1;
                println!("  - {} -> {}", lead.company_name(), url);
            }
            None => println!("  - {} (no website supplied)", lead.company_name()),
        }
    }

    println!(
        "\n✓ Would fetch {} homepages; {} leads have no usable website",
        fetchable,
        leads.len() - fetchable
    );

    Ok(())
}

/// Handles the main enrichment run
async fn handle_enrich(
    config: ScoutConfig,
    input: &Path,
    output: &Path,
    quiet: bool,
) -> anyhow::Result<()> {
    tracing::info!("Reading leads from {}", input.display());

    let stats = readiness_scout::run(config, input, output)
        .await
        .with_context(|| {
            format!(
                "Enrichment from {} to {} failed",
                input.display(),
                output.display()
            )
        })?;

    tracing::info!(
        "Run complete: {} leads, {} enriched, {} dropped, {} rows written",
        stats.total_leads,
        stats.enriched,
        stats.dropped,
        stats.rows_written
    );
    if stats.dropped > 0 {
        tracing::warn!(
            "{} leads were dropped after errors and are missing from {}",
            stats.dropped,
            output.display()
        );
    }

    if !quiet {
        print_statistics(&stats);
    }

    Ok(())
}
