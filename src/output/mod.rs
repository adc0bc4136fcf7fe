//! Output module for writing enriched records and run summaries
//!
//! This module handles:
//! - Writing enriched records as delimited text
//! - Summarising what a run read, enriched, dropped and wrote

mod csv_output;
pub mod stats;
mod traits;

pub use csv_output::{header_union, CsvOutputHandler};
pub use stats::{print_statistics, RunStatistics};
pub use traits::{OutputError, OutputHandler, OutputResult};
