//! Lead records and the tabular input reader
//!
//! A [`LeadRecord`] is one input row, kept in column order. An
//! [`EnrichedRecord`] is that row plus the derived [`Enrichment`] columns.

mod reader;
mod types;

pub use reader::{read_leads, read_leads_from};
pub use types::{EnrichStatus, EnrichedRecord, Enrichment, LeadRecord};
