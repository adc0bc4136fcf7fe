//! Run statistics
//!
//! This module summarises one enrichment run for the operator, including
//! the records the orchestrator dropped and which are therefore absent from
//! the output file.

use crate::records::{EnrichStatus, EnrichedRecord};

/// Enrichment run summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStatistics {
    /// Rows read from the input
    pub total_leads: usize,

    /// Records with notes = "ok"
    pub enriched: usize,

    /// Records with no usable website
    pub no_website: usize,

    /// Records whose homepage could not be fetched
    pub fetch_failed: usize,

    /// Records lost to an unexpected pipeline failure
    pub dropped: usize,

    /// Data rows written to the output
    pub rows_written: usize,

    /// Records with a careers link
    pub with_jobs: usize,

    /// Mean readiness score over all returned records
    pub mean_score: f64,
}

impl RunStatistics {
    /// Builds statistics from the records a run produced
    pub fn from_records(
        total_leads: usize,
        records: &[EnrichedRecord],
        dropped: usize,
        rows_written: usize,
    ) -> Self {
        let mut stats = Self {
            total_leads,
            dropped,
            rows_written,
            ..Default::default()
        };

        let mut score_sum: u64 = 0;
        for record in records {
            let enrichment = &record.enrichment;
            match enrichment.notes {
                EnrichStatus::Ok => stats.enriched += 1,
                EnrichStatus::NoWebsite => stats.no_website += 1,
                EnrichStatus::FetchFailed => stats.fetch_failed += 1,
            }
            if enrichment.has_jobs {
                stats.with_jobs += 1;
            }
            score_sum += u64::from(enrichment.ai_readiness_score);
        }

        if !records.is_empty() {
            stats.mean_score = score_sum as f64 / records.len() as f64;
        }

        stats
    }
}

/// Prints statistics to stdout in a human-readable format
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Enrichment Statistics ===\n");

    println!("Leads read: {}", stats.total_leads);
    println!("  Enriched: {}", stats.enriched);
    println!("  No website supplied: {}", stats.no_website);
    println!("  Failed to fetch homepage: {}", stats.fetch_failed);
    if stats.dropped > 0 {
        println!("  Dropped after errors: {}", stats.dropped);
    }

    println!("\nRows written: {}", stats.rows_written);
    println!("With careers pages: {}", stats.with_jobs);
    println!("Mean readiness score: {:.1}", stats.mean_score);
}
