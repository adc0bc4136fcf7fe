//! CSV output handler
//!
//! Writes one header row and one row per enriched record. The header is the
//! union of every record's columns in first-seen order, so a record missing a
//! column gets an empty cell instead of shifting the row.

use crate::output::traits::{OutputHandler, OutputResult};
use crate::records::EnrichedRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Writes enriched records to a CSV file
pub struct CsvOutputHandler {
    path: PathBuf,
}

impl CsvOutputHandler {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Computes the output header: union of all columns in first-seen order
pub fn header_union(rows: &[Vec<(String, String)>]) -> Vec<String> {
    let mut header: Vec<String> = Vec::new();
    for row in rows {
        for (name, _) in row {
            if !header.contains(name) {
                header.push(name.clone());
            }
        }
    }
    header
}

impl OutputHandler for CsvOutputHandler {
    fn write_records(&mut self, records: &[EnrichedRecord]) -> OutputResult<usize> {
        if records.is_empty() {
            tracing::warn!(
                "No results to write; {} was not created",
                self.path.display()
            );
            return Ok(0);
        }

        let rows: Vec<Vec<(String, String)>> = records.iter().map(EnrichedRecord::fields).collect();
        let header = header_union(&rows);

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(&header)?;

        for row in &rows {
            let values: HashMap<&str, &str> = row
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            writer.write_record(
                header
                    .iter()
                    .map(|name| values.get(name.as_str()).copied().unwrap_or_default()),
            )?;
        }

        writer.flush()?;
        tracing::info!("Wrote {} rows to {}", rows.len(), self.path.display());

        Ok(rows.len())
    }
}
