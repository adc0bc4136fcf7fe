//! Delimited input reader
//!
//! Reads a header row followed by data rows. Every column is kept verbatim;
//! only `company_name` and `website` are interpreted downstream.

use crate::records::types::LeadRecord;
use crate::ScoutError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns the pipeline expects to find in the header
const EXPECTED_COLUMNS: &[&str] = &["company_name", "website"];

/// Reads lead records from a CSV file
///
/// # Returns
///
/// * `Ok(Vec<LeadRecord>)` - One record per data row, in file order
/// * `Err(ScoutError)` - The file could not be opened or parsed
pub fn read_leads(path: &Path) -> Result<Vec<LeadRecord>, ScoutError> {
    let file = File::open(path)?;
    read_leads_from(file)
}

/// Reads lead records from any CSV source
///
/// Short rows are padded with empty values; cells beyond the header are
/// ignored.
pub fn read_leads_from<R: Read>(source: R) -> Result<Vec<LeadRecord>, ScoutError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    for column in EXPECTED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            tracing::warn!("Input has no '{}' column", column);
        }
    }

    let mut leads = Vec::new();
    for row in reader.records() {
        let row = row?;
        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), row.get(i).unwrap_or_default().to_string()))
            .collect();
        leads.push(LeadRecord::new(fields));
    }

    Ok(leads)
}
