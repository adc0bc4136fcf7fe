use crate::signals::{score, SignalBundle};
use std::collections::BTreeSet;
use std::fmt;

/// One input row: column name → value, in header order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadRecord {
    fields: Vec<(String, String)>,
}

impl LeadRecord {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Returns the value of a column, if present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn company_name(&self) -> &str {
        self.get("company_name").unwrap_or_default()
    }

    pub fn website(&self) -> Option<&str> {
        self.get("website")
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LeadRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Status written to the `notes` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnrichStatus {
    /// Homepage fetched and all signals extracted
    Ok,
    /// The website column was blank or not a plausible domain
    NoWebsite,
    /// The homepage could not be retrieved
    FetchFailed,
}

impl EnrichStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NoWebsite => "No website supplied",
            Self::FetchFailed => "Failed to fetch homepage",
        }
    }
}

impl fmt::Display for EnrichStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived columns added to a lead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub homepage_title: String,
    pub homepage_meta_desc: String,
    pub ai_signals_count: usize,
    pub tech_stack: BTreeSet<&'static str>,
    pub contact_emails: BTreeSet<String>,
    pub has_jobs: bool,
    pub jobs_ai_mentions: bool,
    pub has_pricing: bool,
    pub notes: EnrichStatus,
    pub ai_readiness_score: u8,
}

impl Enrichment {
    /// Derived columns, in output order
    pub const COLUMNS: [&'static str; 10] = [
        "homepage_title",
        "homepage_meta_desc",
        "ai_signals_count",
        "tech_stack",
        "contact_emails",
        "has_jobs",
        "jobs_ai_mentions",
        "has_pricing",
        "notes",
        "ai_readiness_score",
    ];

    /// Enrichment for a lead that never reached signal extraction
    ///
    /// The score is zero regardless of anything observed so far.
    pub fn short_circuit(status: EnrichStatus) -> Self {
        Self {
            homepage_title: String::new(),
            homepage_meta_desc: String::new(),
            ai_signals_count: 0,
            tech_stack: BTreeSet::new(),
            contact_emails: BTreeSet::new(),
            has_jobs: false,
            jobs_ai_mentions: false,
            has_pricing: false,
            notes: status,
            ai_readiness_score: 0,
        }
    }

    /// Enrichment for a fully processed lead; the score is derived from `bundle`
    pub fn from_signals(title: String, meta_desc: String, bundle: SignalBundle) -> Self {
        let ai_readiness_score = score(&bundle);
        Self {
            homepage_title: title,
            homepage_meta_desc: meta_desc,
            ai_signals_count: bundle.ai_keyword_count,
            tech_stack: bundle.tech_stack,
            contact_emails: bundle.emails,
            has_jobs: bundle.has_jobs,
            jobs_ai_mentions: bundle.jobs_ai_mentions,
            has_pricing: bundle.has_pricing,
            notes: EnrichStatus::Ok,
            ai_readiness_score,
        }
    }

    /// Renders the derived columns as text, paired with their names
    pub fn columns(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.homepage_title.clone(),
            self.homepage_meta_desc.clone(),
            self.ai_signals_count.to_string(),
            join_set(self.tech_stack.iter().copied()),
            join_set(self.contact_emails.iter().map(String::as_str)),
            render_bool(self.has_jobs),
            render_bool(self.jobs_ai_mentions),
            render_bool(self.has_pricing),
            self.notes.to_string(),
            self.ai_readiness_score.to_string(),
        ];
        Self::COLUMNS.into_iter().zip(values).collect()
    }
}

fn join_set<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(",")
}

fn render_bool(value: bool) -> String {
    let text = if value { "True" } else { "False" };
    text.to_string()
}

/// A lead plus its derived columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRecord {
    pub lead: LeadRecord,
    pub enrichment: Enrichment,
}

impl EnrichedRecord {
    pub fn new(lead: LeadRecord, enrichment: Enrichment) -> Self {
        Self { lead, enrichment }
    }

    /// All output columns
    ///
    /// Input columns come first in their original order. A derived column
    /// replaces a same-named input column in place; the rest are appended.
    pub fn fields(&self) -> Vec<(String, String)> {
        let mut fields = self.lead.fields().to_vec();
        for (name, value) in self.enrichment.columns() {
            match fields.iter_mut().find(|(existing, _)| existing == name) {
                Some(slot) => slot.1 = value,
                None => fields.push((name.to_string(), value)),
            }
        }
        fields
    }
}
