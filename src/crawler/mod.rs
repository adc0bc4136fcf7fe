//! Crawler module for page fetching and per-lead processing
//!
//! This module contains the network-facing half of the pipeline:
//! - HTTP fetching with a politeness pause
//! - HTML parsing into title, description, text and links
//! - Careers page scan
//! - Per-lead orchestration with a bounded worker count

mod coordinator;
mod fetcher;
mod jobs;
mod parser;

pub use coordinator::{enrich_lead, Coordinator, EnrichmentOutcome};
pub use fetcher::{build_http_client, FetchedPage, PageFetcher};
pub use jobs::{find_job_links, scan_job_pages, JobsScan, MAX_JOB_PAGES};
pub use parser::{parse_page, ExtractedLink, ParsedPage};
