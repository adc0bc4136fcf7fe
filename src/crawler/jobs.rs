//! Careers page scan
//!
//! Careers links are picked out of the homepage's links. At most
//! [`MAX_JOB_PAGES`] of them are fetched, in discovery order, and scanning stops
//! at the first page whose raw HTML mentions an AI keyword.

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::ExtractedLink;
use crate::signals::{count_ai_keywords, JOB_LINK_KEYWORDS};

/// Upper bound on careers pages fetched per lead
pub const MAX_JOB_PAGES: usize = 2;

/// Outcome of scanning a lead's careers links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobsScan {
    /// At least one careers link was found on the homepage
    pub has_jobs: bool,

    /// A fetched careers page mentions an AI keyword
    pub jobs_ai_mentions: bool,
}

/// Returns the links whose href or text looks like a careers page, in page order
pub fn find_job_links(links: &[ExtractedLink]) -> Vec<&ExtractedLink> {
    links
        .iter()
        .filter(|link| link.mentions_any(JOB_LINK_KEYWORDS))
        .collect()
}

/// Checks careers links for AI mentions
///
/// Fetch failures are skipped silently and count as zero mentions.
pub async fn scan_job_pages(fetcher: &PageFetcher, links: &[ExtractedLink]) -> JobsScan {
    let job_links = find_job_links(links);
    if job_links.is_empty() {
        return JobsScan::default();
    }

    let mut scan = JobsScan {
        has_jobs: true,
        jobs_ai_mentions: false,
    };

    for link in job_links.into_iter().take(MAX_JOB_PAGES) {
        let Some(page) = fetcher.fetch(&link.url).await else {
            tracing::debug!("Skipping unreachable careers page {}", link.url);
            continue;
        };

        if count_ai_keywords(&page.body.to_lowercase()) > 0 {
            tracing::debug!("Careers page {} mentions AI", link.url);
            scan.jobs_ai_mentions = true;
            break;
        }
    }

    scan
}
