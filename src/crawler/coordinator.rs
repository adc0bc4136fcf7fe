//! Enrichment coordinator - per-lead pipeline and bounded fan-out
//!
//! This module runs every lead through:
//! - Website normalization
//! - Homepage fetch
//! - Signal extraction and careers scan
//! - Scoring
//!
//! Leads are processed concurrently, at most `workers` at a time, and results
//! are collected in completion order.

use crate::config::ScoutConfig;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::jobs::scan_job_pages;
use crate::crawler::parser::parse_page;
use crate::records::{EnrichStatus, EnrichedRecord, Enrichment, LeadRecord};
use crate::signals::{
    count_ai_keywords, detect_technologies, find_emails, link_mentions_pricing, SignalBundle,
};
use crate::url::normalize_website;
use crate::ScoutError;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Completed results logged as progress every this many leads
const PROGRESS_INTERVAL: usize = 10;

/// Records produced by a run, plus how many leads were lost on the way
#[derive(Debug, Default)]
pub struct EnrichmentOutcome {
    /// Enriched records in completion order
    pub records: Vec<EnrichedRecord>,

    /// Leads whose pipeline failed unexpectedly and were omitted
    pub dropped: usize,
}

/// Main enrichment coordinator
pub struct Coordinator {
    fetcher: Arc<PageFetcher>,
    workers: usize,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScoutError)` - Invalid configuration or HTTP client failure
    pub fn new(config: ScoutConfig) -> Result<Self, ScoutError> {
        config.validate()?;
        let fetcher = PageFetcher::from_config(&config.user_agent, &config.fetch)?;
        Ok(Self::with_fetcher(fetcher, config.workers))
    }

    /// Creates a coordinator around an existing fetcher
    pub fn with_fetcher(fetcher: PageFetcher, workers: usize) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            workers: workers.max(1),
        }
    }

    /// Enriches every lead
    ///
    /// A lead whose pipeline returns an error or panics is logged and left
    /// out of the returned records; it is counted in `dropped`.
    pub async fn run(&self, leads: Vec<LeadRecord>) -> EnrichmentOutcome {
        self.run_with(leads, |fetcher, lead| async move {
            enrich_lead(&fetcher, lead).await
        })
        .await
    }

    /// Runs `pipeline` over every lead, at most `workers` at a time
    ///
    /// Results are collected in completion order. Failed or panicking
    /// pipelines are logged and counted in `dropped`.
    pub async fn run_with<F, Fut>(&self, leads: Vec<LeadRecord>, pipeline: F) -> EnrichmentOutcome
    where
        F: Fn(Arc<PageFetcher>, LeadRecord) -> Fut,
        Fut: Future<Output = Result<EnrichedRecord, ScoutError>> + Send + 'static,
    {
        let total = leads.len();
        tracing::info!("Enriching {} leads with {} workers", total, self.workers);

        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut tasks = JoinSet::new();

        for lead in leads {
            let sem = Arc::clone(&semaphore);
            let company = lead.company_name().to_string();
            let enrich = pipeline(Arc::clone(&self.fetcher), lead);

            tasks.spawn(async move {
                let _permit = match sem.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => return Err((company, ScoutError::Task(e.to_string()))),
                };
                enrich.await.map_err(|e| (company, e))
            });
        }

        let start_time = std::time::Instant::now();
        let mut outcome = EnrichmentOutcome::default();
        let mut completed = 0;

        while let Some(joined) = tasks.join_next().await {
            completed += 1;
            match joined {
                Ok(Ok(record)) => outcome.records.push(record),
                Ok(Err((company, e))) => {
                    tracing::error!("Error enriching '{}': {}", company, e);
                    outcome.dropped += 1;
                }
                Err(e) => {
                    tracing::error!("Enrichment task failed: {}", e);
                    outcome.dropped += 1;
                }
            }

            if completed % PROGRESS_INTERVAL == 0 {
                tracing::info!(
                    "Progress: {}/{} leads done in {:?}",
                    completed,
                    total,
                    start_time.elapsed()
                );
            }
        }

        tracing::info!(
            "Enrichment completed: {} records, {} dropped, in {:?}",
            outcome.records.len(),
            outcome.dropped,
            start_time.elapsed()
        );

        outcome
    }
}

/// Runs the full pipeline for one lead
///
/// Leads without a usable website or with an unreachable homepage are
/// returned with a zero score and the matching note; they are not errors.
pub async fn enrich_lead(
    fetcher: &PageFetcher,
    lead: LeadRecord,
) -> Result<EnrichedRecord, ScoutError> {
    let Some(url) = normalize_website(lead.website()) else {
        tracing::debug!("No website for '{}'", lead.company_name());
        return Ok(EnrichedRecord::new(
            lead,
            Enrichment::short_circuit(EnrichStatus::NoWebsite),
        ));
    };

    tracing::debug!("Fetching homepage {} for '{}'", url, lead.company_name());
    let Some(page) = fetcher.fetch(&url).await else {
        tracing::warn!("Failed to fetch homepage {} for '{}'", url, lead.company_name());
        return Ok(EnrichedRecord::new(
            lead,
            Enrichment::short_circuit(EnrichStatus::FetchFailed),
        ));
    };

    let parsed = parse_page(&page.body, &page.final_url)?;
    let html_lower = page.body.to_lowercase();

    let jobs = scan_job_pages(fetcher, &parsed.links).await;

    let bundle = SignalBundle {
        homepage_fetched: true,
        ai_keyword_count: count_ai_keywords(&parsed.text_lower),
        tech_stack: detect_technologies(&html_lower),
        emails: find_emails(&page.body),
        has_jobs: jobs.has_jobs,
        jobs_ai_mentions: jobs.jobs_ai_mentions,
        has_pricing: link_mentions_pricing(&parsed.links),
    };

    let enrichment = Enrichment::from_signals(parsed.title, parsed.meta_description, bundle);
    tracing::debug!(
        "Scored '{}' at {}",
        lead.company_name(),
        enrichment.ai_readiness_score
    );

    Ok(EnrichedRecord::new(lead, enrichment))
}
