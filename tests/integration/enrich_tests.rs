//! Integration tests for the enrichment pipeline
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full read → fetch → score → write cycle end-to-end.

use readiness_scout::config::{FetchConfig, ScoutConfig, UserAgentConfig};
use readiness_scout::crawler::Coordinator;
use readiness_scout::records::{EnrichStatus, EnrichedRecord, LeadRecord};
use readiness_scout::ScoutError;
use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with no politeness delay
fn create_test_config(workers: usize) -> ScoutConfig {
    ScoutConfig {
        workers,
        fetch: FetchConfig {
            timeout_secs: 5,
            politeness_delay_ms: 0,
            max_redirects: 5,
        },
        user_agent: UserAgentConfig {
            name: "TestBot".to_string(),
            version: "1.0.0".to_string(),
            contact: "integration tests".to_string(),
        },
    }
}

fn lead(company: &str, website: &str) -> LeadRecord {
    [
        ("company_name", company),
        ("website", website),
        ("contact_name", "Ada"),
        ("title", "CTO"),
    ]
    .into_iter()
    .collect()
}

fn columns(record: &EnrichedRecord) -> HashMap<String, String> {
    record.fields().into_iter().collect()
}

fn read_output(path: &Path) -> Vec<HashMap<String, String>> {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open output");
    let headers = reader.headers().expect("Missing header").clone();
    reader
        .records()
        .map(|row| {
            let row = row.expect("Bad row");
            headers
                .iter()
                .zip(row.iter())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect()
        })
        .collect()
}

const ACME_HOMEPAGE: &str = r#"<html><head><title>Acme</title>
<meta name="description" content="We build ML"></head>
<body><p>Acme does machine learning for logistics.</p>
<p>Contact: hi@acme.test</p></body></html>"#;

#[tokio::test]
async fn test_acme_homepage_scores_21() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ACME_HOMEPAGE))
        .mount(&mock_server)
        .await;

    let coordinator = Coordinator::new(create_test_config(2)).expect("Failed to create coordinator");
    let outcome = coordinator
        .run(vec![lead("Acme", &format!("{}/", mock_server.uri()))])
        .await;

    assert_eq!(outcome.records.len(), 1);
    let record = columns(&outcome.records[0]);

    assert_eq!(record["company_name"], "Acme");
    assert_eq!(record["contact_name"], "Ada");
    assert_eq!(record["homepage_title"], "Acme");
    assert_eq!(record["homepage_meta_desc"], "We build ML");
    assert_eq!(record["ai_signals_count"], "1");
    assert_eq!(record["tech_stack"], "");
    assert_eq!(record["contact_emails"], "hi@acme.test");
    assert_eq!(record["has_jobs"], "False");
    assert_eq!(record["jobs_ai_mentions"], "False");
    assert_eq!(record["has_pricing"], "False");
    assert_eq!(record["notes"], "ok");
    assert_eq!(record["ai_readiness_score"], "21");
}

#[tokio::test]
async fn test_empty_website_yields_zero_score() {
    let coordinator = Coordinator::new(create_test_config(2)).expect("Failed to create coordinator");
    let outcome = coordinator.run(vec![lead("Nowhere", "")]).await;

    let record = columns(&outcome.records[0]);
    assert_eq!(record["ai_readiness_score"], "0");
    assert_eq!(record["notes"], "No website supplied");
    assert_eq!(record["homepage_title"], "");
    assert_eq!(record["ai_signals_count"], "0");
    assert_eq!(record["contact_emails"], "");
    assert_eq!(record["has_jobs"], "False");
}

#[tokio::test]
async fn test_unreachable_homepage_yields_zero_score() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let coordinator = Coordinator::new(create_test_config(2)).expect("Failed to create coordinator");
    let outcome = coordinator.run(vec![lead("Gone", &mock_server.uri())]).await;

    let enrichment = &outcome.records[0].enrichment;
    assert_eq!(enrichment.notes, EnrichStatus::FetchFailed);
    assert_eq!(enrichment.ai_readiness_score, 0);
    assert!(enrichment.tech_stack.is_empty());
}

#[tokio::test]
async fn test_careers_and_pricing_links() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>Beta</title></head><body>
            <a href="/careers">Careers</a>
            <a href="/pricing">Pricing</a>
            </body></html>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/careers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><h2>Machine Learning Engineer</h2></body></html>"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // Pricing is detected from the link alone
    Mock::given(method("GET"))
        .and(path("/pricing"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let coordinator = Coordinator::new(create_test_config(2)).expect("Failed to create coordinator");
    let outcome = coordinator.run(vec![lead("Beta", &mock_server.uri())]).await;

    let enrichment = &outcome.records[0].enrichment;
    assert_eq!(enrichment.notes, EnrichStatus::Ok);
    assert_eq!(enrichment.ai_signals_count, 0);
    assert!(enrichment.has_jobs);
    assert!(enrichment.jobs_ai_mentions);
    assert!(enrichment.has_pricing);
    // 10 homepage + 20 jobs + 5 jobs AI + 10 pricing
    assert_eq!(enrichment.ai_readiness_score, 45);
}

#[tokio::test]
async fn test_modern_stack_bonus() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>Gamma</title>
            <script src="/_next/static/chunks/main.js"></script></head>
            <body><div id="__next"><p>Hello</p></div></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let coordinator = Coordinator::new(create_test_config(2)).expect("Failed to create coordinator");
    let outcome = coordinator.run(vec![lead("Gamma", &mock_server.uri())]).await;

    let record = columns(&outcome.records[0]);
    assert_eq!(record["tech_stack"], "Next.js");
    // 10 homepage + 15 modern stack
    assert_eq!(record["ai_readiness_score"], "25");
}

#[tokio::test]
async fn test_full_run_writes_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ACME_HOMEPAGE))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = dir.path().join("leads.csv");
    let output = dir.path().join("enriched.csv");

    std::fs::write(
        &input,
        format!(
            "company_name,website,contact_name,title,region\n\
             Acme,{}/,Ada,CTO,EMEA\n\
             Nowhere,,Bob,CEO,APAC\n",
            mock_server.uri()
        ),
    )
    .expect("Failed to write input");

    let stats = readiness_scout::run(create_test_config(4), &input, &output)
        .await
        .expect("Run failed");

    assert_eq!(stats.total_leads, 2);
    assert_eq!(stats.enriched, 1);
    assert_eq!(stats.no_website, 1);
    assert_eq!(stats.dropped, 0);
    assert_eq!(stats.rows_written, 2);

    let rows = read_output(&output);
    assert_eq!(rows.len(), 2);

    let acme = rows
        .iter()
        .find(|r| r["company_name"] == "Acme")
        .expect("Acme row missing");
    assert_eq!(acme["region"], "EMEA");
    assert_eq!(acme["ai_readiness_score"], "21");
    assert_eq!(acme["notes"], "ok");

    let nowhere = rows
        .iter()
        .find(|r| r["company_name"] == "Nowhere")
        .expect("Nowhere row missing");
    assert_eq!(nowhere["ai_readiness_score"], "0");
    assert_eq!(nowhere["notes"], "No website supplied");

    let mut reader = csv::Reader::from_path(&output).expect("Failed to open output");
    let header: Vec<String> = reader
        .headers()
        .expect("Missing header")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(
        header,
        vec![
            "company_name",
            "website",
            "contact_name",
            "title",
            "region",
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
        ]
    );
}

#[tokio::test]
async fn test_header_only_input_writes_nothing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = dir.path().join("leads.csv");
    let output = dir.path().join("enriched.csv");
    std::fs::write(&input, "company_name,website\n").expect("Failed to write input");

    let stats = readiness_scout::run(create_test_config(2), &input, &output)
        .await
        .expect("Run failed");

    assert_eq!(stats.rows_written, 0);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_input_fails_before_fetching() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = readiness_scout::run(
        create_test_config(2),
        &dir.path().join("missing.csv"),
        &dir.path().join("out.csv"),
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_many_leads_with_small_worker_pool() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>Same</title></head></html>")
                .set_delay(std::time::Duration::from_millis(20)),
        )
        .expect(20)
        .mount(&mock_server)
        .await;

    let leads = (0..20)
        .map(|i| lead(&format!("Lead {}", i), &format!("{}/lead/{}", mock_server.uri(), i)))
        .collect();

    let coordinator = Coordinator::new(create_test_config(3)).expect("Failed to create coordinator");
    let outcome = coordinator.run(leads).await;

    assert_eq!(outcome.dropped, 0);
    assert_eq!(outcome.records.len(), 20);
    assert!(outcome
        .records
        .iter()
        .all(|r| r.enrichment.ai_readiness_score == 10));

    let mut names: Vec<_> = outcome
        .records
        .iter()
        .map(|r| r.lead.company_name().to_string())
        .collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 20);
}

#[tokio::test]
async fn test_invalid_config_is_rejected_by_run() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = dir.path().join("leads.csv");
    let output = dir.path().join("enriched.csv");
    std::fs::write(&input, "company_name,website\nAcme,\n").expect("Failed to write input");

    let result = readiness_scout::run(create_test_config(0), &input, &output).await;

    assert!(matches!(result, Err(ScoutError::Config(_))));
    assert!(!output.exists());
}
