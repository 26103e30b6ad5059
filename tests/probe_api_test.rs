//! Integration tests for the capability prober against a mock API.

use httpmock::prelude::*;
use probekit::probe::{
    AuditLog, CapabilityProber, KeyKind, MemoryLog, ProbeOutcome, ProbeSummary, ENDPOINTS,
};
use std::fs;
use tempfile::TempDir;

const LIVE_KEY: &str = "sk_live_51HxYzAbCdEfGhIjKlMn";

fn mock_status(server: &MockServer, path: &str, status: u16) {
    server.mock(|when, then| {
        when.method(GET).path(format!("/v1/{}", path));
        then.status(status).body("{}");
    });
}

const PATHS: [&str; 7] = [
    "charges",
    "customers",
    "refunds",
    "balance",
    "payment_intents",
    "payment_methods",
    "disputes",
];

fn mock_all(server: &MockServer, status: u16) {
    for path in PATHS {
        mock_status(server, path, status);
    }
}

#[test]
fn full_access_key_passes_every_check() {
    let server = MockServer::start();
    mock_all(&server, 200);

    let mut prober = CapabilityProber::new(MemoryLog::new())
        .unwrap()
        .with_api_base(server.url("/v1"));
    let report = prober.probe(LIVE_KEY);

    assert_eq!(report.key_kind, KeyKind::Live);
    assert_eq!(report.results.len(), 7);
    assert!(report
        .results
        .iter()
        .all(|r| r.outcome == ProbeOutcome::Accessible));
    assert_eq!(
        report.summary(),
        ProbeSummary {
            total: 7,
            passed: 7,
            failed: 0
        }
    );
    assert!(report.summary().all_passed());
}

#[test]
fn statuses_are_classified_per_endpoint() {
    let server = MockServer::start();
    mock_status(&server, "charges", 200);
    mock_status(&server, "customers", 401);
    mock_status(&server, "refunds", 403);
    mock_status(&server, "balance", 500);
    mock_status(&server, "payment_intents", 404);
    mock_status(&server, "payment_methods", 429);
    mock_status(&server, "disputes", 200);

    let mut prober = CapabilityProber::new(MemoryLog::new())
        .unwrap()
        .with_api_base(server.url("/v1"));
    let report = prober.probe("sk_test_restrictedkey1234");

    let outcomes: Vec<_> = report.results.iter().map(|r| r.outcome.clone()).collect();
    assert_eq!(
        outcomes,
        vec![
            ProbeOutcome::Accessible,
            ProbeOutcome::Unauthorized,
            ProbeOutcome::Forbidden,
            ProbeOutcome::Inaccessible { status: 500 },
            ProbeOutcome::Inaccessible { status: 404 },
            ProbeOutcome::Inaccessible { status: 429 },
            ProbeOutcome::Accessible,
        ]
    );

    let summary = report.summary();
    assert_eq!((summary.total, summary.passed, summary.failed), (7, 2, 5));
    assert!(!summary.all_passed());
}

#[test]
fn results_follow_fixed_endpoint_order() {
    let server = MockServer::start();
    mock_all(&server, 401);

    let mut prober = CapabilityProber::new(MemoryLog::new())
        .unwrap()
        .with_api_base(server.url("/v1"));
    let report = prober.probe("rk_live_notasecretkey");

    let names: Vec<_> = report.results.iter().map(|r| r.name.as_str()).collect();
    let expected: Vec<_> = ENDPOINTS.iter().map(|e| e.name).collect();
    assert_eq!(names, expected);
    assert_eq!(report.key_kind, KeyKind::Unknown);
}

#[test]
fn requests_carry_bearer_credential() {
    let server = MockServer::start();
    let charges = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/charges")
            .header("authorization", format!("Bearer {}", LIVE_KEY));
        then.status(200);
    });
    let cards = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/payment_methods")
            .query_param("type", "card");
        then.status(200);
    });

    let mut prober = CapabilityProber::new(MemoryLog::new())
        .unwrap()
        .with_api_base(server.url("/v1"));
    let report = prober.probe(LIVE_KEY);

    charges.assert();
    cards.assert();
    assert_eq!(report.results[0].outcome, ProbeOutcome::Accessible);
    assert_eq!(report.results[5].name, "Cards Access");
    assert_eq!(report.results[5].outcome, ProbeOutcome::Accessible);
}

#[test]
fn each_endpoint_is_requested_once() {
    let server = MockServer::start();
    let balance = server.mock(|when, then| {
        when.method(GET).path("/v1/balance");
        then.status(403);
    });

    let mut prober = CapabilityProber::new(MemoryLog::new())
        .unwrap()
        .with_api_base(server.url("/v1"));
    let report = prober.probe(LIVE_KEY);

    balance.assert_calls(1);
    assert_eq!(report.results[3].outcome, ProbeOutcome::Forbidden);
    assert_eq!(report.results.len(), 7);
}

#[test]
fn redirect_to_refused_host_fails_only_that_endpoint() {
    let server = MockServer::start();
    for path in PATHS {
        if path == "refunds" {
            server.mock(|when, then| {
                when.method(GET).path("/v1/refunds");
                then.status(302).header("location", "http://127.0.0.1:1/x");
            });
        } else {
            mock_status(&server, path, 200);
        }
    }

    let mut prober = CapabilityProber::new(MemoryLog::new())
        .unwrap()
        .with_api_base(server.url("/v1"));
    let report = prober.probe(LIVE_KEY);

    assert_eq!(report.results.len(), 7);
    assert_eq!(report.results[2].name, "Refunds Access");
    assert!(matches!(
        report.results[2].outcome,
        ProbeOutcome::NetworkError { .. }
    ));
    let summary = report.summary();
    assert_eq!((summary.total, summary.passed, summary.failed), (7, 6, 1));
}

#[test]
fn audit_log_file_has_one_line_per_event_without_raw_key() {
    let server = MockServer::start();
    for path in PATHS {
        let status = if path == "refunds" { 403 } else { 200 };
        mock_status(&server, path, status);
    }

    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("logs").join("probekit.log");

    let mut prober = CapabilityProber::new(AuditLog::new(&log_path))
        .unwrap()
        .with_api_base(server.url("/v1"));
    prober.probe(LIVE_KEY);
    prober.probe(LIVE_KEY);

    let contents = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    // start + 7 probes + summary, twice
    assert_eq!(lines.len(), 18);
    assert!(!contents.contains(LIVE_KEY));

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["event"], "start");
    assert_eq!(first["key_kind"], "live");
    assert!(first["key"].as_str().unwrap().ends_with("KlMn"));

    let refunds: serde_json::Value = serde_json::from_str(lines[3]).unwrap();
    assert_eq!(refunds["event"], "probe");
    assert_eq!(refunds["endpoint"], "Refunds Access");
    assert_eq!(refunds["level"], "warning");

    let summary: serde_json::Value = serde_json::from_str(lines[8]).unwrap();
    assert_eq!(summary["event"], "summary");
    assert_eq!(summary["passed"], 6);
    assert_eq!(summary["failed"], 1);
}
