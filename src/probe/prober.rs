//! Sequential capability probing.

use std::error::Error as _;

use reqwest::blocking::Client;

use crate::error::Result;
use crate::secrets::{redact_key, OutputMasker};

use super::audit::{AuditEntry, AuditEvent, AuditLevel, ProbeLog};
use super::endpoint::{Endpoint, DEFAULT_API_BASE, ENDPOINTS};
use super::key::KeyKind;
use super::outcome::{ProbeOutcome, ProbeReport, ProbeResult};

/// Receives progress callbacks while a probe run is in flight.
///
/// Both methods default to doing nothing.
pub trait ProbeObserver {
    /// Called before `endpoint` is requested. `index` is zero-based.
    fn on_probe_start(&mut self, _index: usize, _total: usize, _endpoint: &Endpoint) {}

    /// Called once the endpoint's outcome is known.
    fn on_probe_finish(&mut self, _index: usize, _total: usize, _result: &ProbeResult) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProbeObserver for NoopObserver {}

/// Probes a secret key against each endpoint in [`ENDPOINTS`].
///
/// Requests are issued one at a time in fixed order. Every endpoint is
/// attempted exactly once regardless of earlier outcomes, so a report always
/// holds seven results.
///
/// # Example
///
/// ```no_run
/// use probekit::probe::{CapabilityProber, MemoryLog};
///
/// let mut prober = CapabilityProber::new(MemoryLog::new()).unwrap();
/// let report = prober.probe("sk_test_example");
/// assert_eq!(report.results.len(), 7);
/// ```
pub struct CapabilityProber<L> {
    client: Client,
    api_base: String,
    log: L,
}

impl<L: ProbeLog> CapabilityProber<L> {
    /// Create a prober against the default API base.
    ///
    /// The HTTP client keeps reqwest's default timeout; nothing is retried.
    pub fn new(log: L) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("probekit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(anyhow::Error::from)?;

        Ok(Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            log,
        })
    }

    /// Point the prober at a different API base (e.g. a local mock).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// API base endpoint paths are joined onto.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// The audit log this prober writes to.
    pub fn log(&self) -> &L {
        &self.log
    }

    /// Consume the prober, returning its audit log.
    pub fn into_log(self) -> L {
        self.log
    }

    /// Probe every endpoint with `credential`.
    pub fn probe(&mut self, credential: &str) -> ProbeReport {
        self.probe_with(credential, &mut NoopObserver)
    }

    /// Probe every endpoint, reporting progress to `observer`.
    pub fn probe_with(
        &mut self,
        credential: &str,
        observer: &mut dyn ProbeObserver,
    ) -> ProbeReport {
        let key_kind = KeyKind::classify(credential);
        let redacted = redact_key(credential);
        let mut masker = OutputMasker::new();
        masker.add_secret(credential);

        tracing::info!(key = %redacted, kind = %key_kind, "probing key");
        self.audit(AuditEntry::new(
            AuditLevel::Info,
            &redacted,
            AuditEvent::Start { key_kind },
        ));

        let total = ENDPOINTS.len();
        let mut results = Vec::with_capacity(total);

        for (index, endpoint) in ENDPOINTS.iter().enumerate() {
            observer.on_probe_start(index, total, endpoint);

            let outcome = match self.request(endpoint, credential) {
                Ok(status) => ProbeOutcome::from_status(status),
                Err(cause) => ProbeOutcome::NetworkError {
                    cause: masker.mask(&cause),
                },
            };

            match AuditLevel::for_outcome(&outcome) {
                AuditLevel::Info => tracing::info!(endpoint = endpoint.name, "{}", outcome),
                AuditLevel::Warning => tracing::warn!(endpoint = endpoint.name, "{}", outcome),
                AuditLevel::Error => tracing::error!(endpoint = endpoint.name, "{}", outcome),
            }
            self.audit(AuditEntry::new(
                AuditLevel::for_outcome(&outcome),
                &redacted,
                AuditEvent::Probe {
                    endpoint: endpoint.name.to_string(),
                    outcome: outcome.clone(),
                },
            ));

            let result = ProbeResult {
                name: endpoint.name.to_string(),
                outcome,
            };
            observer.on_probe_finish(index, total, &result);
            results.push(result);
        }

        let report = ProbeReport { key_kind, results };
        let summary = report.summary();
        tracing::info!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            "probe summary"
        );
        self.audit(AuditEntry::new(AuditLevel::Info, &redacted, summary.into()));

        report
    }

    /// Issue one GET and return its status, or a description of the
    /// transport failure.
    fn request(&self, endpoint: &Endpoint, credential: &str) -> std::result::Result<u16, String> {
        let url = endpoint.url(&self.api_base);
        tracing::debug!(%url, "sending probe");

        self.client
            .get(&url)
            .bearer_auth(credential)
            .send()
            .map(|response| response.status().as_u16())
            .map_err(|e| error_chain(&e))
    }

    fn audit(&mut self, entry: AuditEntry) {
        if let Err(e) = self.log.record(&entry) {
            tracing::warn!("Failed to write audit log: {:#}", e);
        }
    }
}

/// Render an error and its sources as `outer: inner: root`.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
