//! Probe outcomes and reports.

use std::fmt;

use serde::Serialize;

use super::key::KeyKind;

/// Classified result of a single probe.
///
/// Only `Accessible` counts as a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// HTTP 200.
    Accessible,
    /// HTTP 401: the key is invalid or expired.
    Unauthorized,
    /// HTTP 403: the key lacks the permission.
    Forbidden,
    /// Any other HTTP status.
    Inaccessible { status: u16 },
    /// The request never produced a response.
    NetworkError { cause: String },
}

impl ProbeOutcome {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => Self::Accessible,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            status => Self::Inaccessible { status },
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Accessible)
    }

    /// One-line description for terminal output and logs.
    pub fn description(&self) -> String {
        match self {
            Self::Accessible => "Valid and Accessible".to_string(),
            Self::Unauthorized => "Unauthorized (Invalid or expired key)".to_string(),
            Self::Forbidden => "Forbidden (Insufficient permissions)".to_string(),
            Self::Inaccessible { status } => format!("Inaccessible (Error code: {})", status),
            Self::NetworkError { cause } => format!("Network error ({})", cause),
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Outcome of probing one named endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub name: String,
    pub outcome: ProbeOutcome,
}

/// Pass/fail counts over a probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProbeSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl ProbeSummary {
    /// Whether every probe passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.total > 0
    }
}

/// Everything learned from probing one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub key_kind: KeyKind,
    pub results: Vec<ProbeResult>,
}

impl ProbeReport {
    /// Count passes and failures.
    pub fn summary(&self) -> ProbeSummary {
        let passed = self.results.iter().filter(|r| r.outcome.is_pass()).count();
        ProbeSummary {
            total: self.results.len(),
            passed,
            failed: self.results.len() - passed,
        }
    }
}
