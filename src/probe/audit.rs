//! Append-only audit log of probe outcomes (JSONL format).
//!
//! The log is an explicit dependency of [`CapabilityProber`](super::CapabilityProber)
//! rather than global state. Entries never contain the raw key.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::key::KeyKind;
use super::outcome::{ProbeOutcome, ProbeSummary};

/// Severity of an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditLevel {
    Info,
    Warning,
    Error,
}

impl AuditLevel {
    /// Level for a probe outcome: passes are info, auth refusals are
    /// warnings, everything else is an error.
    pub fn for_outcome(outcome: &ProbeOutcome) -> Self {
        match outcome {
            ProbeOutcome::Accessible => Self::Info,
            ProbeOutcome::Unauthorized | ProbeOutcome::Forbidden => Self::Warning,
            ProbeOutcome::Inaccessible { .. } | ProbeOutcome::NetworkError { .. } => Self::Error,
        }
    }
}

/// What an audit entry records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    /// A probe run started.
    Start { key_kind: KeyKind },
    /// One endpoint was probed.
    Probe {
        endpoint: String,
        outcome: ProbeOutcome,
    },
    /// All endpoints were probed.
    Summary {
        total: usize,
        passed: usize,
        failed: usize,
    },
}

impl From<ProbeSummary> for AuditEvent {
    fn from(summary: ProbeSummary) -> Self {
        Self::Summary {
            total: summary.total,
            passed: summary.passed,
            failed: summary.failed,
        }
    }
}

/// A single line of the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub level: AuditLevel,
    /// Redacted form of the key being probed.
    pub key: String,
    #[serde(flatten)]
    pub event: AuditEvent,
}

impl AuditEntry {
    /// Create an entry stamped with the current time.
    pub fn new(level: AuditLevel, key: impl Into<String>, event: AuditEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            key: key.into(),
            event,
        }
    }
}

/// Sink for audit entries.
pub trait ProbeLog {
    /// Record one entry.
    fn record(&mut self, entry: &AuditEntry) -> Result<()>;
}

/// Audit log backed by a JSONL file, or disabled.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: Option<PathBuf>,
}

impl AuditLog {
    /// Create a log that appends to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Create a log that discards entries.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Log file path, if enabled.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Ensure the parent directory exists.
    fn ensure_dir(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
        Ok(())
    }
}

impl ProbeLog for AuditLog {
    fn record(&mut self, entry: &AuditEntry) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        Self::ensure_dir(path)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open {:?}", path))?;

        let json = serde_json::to_string(entry)?;
        writeln!(file, "{}", json)?;

        Ok(())
    }
}

/// In-memory log, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Vec<AuditEntry>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }
}

impl ProbeLog for MemoryLog {
    fn record(&mut self, entry: &AuditEntry) -> Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn probe_entry(outcome: ProbeOutcome) -> AuditEntry {
        AuditEntry::new(
            AuditLevel::for_outcome(&outcome),
            "sk_test_****abcd",
            AuditEvent::Probe {
                endpoint: "Charges Access".to_string(),
                outcome,
            },
        )
    }

    #[test]
    fn levels_follow_outcome_severity() {
        assert_eq!(
            AuditLevel::for_outcome(&ProbeOutcome::Accessible),
            AuditLevel::Info
        );
        assert_eq!(
            AuditLevel::for_outcome(&ProbeOutcome::Forbidden),
            AuditLevel::Warning
        );
        assert_eq!(
            AuditLevel::for_outcome(&ProbeOutcome::Inaccessible { status: 500 }),
            AuditLevel::Error
        );
    }

    #[test]
    fn appends_one_line_per_entry() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logs").join("probe.log");
        let mut log = AuditLog::new(&path);

        log.record(&probe_entry(ProbeOutcome::Accessible)).unwrap();
        log.record(&probe_entry(ProbeOutcome::Unauthorized)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["level"], "warning");
        assert_eq!(second["event"], "probe");
        assert_eq!(second["endpoint"], "Charges Access");
        assert_eq!(second["outcome"]["kind"], "unauthorized");
    }

    #[test]
    fn existing_content_is_preserved() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("probe.log");
        fs::write(&path, "earlier line\n").unwrap();

        let mut log = AuditLog::new(&path);
        log.record(&probe_entry(ProbeOutcome::Accessible)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("earlier line\n"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn disabled_log_writes_nothing() {
        let mut log = AuditLog::disabled();
        assert!(log.path().is_none());
        log.record(&probe_entry(ProbeOutcome::Accessible)).unwrap();
    }

    #[test]
    fn summary_event_flattens_counts() {
        let summary = ProbeSummary {
            total: 7,
            passed: 2,
            failed: 5,
        };
        let entry = AuditEntry::new(AuditLevel::Info, "***", summary.into());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["event"], "summary");
        assert_eq!(json["total"], 7);
        assert_eq!(json["failed"], 5);
    }

    #[test]
    fn memory_log_keeps_order() {
        let mut log = MemoryLog::new();
        log.record(&probe_entry(ProbeOutcome::Accessible)).unwrap();
        log.record(&probe_entry(ProbeOutcome::Forbidden)).unwrap();
        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.entries()[1].level, AuditLevel::Warning);
    }
}
