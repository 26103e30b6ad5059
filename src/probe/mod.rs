//! Secret key capability probing.
//!
//! A key is checked against a fixed list of read-only REST endpoints; each
//! HTTP response is classified by status code alone.
//!
//! - [`CapabilityProber`] - Runs the probes and writes the audit log
//! - [`ProbeOutcome`] / [`ProbeReport`] - Classified results
//! - [`AuditLog`] - Append-only JSONL record of outcomes
//! - [`KeyKind`] - Live / test / unknown, by prefix

pub mod audit;
pub mod endpoint;
pub mod key;
pub mod outcome;
pub mod prober;

pub use audit::{AuditEntry, AuditEvent, AuditLevel, AuditLog, MemoryLog, ProbeLog};
pub use endpoint::{Endpoint, DEFAULT_API_BASE, ENDPOINTS};
pub use key::KeyKind;
pub use outcome::{ProbeOutcome, ProbeReport, ProbeResult, ProbeSummary};
pub use prober::{CapabilityProber, NoopObserver, ProbeObserver};
