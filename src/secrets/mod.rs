//! Secret redaction.
//!
//! - [`redact_key`] - Display form of a secret key (prefix + last four)
//! - [`OutputMasker`] - Replaces known secret values in free text

pub mod mask;

pub use mask::{redact_key, OutputMasker};
