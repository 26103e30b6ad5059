//! Credential redaction for logs and terminal output.

/// Number of trailing characters left visible by [`redact_key`].
const VISIBLE_SUFFIX: usize = 4;

/// Redact a secret key for display.
///
/// Keeps a recognised `sk_live_` / `sk_test_` prefix and the last four
/// characters; everything else becomes `*`. Keys too short to keep a
/// suffix are fully masked.
///
/// # Example
///
/// ```
/// use probekit::secrets::redact_key;
///
/// assert_eq!(redact_key("sk_test_abcdefgh1234"), "sk_test_********1234");
/// assert_eq!(redact_key("short"), "*****");
/// ```
pub fn redact_key(key: &str) -> String {
    let prefix = ["sk_live_", "sk_test_"]
        .into_iter()
        .find(|p| key.starts_with(*p))
        .unwrap_or("");
    let rest: Vec<char> = key[prefix.len()..].chars().collect();

    if rest.len() <= VISIBLE_SUFFIX * 2 {
        return "*".repeat(key.chars().count());
    }

    let hidden = rest.len() - VISIBLE_SUFFIX;
    let suffix: String = rest[hidden..].iter().collect();
    format!("{}{}{}", prefix, "*".repeat(hidden), suffix)
}

/// Masks registered secret values in arbitrary text.
///
/// Used to scrub transport error messages before they reach the audit log.
///
/// # Example
///
/// ```
/// use probekit::secrets::OutputMasker;
///
/// let mut masker = OutputMasker::new();
/// masker.add_secret("sk_test_supersecret");
///
/// let output = masker.mask("request with sk_test_supersecret failed");
/// assert_eq!(output, "request with [REDACTED] failed");
/// ```
#[derive(Debug, Clone)]
pub struct OutputMasker {
    secrets: Vec<String>,
    mask: String,
}

impl OutputMasker {
    /// Create a new masker with default mask string.
    pub fn new() -> Self {
        Self::with_mask("[REDACTED]")
    }

    /// Create a masker with a custom mask string.
    pub fn with_mask(mask: impl Into<String>) -> Self {
        Self {
            secrets: Vec::new(),
            mask: mask.into(),
        }
    }

    /// Register a secret value to be masked.
    ///
    /// Empty strings are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() && !self.secrets.contains(&value) {
            self.secrets.push(value);
        }
    }

    /// Mask any secret values in the given string.
    pub fn mask(&self, input: &str) -> String {
        self.secrets
            .iter()
            .fold(input.to_string(), |acc, secret| acc.replace(secret, &self.mask))
    }

    /// Get the number of registered secrets.
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }
}

impl Default for OutputMasker {
    fn default() -> Self {
        Self::new()
    }
}
