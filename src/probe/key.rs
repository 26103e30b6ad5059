//! Secret key classification.

use std::fmt;

use serde::Serialize;

/// Environment a secret key belongs to, judged by its literal prefix.
///
/// Classification is informational. It never changes which endpoints are
/// probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// Starts with `sk_live`.
    Live,
    /// Starts with `sk_test`.
    Test,
    /// Anything else.
    Unknown,
}

impl KeyKind {
    /// Classify a key by prefix.
    pub fn classify(key: &str) -> Self {
        if key.starts_with("sk_live") {
            Self::Live
        } else if key.starts_with("sk_test") {
            Self::Test
        } else {
            Self::Unknown
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live Key",
            Self::Test => "Test Key",
            Self::Unknown => "Unknown Key Type",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_live_and_test_keys() {
        assert_eq!(KeyKind::classify("sk_live_abc"), KeyKind::Live);
        assert_eq!(KeyKind::classify("sk_test_abc"), KeyKind::Test);
    }

    #[test]
    fn prefix_match_is_literal() {
        assert_eq!(KeyKind::classify("sk_live"), KeyKind::Live);
        assert_eq!(KeyKind::classify("SK_LIVE_abc"), KeyKind::Unknown);
        assert_eq!(KeyKind::classify("pk_live_abc"), KeyKind::Unknown);
        assert_eq!(KeyKind::classify(""), KeyKind::Unknown);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(KeyKind::Test.to_string(), "Test Key");
        assert_eq!(KeyKind::Unknown.to_string(), "Unknown Key Type");
    }
}
