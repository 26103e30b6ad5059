//! The fixed set of capability endpoints.

/// Default REST API base that endpoint paths are joined onto.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com/v1";

/// A named, read-only capability endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Human-readable capability name.
    pub name: &'static str,
    /// Path (and query) relative to the API base.
    pub path: &'static str,
}

impl Endpoint {
    /// Full URL for this endpoint under `api_base`.
    pub fn url(&self, api_base: &str) -> String {
        format!("{}/{}", api_base.trim_end_matches('/'), self.path)
    }
}

/// Endpoints in probe order.
pub const ENDPOINTS: [Endpoint; 7] = [
    Endpoint {
        name: "Charges Access",
        path: "charges",
    },
    Endpoint {
        name: "Customers Access",
        path: "customers",
    },
    Endpoint {
        name: "Refunds Access",
        path: "refunds",
    },
    Endpoint {
        name: "Balance Access",
        path: "balance",
    },
    Endpoint {
        name: "Payment Intents Access",
        path: "payment_intents",
    },
    Endpoint {
        name: "Cards Access",
        path: "payment_methods?type=card",
    },
    Endpoint {
        name: "Disputes Access",
        path: "disputes",
    },
];
