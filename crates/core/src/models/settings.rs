use serde::{Deserialize, Serialize};

/// Base URL of the storefront's stock/catalog API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

/// Key under which the cart snapshot is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Cart store configuration. Every field has a default, so a partial
/// JSON document is enough to override a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where `/stock/{id}` and `/products/{id}` are served from.
    pub api_base_url: String,

    /// Persistent-store key holding the serialized cart.
    pub storage_key: String,

    /// HTTP request timeout (ignored on wasm32).
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
