use thiserror::Error;

use crate::models::product::ProductId;

/// Unified error type for the entire storefront-cart-core library.
/// Every fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Cart rules ──────────────────────────────────────────────────
    #[error("Requested {requested} of product {product_id}, only {available} in stock")]
    StockUnavailable {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    #[error("Product not in cart: {0}")]
    ProductNotInCart(ProductId),

    #[error("Product already in cart: {0}")]
    ProductAlreadyInCart(ProductId),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({service}): {message}")]
    Api { service: String, message: String },

    #[error("Network error: {0}")]
    Network(String),

    // ── Snapshot / Storage ──────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),
}

impl CoreError {
    /// True for the "not enough stock" family of failures.
    pub fn is_stock_unavailable(&self) -> bool {
        matches!(self, CoreError::StockUnavailable { .. })
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors carry the full URL; drop any query string.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
