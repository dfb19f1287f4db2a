use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::product::{Product, ProductId, Stock};

/// Source of stock levels and product metadata.
///
/// The HTTP client in `http_stock` is the production implementation;
/// tests and offline demos plug in their own.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait StockService: Send + Sync {
    /// Human-readable name of this service (for logs/errors).
    fn name(&self) -> &str;

    /// Current availability of a product.
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, CoreError>;

    /// Display metadata of a product.
    async fn get_product(&self, product_id: ProductId) -> Result<Product, CoreError>;
}

/// Key-value byte store holding the cart snapshot (browser `localStorage`,
/// a file on disk, an in-memory map...).
pub trait PersistentStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError>;

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CoreError>;
}

/// User-facing error display (toasts). Fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn error(&self, message: &'static str);
}
