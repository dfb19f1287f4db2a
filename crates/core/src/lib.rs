pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use arc_swap::ArcSwap;
use models::{
    cart::Cart,
    product::ProductId,
    settings::Settings,
};
use providers::{
    http_stock::HttpStockService,
    traits::{NotificationSink, PersistentStore, StockService},
};
use services::cart_service::CartService;
use std::sync::Arc;
use tokio::sync::Mutex;

use errors::CoreError;

// ── Notification messages ───────────────────────────────────────────

pub const MSG_QUANTITY_UNAVAILABLE: &str = "Requested quantity unavailable";
pub const MSG_ADD_FAILED: &str = "Error adding product";
pub const MSG_REMOVE_FAILED: &str = "Error removing product";
pub const MSG_UPDATE_FAILED: &str = "Error updating product quantity";

/// The three cart mutations, used to pick the toast shown on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    Update,
}

impl Operation {
    /// Fixed user-facing message for a failed operation.
    /// Stock shortages share one message; everything else is per operation.
    pub fn notification(self, error: &CoreError) -> &'static str {
        if error.is_stock_unavailable() {
            return MSG_QUANTITY_UNAVAILABLE;
        }
        match self {
            Operation::Add => MSG_ADD_FAILED,
            Operation::Remove => MSG_REMOVE_FAILED,
            Operation::Update => MSG_UPDATE_FAILED,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "add_product"),
            Operation::Remove => write!(f, "remove_product"),
            Operation::Update => write!(f, "update_product_amount"),
        }
    }
}

/// Main entry point for the storefront cart core library.
///
/// Holds the current cart and the collaborators needed to change it.
/// Build one per session and share it as `Arc<CartStore>` with every
/// component that reads or edits the cart.
///
/// Reads (`cart()`) never wait. Mutations are serialized: each one holds
/// the write gate from reading the cart until the new snapshot is
/// published, so two concurrent adds of the same product cannot both
/// pass the stock check against the same stale amount.
#[must_use]
pub struct CartStore {
    cart: ArcSwap<Cart>,
    write_gate: Mutex<()>,
    cart_service: CartService,
    stock: Arc<dyn StockService>,
    storage: Arc<dyn PersistentStore>,
    notifier: Arc<dyn NotificationSink>,
    settings: Settings,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.cart.load().len())
            .field("stock_service", &self.stock.name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl CartStore {
    /// Open a store, restoring the cart persisted under `settings.storage_key`.
    ///
    /// A missing snapshot yields an empty cart. So does an unreadable or
    /// corrupt one: it is logged and overwritten by the next mutation.
    pub fn open(
        settings: Settings,
        stock: Arc<dyn StockService>,
        storage: Arc<dyn PersistentStore>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let cart = Self::load_snapshot(storage.as_ref(), &settings.storage_key);
        tracing::debug!(items = cart.len(), key = %settings.storage_key, "cart restored");
        Self {
            cart: ArcSwap::from_pointee(cart),
            write_gate: Mutex::new(()),
            cart_service: CartService::new(),
            stock,
            storage,
            notifier,
            settings,
        }
    }

    /// Open a store backed by the storefront's HTTP stock API.
    pub fn with_http(
        settings: Settings,
        storage: Arc<dyn PersistentStore>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let stock = Arc::new(HttpStockService::from_settings(&settings));
        Self::open(settings, stock, storage, notifier)
    }

    fn load_snapshot(store: &dyn PersistentStore, key: &str) -> Cart {
        match store.get(key) {
            Ok(Some(bytes)) => storage::snapshot::decode(&bytes).unwrap_or_else(|e| {
                tracing::warn!(key, error = %e, "discarding unreadable cart snapshot");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read cart snapshot");
                Cart::new()
            }
        }
    }

    // ── Read surface ────────────────────────────────────────────────

    /// Current cart snapshot.
    #[must_use]
    pub fn cart(&self) -> Arc<Cart> {
        self.cart.load_full()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Mutations (failures become notifications) ───────────────────

    /// Add one unit of a product, fetching its metadata if it is new to
    /// the cart. Returns the resulting cart.
    pub async fn add_product(&self, product_id: ProductId) -> Arc<Cart> {
        match self.try_add_product(product_id).await {
            Ok(cart) => cart,
            Err(e) => self.report(Operation::Add, product_id, &e),
        }
    }

    /// Drop a product's line from the cart. Returns the resulting cart.
    pub async fn remove_product(&self, product_id: ProductId) -> Arc<Cart> {
        match self.try_remove_product(product_id).await {
            Ok(cart) => cart,
            Err(e) => self.report(Operation::Remove, product_id, &e),
        }
    }

    /// Set a product's amount to exactly `amount`. Non-positive amounts
    /// are ignored without a notification. Returns the resulting cart.
    pub async fn update_product_amount(&self, product_id: ProductId, amount: i64) -> Arc<Cart> {
        match self.try_update_product_amount(product_id, amount).await {
            Ok(cart) => cart,
            Err(e) => self.report(Operation::Update, product_id, &e),
        }
    }

    fn report(&self, op: Operation, product_id: ProductId, error: &CoreError) -> Arc<Cart> {
        tracing::debug!(%op, product_id, error = %error, "cart operation failed");
        self.notifier.error(op.notification(error));
        self.cart()
    }

    // ── Mutations (fallible core) ───────────────────────────────────

    /// Like `add_product`, but hands the error back instead of notifying.
    pub async fn try_add_product(&self, product_id: ProductId) -> Result<Arc<Cart>, CoreError> {
        let _gate = self.write_gate.lock().await;
        let current = self.cart.load_full();

        let desired = self.cart_service.desired_amount(&current, product_id);
        let stock = self.stock.get_stock(product_id).await?;
        self.cart_service
            .ensure_available(product_id, desired, &stock)?;

        let next = if current.contains(product_id) {
            self.cart_service.increment(&current, product_id)?
        } else {
            let product = self.stock.get_product(product_id).await?;
            self.cart_service.append(&current, product)?
        };

        tracing::debug!(product_id, amount = desired, "product added to cart");
        Ok(self.commit(next))
    }

    /// Like `remove_product`, but hands the error back instead of notifying.
    pub async fn try_remove_product(&self, product_id: ProductId) -> Result<Arc<Cart>, CoreError> {
        let _gate = self.write_gate.lock().await;
        let current = self.cart.load_full();

        let next = self.cart_service.remove(&current, product_id)?;

        tracing::debug!(product_id, "product removed from cart");
        Ok(self.commit(next))
    }

    /// Like `update_product_amount`, but hands the error back instead of
    /// notifying.
    pub async fn try_update_product_amount(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<Arc<Cart>, CoreError> {
        if amount <= 0 {
            return Ok(self.cart());
        }

        let _gate = self.write_gate.lock().await;

        let stock = self.stock.get_stock(product_id).await?;
        self.cart_service
            .ensure_available(product_id, amount, &stock)?;
        let units = u32::try_from(amount).map_err(|_| CoreError::StockUnavailable {
            product_id,
            requested: amount,
            available: stock.amount,
        })?;

        let current = self.cart.load_full();
        let next = self.cart_service.set_amount(&current, product_id, units)?;

        tracing::debug!(product_id, amount, "cart amount updated");
        Ok(self.commit(next))
    }

    /// Write the new cart through to storage and publish it.
    /// A failed write is logged; the in-memory cart still moves forward.
    fn commit(&self, next: Cart) -> Arc<Cart> {
        let key = self.settings.storage_key.as_str();
        let persisted = storage::snapshot::encode(&next)
            .and_then(|bytes| self.storage.set(key, &bytes));
        if let Err(e) = persisted {
            tracing::warn!(key, error = %e, "failed to persist cart snapshot");
        }

        let next = Arc::new(next);
        self.cart.store(Arc::clone(&next));
        next
    }
}
