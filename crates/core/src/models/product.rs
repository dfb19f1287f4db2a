use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Catalog identifier of a product.
pub type ProductId = u64;

/// Product metadata as returned by the stock service.
///
/// The storefront only relies on `id`, `title`, `price` and `image`; any
/// other field the catalog sends is kept in `extra` and written back
/// untouched, so snapshots never lose data the UI may want to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(default)]
    pub title: String,

    /// Unit price in the storefront currency.
    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub image: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extra metadata field (builder style).
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Current availability of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default)]
    pub id: Option<ProductId>,

    /// Maximum purchasable quantity. May be zero (sold out).
    pub amount: i64,
}

impl Stock {
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self {
            id: Some(id),
            amount,
        }
    }

    /// Whether `requested` units can be bought.
    pub fn covers(&self, requested: i64) -> bool {
        requested <= self.amount
    }
}
