use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::product::{Product, ProductId};

/// Key of the line quantity in the flat JSON shape.
const AMOUNT_KEY: &str = "amount";

/// One line of the cart: a product and how many units of it.
///
/// Serialized flat, i.e. the product fields and `amount` sit side by side
/// in one JSON object, which is the shape older storefront snapshots use.
/// The line's own `amount` always wins over a catalog field of that name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,

    /// Units in the cart, always >= 1.
    pub amount: u32,
}

impl CartItem {
    pub fn new(mut product: Product, amount: u32) -> Self {
        product.extra.remove(AMOUNT_KEY);
        Self { product, amount }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Line total (`price * amount`).
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.amount)
    }
}

impl Serialize for CartItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let p = &self.product;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &p.id)?;
        map.serialize_entry("title", &p.title)?;
        map.serialize_entry("price", &p.price)?;
        map.serialize_entry("image", &p.image)?;
        for (key, value) in p.extra.iter().filter(|(k, _)| k.as_str() != AMOUNT_KEY) {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(AMOUNT_KEY, &self.amount)?;
        map.end()
    }
}

/// Ordered, duplicate-free list of cart lines.
///
/// A `Cart` is an immutable value from the store's point of view: every
/// successful mutation builds a new one (see `CartService`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from lines, keeping the first line for any repeated
    /// product id and dropping lines with a zero amount.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.amount == 0 || cart.contains(item.product_id()) {
                continue;
            }
            cart.items.push(item);
        }
        cart
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Sum of all amounts (what a cart badge shows).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.amount)).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub(crate) fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product_id() == product_id)
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<CartItem> {
        &mut self.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
