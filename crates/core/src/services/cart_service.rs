use crate::errors::CoreError;
use crate::models::cart::{Cart, CartItem};
use crate::models::product::{Product, ProductId, Stock};

/// Cart mutation rules.
///
/// Pure business logic — no I/O, no API calls. Every mutation takes the
/// current cart by reference and returns a new one, leaving the input
/// untouched so a failed operation never leaves a half-applied cart.
pub struct CartService;

impl CartService {
    pub fn new() -> Self {
        Self
    }

    /// Amount the cart would hold after adding one more unit of `product_id`.
    pub fn desired_amount(&self, cart: &Cart, product_id: ProductId) -> i64 {
        cart.get(product_id)
            .map_or(1, |item| i64::from(item.amount) + 1)
    }

    /// Check that `requested` units of `product_id` are in stock.
    pub fn ensure_available(
        &self,
        product_id: ProductId,
        requested: i64,
        stock: &Stock,
    ) -> Result<(), CoreError> {
        if stock.covers(requested) {
            Ok(())
        } else {
            Err(CoreError::StockUnavailable {
                product_id,
                requested,
                available: stock.amount,
            })
        }
    }

    /// Bump an existing line by one unit, keeping its position.
    ///
    /// A line already at `u32::MAX` cannot grow and is reported as a
    /// stock shortage, whatever the remote availability says.
    pub fn increment(&self, cart: &Cart, product_id: ProductId) -> Result<Cart, CoreError> {
        let mut next = cart.clone();
        let idx = next
            .position(product_id)
            .ok_or(CoreError::ProductNotInCart(product_id))?;
        let item = &mut next.items_mut()[idx];
        item.amount = item
            .amount
            .checked_add(1)
            .ok_or(CoreError::StockUnavailable {
                product_id,
                requested: i64::from(item.amount) + 1,
                available: i64::from(u32::MAX),
            })?;
        Ok(next)
    }

    /// Append a new line with a single unit at the end of the cart.
    /// Fails if the product already has a line; use `increment` for that.
    pub fn append(&self, cart: &Cart, product: Product) -> Result<Cart, CoreError> {
        if cart.contains(product.id) {
            return Err(CoreError::ProductAlreadyInCart(product.id));
        }
        let mut next = cart.clone();
        next.items_mut().push(CartItem::new(product, 1));
        Ok(next)
    }

    /// Drop the line for `product_id`; every other line keeps its order.
    pub fn remove(&self, cart: &Cart, product_id: ProductId) -> Result<Cart, CoreError> {
        let idx = cart
            .position(product_id)
            .ok_or(CoreError::ProductNotInCart(product_id))?;
        let mut next = cart.clone();
        next.items_mut().remove(idx);
        Ok(next)
    }

    /// Set the absolute amount of an existing line.
    pub fn set_amount(
        &self,
        cart: &Cart,
        product_id: ProductId,
        amount: u32,
    ) -> Result<Cart, CoreError> {
        let mut next = cart.clone();
        let idx = next
            .position(product_id)
            .ok_or(CoreError::ProductNotInCart(product_id))?;
        next.items_mut()[idx].amount = amount;
        Ok(next)
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}
