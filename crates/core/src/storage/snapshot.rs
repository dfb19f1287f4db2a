use crate::errors::CoreError;
use crate::models::cart::Cart;

/// Serialize a cart to snapshot bytes.
///
/// Format: a JSON array of cart lines, each line being the product object
/// with an `amount` field added, e.g.
/// ```text
/// [{"id":7,"title":"Tênis","price":139.9,"image":"...","amount":1}]
/// ```
pub fn encode(cart: &Cart) -> Result<Vec<u8>, CoreError> {
    serde_json::to_vec(cart)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize cart: {e}")))
}

/// Parse snapshot bytes back into a cart.
///
/// Repeated product ids and zero amounts are dropped (first line wins),
/// so a hand-edited or stale snapshot cannot break the cart invariants.
pub fn decode(bytes: &[u8]) -> Result<Cart, CoreError> {
    let cart: Cart = serde_json::from_slice(bytes)
        .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize cart: {e}")))?;
    Ok(Cart::from_items(cart.into_items()))
}
