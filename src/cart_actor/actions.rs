//! Custom actions for the Cart store.
//!
//! This module defines the mutations that can be applied to a [`Cart`](crate::model::Cart).
//! They are handled by [`StoreEntity::handle_action`](crate::framework::StoreEntity::handle_action);
//! see [`impl StoreEntity for Cart`](crate::model::Cart#impl-StoreEntity-for-Cart).

use crate::model::{Product, ProductId};

/// Mutations of the cart. Every action answers with the resulting cart.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds units of a product, coalescing with an existing line.
    AddItem { product: Product, quantity: u32 },
    /// Sets a line's quantity. Values below one are ignored.
    UpdateQuantity { product_id: ProductId, quantity: u32 },
    /// Raises a line by one.
    Increment(ProductId),
    /// Lowers a line by one, never below one.
    Decrement(ProductId),
    /// Removes a line if present.
    RemoveItem(ProductId),
    /// Empties the cart. Always persisted, even when already empty.
    Clear,
}
