//! Shopping cart data and its invariants.
//!
//! The cart holds at most one line per product. Adding a product that is already in
//! the cart raises that line's quantity instead of appending a second line, and no
//! update can bring a quantity below one.

use crate::model::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The shopping cart. Persisted as a bare JSON array of line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across lines (the badge count).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Exact `Σ price × quantity`. Never rounded.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Adds `quantity` units of `product`, coalescing with an existing line.
    ///
    /// Returns `false` (and changes nothing) when `quantity` is zero or the price is
    /// negative.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> bool {
        if quantity == 0 || !product.has_valid_price() {
            return false;
        }
        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.items.push(CartLineItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity,
            }),
        }
        true
    }

    /// Sets the quantity of an existing line.
    ///
    /// Quantities below one and unknown products are ignored.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }
        match self.items.iter_mut().find(|i| &i.product_id == product_id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    pub fn increment(&mut self, product_id: &ProductId) -> bool {
        match self.get(product_id).map(|line| line.quantity) {
            Some(current) => self.update_quantity(product_id, current.saturating_add(1)),
            None => false,
        }
    }

    /// Lowers a line by one; a line at quantity one stays at one.
    pub fn decrement(&mut self, product_id: &ProductId) -> bool {
        match self.get(product_id).map(|line| line.quantity) {
            Some(current) if current > 1 => self.update_quantity(product_id, current - 1),
            _ => false,
        }
    }

    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Restores the invariants on data read back from storage.
    ///
    /// Duplicate lines for one product are merged into the first (older app versions
    /// appended instead of coalescing). Zero-quantity and negative-price lines are dropped.
    pub fn normalize(&mut self) {
        let mut merged: Vec<CartLineItem> = Vec::with_capacity(self.items.len());
        for item in self.items.drain(..) {
            if item.quantity == 0 || item.price < Decimal::ZERO {
                continue;
            }
            match merged.iter_mut().find(|m| m.product_id == item.product_id) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
                None => merged.push(item),
            }
        }
        self.items = merged;
    }
}
