//! StoreEntity trait implementation for the [`Cart`].
//!
//! Maps each [`CartAction`] onto the cart's own methods and reports whether anything
//! changed, so that no-op taps never reach storage.

use super::actions::CartAction;
use crate::framework::{Outcome, StoreEntity};
use crate::model::Cart;
use std::convert::Infallible;

impl StoreEntity for Cart {
    type Action = CartAction;
    type ActionResult = Cart;
    type Error = Infallible;

    fn handle_action(&mut self, action: CartAction) -> Result<Outcome<Cart>, Infallible> {
        let changed = match action {
            CartAction::AddItem { product, quantity } => self.add_item(&product, quantity),
            CartAction::UpdateQuantity { product_id, quantity } => {
                self.update_quantity(&product_id, quantity)
            }
            CartAction::Increment(product_id) => self.increment(&product_id),
            CartAction::Decrement(product_id) => self.decrement(&product_id),
            CartAction::RemoveItem(product_id) => self.remove_item(&product_id),
            CartAction::Clear => {
                self.clear();
                true
            }
        };
        let snapshot = self.clone();
        Ok(if changed {
            Outcome::Changed(snapshot)
        } else {
            Outcome::Unchanged(snapshot)
        })
    }

    fn on_restore(&mut self) {
        self.normalize();
    }

    fn size(&self) -> usize {
        self.len()
    }
}
