//! StoreEntity trait implementation for [`Favorites`].

use super::actions::FavoritesAction;
use crate::framework::{Outcome, StoreEntity};
use crate::model::Favorites;
use std::convert::Infallible;

impl StoreEntity for Favorites {
    type Action = FavoritesAction;
    type ActionResult = Favorites;
    type Error = Infallible;

    fn handle_action(&mut self, action: FavoritesAction) -> Result<Outcome<Favorites>, Infallible> {
        let changed = match action {
            FavoritesAction::Add(product) => self.add(&product),
            FavoritesAction::Remove(product_id) => self.remove(&product_id),
            FavoritesAction::Toggle(product) => {
                self.toggle(&product);
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
