//! Custom actions for the Favorites store.

use crate::model::{Product, ProductId};

/// Mutations of the favorites list. Every action answers with the resulting list.
#[derive(Debug, Clone)]
pub enum FavoritesAction {
    /// Bookmarks a product unless it is already bookmarked.
    Add(Product),
    /// Removes a bookmark if present.
    Remove(ProductId),
    /// Adds the product if absent, removes it if present.
    Toggle(Product),
}
