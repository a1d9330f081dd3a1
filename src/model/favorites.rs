use crate::model::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as it looked when it was bookmarked.
///
/// This is a copy, not a reference: later catalog price changes do not show up here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default, alias = "categories")]
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<&Product> for FavoriteEntry {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }
}

/// Bookmarked products in the order they were added. Unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    entries: Vec<FavoriteEntry>,
}

impl Favorites {
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries.iter().any(|e| &e.id == product_id)
    }

    /// Bookmarks `product` unless it is already bookmarked.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.entries.push(FavoriteEntry::from(product));
        true
    }

    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.id != product_id);
        self.entries.len() != before
    }

    /// Flips membership and returns whether `product` is now a favorite.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(&product.id) {
            false
        } else {
            self.add(product)
        }
    }

    /// Drops repeated entries, keeping the first.
    pub fn normalize(&mut self) {
        let mut seen: Vec<ProductId> = Vec::with_capacity(self.entries.len());
        self.entries.retain(|e| {
            if seen.contains(&e.id) {
                false
            } else {
                seen.push(e.id.clone());
                true
            }
        });
    }
}
