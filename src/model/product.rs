use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Type-safe identifier for catalog products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product as delivered by the catalog endpoint.
///
/// Only the fields the cart and favorites need are modelled; the rest of the catalog
/// record stays with the network layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(deserialize_with = "non_negative_price")]
    pub price: Decimal,
    #[serde(default, alias = "categories")]
    pub category: String,
    #[serde(default, alias = "imageCover")]
    pub image: Option<String>,
}

impl Product {
    /// Creates a new Product with no category or image.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Display name
    /// * `price` - Unit price, non-negative
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: String::new(),
            image: None,
        }
    }

    /// Whether the price is usable: catalog prices are never negative.
    pub fn has_valid_price(&self) -> bool {
        self.price >= Decimal::ZERO
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

fn non_negative_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    let price = <Decimal as Deserialize>::deserialize(deserializer)?;
    if price < Decimal::ZERO {
        return Err(de::Error::custom(format!("negative price {price}")));
    }
    Ok(price)
}

/// Formats an amount for display, rounding half away from zero to two places.
///
/// Totals are kept exact everywhere else; this is the only place they are rounded.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_rounds_for_display_only() {
        assert_eq!(format_amount(Decimal::new(35, 0)), "$35.00");
        assert_eq!(format_amount(Decimal::new(10005, 3)), "$10.01");
        assert_eq!(format_amount(Decimal::new(1999, 2)), "$19.99");
    }

    #[test]
    fn test_product_accepts_catalog_field_names() {
        let raw = r#"{"_id":"p1","name":"Lamp","price":"12.50","categories":"home","imageCover":"lamp.jpg"}"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id.as_str(), "p1");
        assert_eq!(product.price, Decimal::new(1250, 2));
        assert_eq!(product.category, "home");
        assert_eq!(product.image.as_deref(), Some("lamp.jpg"));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let raw = r#"{"_id":"N","name":"Broken","price":-10}"#;
        assert!(serde_json::from_str::<Product>(raw).is_err());

        let free: Product = serde_json::from_str(r#"{"_id":"F","name":"Sticker","price":0}"#).unwrap();
        assert!(free.has_valid_price());
        assert!(!Product::new("N", "Broken", Decimal::from(-10)).has_valid_price());
    }
}
