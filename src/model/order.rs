//! Order payloads exchanged with the order endpoint.
//!
//! [`OrderSubmission`] is what checkout sends and [`OrderReceipt`] is what comes back on
//! success. [`OrderRecord`] is a past order as listed by the history endpoint.

use crate::model::{Cart, PaymentMethod, ProductId, ShippingAddress};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of an order, copied from the cart at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "product")]
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[serde(rename = "user")]
    pub user_id: String,
    pub order_items: Vec<OrderItem>,
    pub mobile_number: String,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl OrderSubmission {
    /// Builds the payload from the cart as it is right now.
    ///
    /// The total is recomputed from `cart`, never carried over from an earlier read.
    pub fn from_cart(
        user_id: impl Into<String>,
        cart: &Cart,
        mobile_number: impl Into<String>,
        shipping_address: ShippingAddress,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            order_items: cart
                .items()
                .iter()
                .map(|line| OrderItem {
                    product_id: line.product_id.clone(),
                    quantity: line.quantity,
                    price: line.price,
                })
                .collect(),
            mobile_number: mobile_number.into(),
            shipping_address,
            payment_method,
            total_price: cart.total(),
        }
    }
}

/// Identifier of a created order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    #[serde(rename = "_id", alias = "id")]
    pub order_id: String,
}

/// A placed order as returned by the order history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub shipping_address: ShippingAddress,
    pub order_items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}
