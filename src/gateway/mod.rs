//! The order endpoint seam.
//!
//! Checkout and order history reach the backend only through [`OrderGateway`]. The HTTP
//! client that implements it in the app lives outside this crate; [`InMemoryGateway`]
//! stands in for it in tests and the demo.

mod memory;

pub use memory::InMemoryGateway;

use crate::model::{OrderReceipt, OrderRecord, OrderSubmission};
use async_trait::async_trait;
use thiserror::Error;

/// Failure talking to the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("Order endpoint returned status {0}")]
    Status(u16),

    /// The request never got an answer.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Order creation and listing.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Creates an order. `token` is the bearer token, if any.
    async fn create_order(
        &self,
        token: Option<&str>,
        submission: &OrderSubmission,
    ) -> Result<OrderReceipt, GatewayError>;

    /// Lists the orders of the user the token belongs to.
    async fn my_orders(&self, token: &str) -> Result<Vec<OrderRecord>, GatewayError>;
}
