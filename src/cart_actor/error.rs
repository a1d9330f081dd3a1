//! Error types for the Cart store.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The change could not be written to storage; the cart is as it was before.
    #[error("Cart persistence error: {0}")]
    Persistence(String),

    /// An error occurred while communicating with the cart actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    /// A short message suitable for showing to the customer.
    pub fn user_message(&self) -> &'static str {
        match self {
            CartError::Persistence(_) => "Could not save your cart.",
            CartError::ActorCommunicationError(_) => "Your cart is unavailable right now.",
        }
    }
}

impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Persistence(inner) => CartError::Persistence(inner.to_string()),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
