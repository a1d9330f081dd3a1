//! Error types for checkout.

use crate::cart_actor::CartError;
use crate::gateway::GatewayError;
use crate::model::CheckoutField;
use thiserror::Error;

/// Why a form cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The {0} is required")]
    MissingField(CheckoutField),

    #[error("A payment method is required")]
    MissingPaymentMethod,

    #[error("The cart is empty")]
    EmptyCart,

    #[error("No user is signed in")]
    NotSignedIn,
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingField(field) => format!("Please enter your {}.", field),
            ValidationError::MissingPaymentMethod => "Please choose a payment method.".to_string(),
            ValidationError::EmptyCart => "Your cart is empty.".to_string(),
            ValidationError::NotSignedIn => "Please sign in to place your order.".to_string(),
        }
    }
}

/// Errors returned by [`CheckoutOrchestrator::submit`](crate::checkout::CheckoutOrchestrator::submit).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The order endpoint rejected the order or could not be reached.
    #[error("Order submission failed: {0}")]
    Submission(#[from] GatewayError),

    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// `submit` was called outside the form-editing state.
    #[error("Checkout is not accepting submissions in its current state")]
    InvalidState,
}

impl CheckoutError {
    /// A short message suitable for showing to the customer.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::Validation(e) => e.user_message(),
            CheckoutError::Submission(_) => "Checkout failed, please retry.".to_string(),
            CheckoutError::Cart(e) => e.user_message().to_string(),
            CheckoutError::InvalidState => "Checkout is not open.".to_string(),
        }
    }
}
