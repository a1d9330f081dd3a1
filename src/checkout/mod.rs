//! Checkout: the form, its validation, and the submit state machine.
//!
//! ```text
//! Idle ──open()──▶ FormEditing ──submit()──▶ Submitting ──ok──▶ Completed
//!                     ▲    │ invalid             │
//!                     │    ▼                     │ gateway error
//!                     └────┴─────────────────────┘
//! ```
//!
//! Validation failures never reach the gateway. A failed submission keeps the cart and
//! the typed form; only a successful one clears the cart.

mod error;
mod orchestrator;
mod validation;

pub use error::*;
pub use orchestrator::{CheckoutCompletion, CheckoutOrchestrator, CheckoutState};
pub use validation::{validate_form, validate_order};
