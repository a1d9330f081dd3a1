//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); every store log line
//! carries an `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run            # actions and payload sizes
//! RUST_LOG=storefront_core::checkout=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a checkout reads like:
//!
//! ```text
//! INFO Actor started entity_type="Cart" key=cart
//! INFO Restored entity_type="Cart" size=2
//! INFO submit: Submitting order items=2 total=35 payment_method=Credit Card
//! INFO submit: Order placed order_id=order_1
//! INFO submit:clear: Action ok entity_type="Cart" size=0
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the store
        .compact()
        .init();
}
