//! Generic store framework for persisted, observable collections.
//!
//! This module provides the building blocks every store in the crate is made of:
//! one actor task owning the state, a cloneable client, and a watch channel
//! subscribers read committed states from.
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait that persisted collections implement
//! - [`StoreActor`] - Generic actor that owns, persists and publishes a collection
//! - [`StoreClient`] - Type-safe client for communicating with a store actor
//! - [`StoreHandle`] - Trait store-specific clients implement to inherit common calls
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreHandle;
pub use entity::{Outcome, StoreEntity};
pub use error::FrameworkError;
pub use message::{Response, StoreRequest};
