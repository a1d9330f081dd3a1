//! # Framework Errors
//!
//! Errors raised by the store runtime itself, as opposed to the domain errors each
//! store client maps them into.

use crate::storage::StorageError;

/// Errors that can occur within the store framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
