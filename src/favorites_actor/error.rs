//! Error types for the Favorites store.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during favorites operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FavoritesError {
    /// The change could not be written to storage; the list is as it was before.
    #[error("Favorites persistence error: {0}")]
    Persistence(String),

    /// An error occurred while communicating with the favorites actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl FavoritesError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FavoritesError::Persistence(_) => "Could not save your favorites.",
            FavoritesError::ActorCommunicationError(_) => "Your favorites are unavailable right now.",
        }
    }
}

impl From<FrameworkError> for FavoritesError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Persistence(inner) => FavoritesError::Persistence(inner.to_string()),
            other => FavoritesError::ActorCommunicationError(other.to_string()),
        }
    }
}
