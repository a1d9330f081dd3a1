use super::SessionProvider;
use crate::config::StorageKeys;
use crate::model::UserIdentity;
use crate::storage::{KeyValueStore, StorageError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Session backed by the `token` and `user` storage keys.
///
/// A user is only reported while a token is present. Unreadable storage or a malformed
/// user record reads as signed out, with a warning.
#[derive(Clone)]
pub struct StoredSession {
    storage: Arc<dyn KeyValueStore>,
    token_key: String,
    user_key: String,
}

impl StoredSession {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_keys(storage, &StorageKeys::default())
    }

    pub fn with_keys(storage: Arc<dyn KeyValueStore>, keys: &StorageKeys) -> Self {
        Self {
            storage,
            token_key: keys.token.clone(),
            user_key: keys.user.clone(),
        }
    }

    /// Records a successful login.
    #[instrument(skip(self, token, user), fields(user_id = %user.id))]
    pub async fn sign_in(&self, token: &str, user: &UserIdentity) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user)?;
        self.storage.set(&self.user_key, &raw).await?;
        self.storage.set(&self.token_key, token).await?;
        info!("Signed in");
        Ok(())
    }

    /// Forgets the token and the user record.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), StorageError> {
        self.storage.remove(&self.token_key).await?;
        self.storage.remove(&self.user_key).await?;
        info!("Signed out");
        Ok(())
    }

    pub async fn is_signed_in(&self) -> bool {
        self.current_user().await.is_some()
    }
}

#[async_trait]
impl SessionProvider for StoredSession {
    async fn token(&self) -> Option<String> {
        match self.storage.get(&self.token_key).await {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(key = %self.token_key, error = %e, "Token read failed, treating as signed out");
                None
            }
        }
    }

    async fn current_user(&self) -> Option<UserIdentity> {
        self.token().await?;
        let raw = match self.storage.get(&self.user_key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key = %self.user_key, error = %e, "User read failed, treating as signed out");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(key = %self.user_key, error = %e, "Stored user is malformed, treating as signed out");
                None
            }
        }
    }
}
