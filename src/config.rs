//! Runtime configuration for the storefront system.
//!
//! Everything has a default; a JSON document only needs the fields it overrides.

use serde::Deserialize;

/// Storage keys each collaborator reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub cart: String,
    pub favorites: String,
    pub token: String,
    pub user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            cart: "cart".to_string(),
            favorites: "favorites".to_string(),
            token: "token".to_string(),
            user: "user".to_string(),
        }
    }
}

/// Top-level configuration passed to
/// [`StorefrontSystem::with_config`](crate::lifecycle::StorefrontSystem::with_config).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Capacity of each store's request channel.
    pub buffer_size: usize,
    pub keys: StorageKeys,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            keys: StorageKeys::default(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
