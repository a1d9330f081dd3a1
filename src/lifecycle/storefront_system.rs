use crate::checkout::CheckoutOrchestrator;
use crate::clients::{CartClient, FavoritesClient};
use crate::config::StorefrontConfig;
use crate::gateway::OrderGateway;
use crate::history::OrderHistory;
use crate::session::StoredSession;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tracing::{error, info};

/// The running storefront: both stores, the session, and their task handles.
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::new(Arc::new(MemoryStore::new()));
/// system.cart_client.add(product).await?;
/// system.favorites_client.toggle(product).await?;
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for the Cart store
    pub cart_client: CartClient,

    /// Client for the Favorites store
    pub favorites_client: FavoritesClient,

    pub session: Arc<StoredSession>,

    /// Task handles for the store actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Starts the system with the default configuration.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_config(storage, StorefrontConfig::default())
    }

    /// Creates both store actors and spawns them on `storage`.
    ///
    /// Each store restores its persisted snapshot before serving its first request, so
    /// the clients can be used right away.
    pub fn with_config(storage: Arc<dyn KeyValueStore>, config: StorefrontConfig) -> Self {
        let (cart_actor, cart_client) = crate::cart_actor::new(&config);
        let (favorites_actor, favorites_client) = crate::favorites_actor::new(&config);

        let cart_handle = tokio::spawn(cart_actor.run(storage.clone()));
        let favorites_handle = tokio::spawn(favorites_actor.run(storage.clone()));

        let session = Arc::new(StoredSession::with_keys(storage, &config.keys));
        info!(buffer_size = config.buffer_size, "Storefront started");

        Self {
            cart_client,
            favorites_client,
            session,
            handles: vec![cart_handle, favorites_handle],
        }
    }

    /// A fresh checkout flow over this system's cart and session.
    pub fn checkout(&self, gateway: Arc<dyn OrderGateway>) -> CheckoutOrchestrator {
        CheckoutOrchestrator::new(self.cart_client.clone(), self.session.clone(), gateway)
    }

    pub fn order_history(&self, gateway: Arc<dyn OrderGateway>) -> OrderHistory {
        OrderHistory::new(self.session.clone(), gateway)
    }

    /// Drops the clients and waits for both actors to exit.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.cart_client);
        drop(self.favorites_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
