use crate::framework::{FrameworkError, StoreClient, StoreEntity};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for store-specific clients to inherit the operations every store has.
///
/// Implementors supply the inner [`StoreClient`] and an error mapping; `snapshot`,
/// `restore` and `subscribe` come for free.
#[async_trait]
pub trait StoreHandle<T: StoreEntity>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the specific store error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the committed state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Reload the state from storage.
    #[tracing::instrument(skip(self))]
    async fn restore(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().restore().await.map_err(Self::map_error)
    }

    fn subscribe(&self) -> watch::Receiver<T> {
        self.inner().subscribe()
    }
}
