//! # The Store Actor
//!
//! [`StoreActor`] is the server half of a store: it owns the committed state, the receiver
//! end of the request channel, and the sender end of the notification channel.
//!
//! ## Persist, then commit
//!
//! An action is applied to a copy of the state. A changed copy is written to storage first
//! and only becomes the committed state once the write succeeds, so memory and storage
//! never disagree after a failed write.

use crate::framework::client::StoreClient;
use crate::framework::entity::{Outcome, StoreEntity};
use crate::framework::error::FrameworkError;
use crate::framework::message::StoreRequest;
use crate::storage::{KeyValueStore, StorageError};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The generic actor that owns one persisted collection.
///
/// **Concurrency Model**:
/// Requests are processed one at a time in arrival order, each seeing the state left by
/// the previous one. No lock guards `state`; the task owns it outright.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    state: T,
    key: String,
    notifier: watch::Sender<T>,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates the actor and its client.
    ///
    /// `key` is the storage key the collection is persisted under.
    pub fn new(buffer_size: usize, key: impl Into<String>) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (notifier, watcher) = watch::channel(T::default());
        let actor = Self {
            receiver,
            state: T::default(),
            key: key.into(),
            notifier,
        };
        let client = StoreClient::new(sender, watcher);
        (actor, client)
    }

    /// Runs the actor's event loop until every client is dropped.
    ///
    /// # Context Injection
    /// The storage backend is handed in here rather than at construction, so the same
    /// actor can be wired to a file store in the app and a memory store in tests.
    ///
    /// The persisted snapshot is restored before the first request is served.
    pub async fn run(mut self, storage: Arc<dyn KeyValueStore>) {
        // Extract just the type name (e.g., "Cart" instead of "storefront_core::model::cart::Cart")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, key = %self.key, "Actor started");

        self.restore_on_start(storage.as_ref(), entity_type).await;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Snapshot { respond_to } => {
                    debug!(entity_type, size = self.state.size(), "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StoreRequest::Restore { respond_to } => {
                    debug!(entity_type, "Restore");
                    self.reload(storage.as_ref(), entity_type).await;
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StoreRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    let mut next = self.state.clone();
                    let result = match next.handle_action(action) {
                        Ok(Outcome::Unchanged(value)) => {
                            debug!(entity_type, "Action left state unchanged");
                            Ok(value)
                        }
                        Ok(Outcome::Changed(value)) => {
                            match self.persist(&next, storage.as_ref()).await {
                                Ok(()) => {
                                    self.commit(next);
                                    info!(entity_type, size = self.state.size(), "Action ok");
                                    Ok(value)
                                }
                                Err(e) => {
                                    warn!(entity_type, key = %self.key, error = %e, "Persist failed, state unchanged");
                                    Err(FrameworkError::Persistence(e))
                                }
                            }
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Action failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.state.size(), "Shutdown");
    }

    /// Reads the stored snapshot. `None` means storage could not be read or parsed.
    async fn load(&self, storage: &dyn KeyValueStore, entity_type: &str) -> Option<T> {
        match storage.get(&self.key).await {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(mut state) => {
                    state.on_restore();
                    Some(state)
                }
                Err(e) => {
                    warn!(entity_type, key = %self.key, error = %e, "Stored snapshot is malformed");
                    None
                }
            },
            Ok(None) => {
                debug!(entity_type, key = %self.key, "Nothing stored");
                Some(T::default())
            }
            Err(e) => {
                warn!(entity_type, key = %self.key, error = %e, "Storage read failed");
                None
            }
        }
    }

    /// Startup restore: an unreadable snapshot yields an empty collection.
    ///
    /// Failures are logged and swallowed: a corrupt cart must never keep the app from
    /// starting.
    async fn restore_on_start(&mut self, storage: &dyn KeyValueStore, entity_type: &str) {
        let restored = match self.load(storage, entity_type).await {
            Some(state) => state,
            None => {
                warn!(entity_type, key = %self.key, "Starting empty");
                T::default()
            }
        };
        info!(entity_type, size = restored.size(), "Restored");
        self.commit(restored);
    }

    /// Explicit reload. An unreadable snapshot leaves the committed state and subscribers
    /// untouched.
    async fn reload(&mut self, storage: &dyn KeyValueStore, entity_type: &str) {
        match self.load(storage, entity_type).await {
            Some(state) => {
                info!(entity_type, size = state.size(), "Restored");
                self.commit(state);
            }
            None => {
                warn!(entity_type, size = self.state.size(), "Reload failed, keeping committed state");
            }
        }
    }

    async fn persist(&self, state: &T, storage: &dyn KeyValueStore) -> Result<(), StorageError> {
        let raw = serde_json::to_string(state)?;
        storage.set(&self.key, &raw).await
    }

    fn commit(&mut self, state: T) {
        self.state = state;
        self.notifier.send_replace(self.state.clone());
    }
}
