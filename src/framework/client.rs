//! # The Store Client
//!
//! [`StoreClient`] is the cheap, cloneable handle callers use to talk to a
//! [`StoreActor`](crate::framework::StoreActor). Each call sends a request and awaits the
//! reply on a `oneshot` channel.

use crate::framework::entity::StoreEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::StoreRequest;
use tokio::sync::{mpsc, oneshot, watch};

/// A type-safe client for interacting with a `StoreActor`.
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
    watcher: watch::Receiver<T>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>, watcher: watch::Receiver<T>) -> Self {
        Self { sender, watcher }
    }

    /// Returns a copy of the committed state.
    pub async fn snapshot(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(&self, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Re-reads the collection from storage, replacing the in-memory state.
    ///
    /// If storage cannot be read or parsed, the committed state is kept and returned.
    pub async fn restore(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Restore { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Subscribes to committed states.
    ///
    /// The receiver always holds the latest committed state; `changed()` resolves after
    /// each successful restore and each persisted action. Unchanged and failed actions do not notify.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.watcher.clone()
    }
}
