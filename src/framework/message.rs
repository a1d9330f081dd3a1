//! # Store Messages
//!
//! The request enum sent from a [`StoreClient`](crate::framework::StoreClient) to its
//! [`StoreActor`](crate::framework::StoreActor). Every request carries a `oneshot`
//! sender the actor answers on.

use crate::framework::entity::StoreEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to a store actor.
///
/// A store owns exactly one collection, so unlike a keyed resource there is no id:
/// requests read the whole snapshot, apply an action to it, or reload it from storage.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Snapshot {
        respond_to: Response<T>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Restore {
        respond_to: Response<T>,
    },
}
