//! # The Store Entity Contract
//!
//! [`StoreEntity`] is the trait a persisted collection implements to be owned by a
//! [`StoreActor`](crate::framework::StoreActor). The actor handles channels, persistence
//! and notification; the entity only says how an action changes it.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Result of applying an action to an entity.
///
/// The actor only writes to storage and notifies subscribers for [`Outcome::Changed`].
/// No-op actions (removing an absent item, re-adding a favorite) report
/// [`Outcome::Unchanged`] and never touch storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R> {
    /// The entity was mutated; the new state must be persisted before it is committed.
    Changed(R),
    /// The entity is exactly as it was.
    Unchanged(R),
}

impl<R> Outcome<R> {
    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed(_))
    }

    pub fn into_inner(self) -> R {
        match self {
            Outcome::Changed(r) | Outcome::Unchanged(r) => r,
        }
    }
}

/// Trait that any persisted collection must implement to be managed by a `StoreActor`.
///
/// # Architecture Note
/// The cart and the favorites list behave the same way at the plumbing level: one owner,
/// a JSON snapshot under a storage key, a notification after every committed change.
/// Writing that loop once against this trait keeps each collection down to its own rules.
///
/// `Default` is the state used when nothing (or nothing readable) is stored.
pub trait StoreEntity:
    Clone + Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Enum of the mutations this collection supports.
    type Action: Send + Sync + Debug;

    /// The value returned to the caller after an action.
    type ActionResult: Send + Sync + Debug;

    /// Errors an action can raise. Use `Infallible` when every action is total.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply `action` to `self`.
    ///
    /// The actor calls this on a *copy* of the committed state, so an implementation may
    /// mutate freely: the copy is discarded if persisting it fails.
    fn handle_action(
        &mut self,
        action: Self::Action,
    ) -> Result<Outcome<Self::ActionResult>, Self::Error>;

    /// Called after a snapshot is read back from storage.
    ///
    /// Use it to re-establish invariants that older or hand-edited data may violate.
    fn on_restore(&mut self) {}

    /// Number of entries, used in log lines.
    fn size(&self) -> usize;
}
