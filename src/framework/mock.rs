//! # Mock Framework
//!
//! Utilities for testing code that talks to a store without spawning a real
//! [`StoreActor`](crate::framework::StoreActor).
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Storage** | None | Any `KeyValueStore` |
//! | **Determinism** | Scripted replies | Real state transitions |
//! | **Error Injection** | Easy (`return_err`) | Needs a failing store |
//! | **Use Case** | Logic *around* a client (checkout) | The store itself |
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue expectations up front, run the code, then [`MockClient::verify`].
//! - [`create_mock_client`] plus [`expect_action`] / [`expect_snapshot`]: drive the receiver
//!   by hand and inspect each request as it arrives.

use crate::framework::{FrameworkError, StoreClient, StoreEntity, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply to give it.
enum Expectation<T: StoreEntity> {
    Snapshot {
        response: Result<T, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
    Restore {
        response: Result<T, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: StoreEntity>(exps: &Expectations<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    exps.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in FIFO order. A request that does not
/// match the next expectation is answered with [`FrameworkError::ActorDropped`] and
/// counted as unexpected, which makes [`MockClient::verify`] panic.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Cart>::new();
/// mock.expect_snapshot().return_ok(cart);
///
/// let client = CartClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Expectations<T>,
    unexpected: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let (_notifier, watcher) = watch::channel(T::default());
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let unexpected = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let unexpected_clone = unexpected.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&expectations_clone).pop_front();

                match (request, expectation) {
                    (StoreRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Action { respond_to, .. }, Some(Expectation::Action { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Restore { respond_to }, Some(Expectation::Restore { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        unexpected_clone
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .push(format!("{:?}", request));
                        // Dropping the request drops its responder; the caller sees ActorDropped.
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender, watcher),
            expectations,
            unexpected,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
            restore: false,
        }
    }

    /// Expects a `restore` request.
    pub fn expect_restore(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
            restore: true,
        }
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let unexpected = self.unexpected.lock().unwrap_or_else(PoisonError::into_inner);
        assert!(unexpected.is_empty(), "Unexpected requests: {:?}", *unexpected);
        let remaining = lock(&self.expectations).len();
        assert!(remaining == 0, "Not all expectations were met. {} remaining", remaining);
    }
}

impl<T: StoreEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `snapshot` and `restore` expectations.
pub struct SnapshotExpectationBuilder<T: StoreEntity> {
    expectations: Expectations<T>,
    restore: bool,
}

impl<T: StoreEntity> SnapshotExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        let expectation = if self.restore {
            Expectation::Restore { response }
        } else {
            Expectation::Snapshot { response }
        };
        lock(&self.expectations).push_back(expectation);
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: StoreEntity> {
    expectations: Expectations<T>,
}

impl<T: StoreEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        lock(&self.expectations).push_back(Expectation::Action { response: Ok(result) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Action { response: Err(error) });
    }
}

// =============================================================================
// RECEIVER-DRIVEN HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls each request off the receiver, asserts on it, and
/// answers through the responder.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_notifier, watcher) = watch::channel(T::default());
    (StoreClient::new(sender, watcher), receiver)
}

/// Returns the next request if it is an Action.
pub async fn expect_action<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Returns the next request's responder if it is a Snapshot.
pub async fn expect_snapshot<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<oneshot::Sender<Result<T, FrameworkError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
