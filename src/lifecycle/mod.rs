//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the storefront's stores.
//!
//! [`StorefrontSystem`] plays the same role for the app that a dependency injection
//! container would: it spawns one actor per persisted collection, hands each the shared
//! storage backend through `run()`, and keeps the clients and task handles.
//!
//! ```rust,ignore
//! let system = StorefrontSystem::new(Arc::new(FileStore::open("data").await?));
//! system.cart_client.add(product).await?;
//!
//! let mut checkout = system.checkout(gateway.clone());
//! checkout.open();
//! // ... fill the form, submit ...
//!
//! drop(checkout);
//! system.shutdown().await?;
//! ```
//!
//! ## Shutdown
//!
//! An actor exits once every clone of its client is gone. `shutdown` drops the clients
//! the system holds and waits for the tasks, so anything else still holding a client
//! (a checkout orchestrator, for instance) must be dropped first.

mod storefront_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use storefront_system::StorefrontSystem;
