//! # Storefront Core
//!
//! The cart, favorites and checkout state of a mobile storefront, independent of any UI.
//!
//! Each persisted collection (the cart, the favorites) lives in its own store: a Tokio
//! task that owns the collection, applies one request at a time, writes every change to
//! a key-value store before committing it, and publishes committed states to subscribers.
//! Checkout reads the cart and the session, talks to the order endpoint, and empties the
//! cart once an order goes through.
//!
//! ## Architecture Notes
//!
//! ### 1. One writer per collection
//! A store processes its requests sequentially, so two quick taps on "add to cart" can
//! never lose an update, even on a multi-threaded runtime. No locks guard the state.
//!
//! ### 2. Persist, then commit
//! A change that cannot be saved is not applied. Callers get a `Persistence` error and
//! the in-memory cart stays as it was.
//!
//! ### 3. Context Injection
//! Storage is handed to each actor through `run()`. Tests use
//! [`MemoryStore`](storage::MemoryStore), the demo uses [`FileStore`](storage::FileStore).
//!
//! ### 4. Type-Safe Error Handling
//! Each component has its own error enum (`CartError`, `CheckoutError`, ...) with a
//! `user_message()` for display.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`StoreActor<T>`](framework::StoreActor) and the
//! [`StoreEntity`](framework::StoreEntity) trait collections implement.
//!
//! ### 2. The Stores ([`cart_actor`], [`favorites_actor`], [`clients`])
//! Actions, entity implementations and errors for each collection, and the typed
//! clients ([`CartClient`](clients::CartClient), [`FavoritesClient`](clients::FavoritesClient))
//! the UI calls.
//!
//! ### 3. Checkout ([`checkout`], [`history`], [`session`], [`gateway`])
//! The checkout state machine, the order history read path, the session it reads the
//! user from, and the [`OrderGateway`](gateway::OrderGateway) seam to the backend.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`StorefrontSystem`](lifecycle::StorefrontSystem) spawns and wires the stores and
//! shuts them down.
//!
//! ### 5. Data ([`model`], [`storage`], [`config`])
//! Plain data types, the key-value persistence seam, and runtime configuration.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -- ./data
//! ```

pub mod cart_actor;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod favorites_actor;
pub mod framework;
pub mod gateway;
pub mod history;
pub mod lifecycle;
pub mod model;
pub mod session;
pub mod storage;
