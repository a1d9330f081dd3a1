//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient).

pub mod cart_client;
pub mod favorites_client;

pub use cart_client::*;
pub use favorites_client::*;
