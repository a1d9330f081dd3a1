//! Cart-specific store logic: actions, entity implementation and errors.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::config::StorefrontConfig;
use crate::framework::StoreActor;
use crate::model::Cart;

/// Creates a new Cart actor and its client.
pub fn new(config: &StorefrontConfig) -> (StoreActor<Cart>, CartClient) {
    let (actor, generic_client) = StoreActor::new(config.buffer_size, config.keys.cart.clone());
    let client = CartClient::new(generic_client);

    (actor, client)
}
