//! Favorites-specific store logic.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::FavoritesClient;
use crate::config::StorefrontConfig;
use crate::framework::StoreActor;
use crate::model::Favorites;

/// Creates a new Favorites actor and its client.
pub fn new(config: &StorefrontConfig) -> (StoreActor<Favorites>, FavoritesClient) {
    let (actor, generic_client) =
        StoreActor::new(config.buffer_size, config.keys.favorites.clone());
    let client = FavoritesClient::new(generic_client);

    (actor, client)
}
