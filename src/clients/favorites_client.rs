//! # Favorites Client
//!
//! Provides the bookmark API the UI calls, wrapping a `StoreClient<Favorites>`.
use crate::favorites_actor::{FavoritesAction, FavoritesError};
use crate::framework::{FrameworkError, StoreClient, StoreHandle};
use crate::model::{Favorites, Product, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Favorites actor.
#[derive(Clone)]
pub struct FavoritesClient {
    inner: StoreClient<Favorites>,
}

impl FavoritesClient {
    pub fn new(inner: StoreClient<Favorites>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreHandle<Favorites> for FavoritesClient {
    type Error = FavoritesError;

    fn inner(&self) -> &StoreClient<Favorites> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        FavoritesError::from(e)
    }
}

impl FavoritesClient {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add(&self, product: Product) -> Result<Favorites, FavoritesError> {
        debug!("Sending request");
        self.inner
            .perform_action(FavoritesAction::Add(product))
            .await
            .map_err(FavoritesError::from)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, product_id: ProductId) -> Result<Favorites, FavoritesError> {
        debug!("Sending request");
        self.inner
            .perform_action(FavoritesAction::Remove(product_id))
            .await
            .map_err(FavoritesError::from)
    }

    /// Flips the bookmark and returns whether the product is now a favorite.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn toggle(&self, product: Product) -> Result<bool, FavoritesError> {
        debug!("Sending request");
        let product_id = product.id.clone();
        let favorites = self
            .inner
            .perform_action(FavoritesAction::Toggle(product))
            .await
            .map_err(FavoritesError::from)?;
        Ok(favorites.contains(&product_id))
    }

    pub async fn contains(&self, product_id: &ProductId) -> Result<bool, FavoritesError> {
        Ok(self.snapshot().await?.contains(product_id))
    }
}
