//! # Cart Client
//!
//! Provides the cart API the UI calls. It wraps a `StoreClient<Cart>` and exposes one
//! method per cart operation, each returning the cart as it is after the call.
use crate::cart_actor::{CartAction, CartError};
use crate::framework::{FrameworkError, StoreClient, StoreHandle};
use crate::model::{Cart, Product, ProductId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<Cart>,
}

impl CartClient {
    pub fn new(inner: StoreClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreHandle<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::from(e)
    }
}

impl CartClient {
    async fn apply(&self, action: CartAction) -> Result<Cart, CartError> {
        self.inner.perform_action(action).await.map_err(CartError::from)
    }

    /// Adds one unit of `product`.
    pub async fn add(&self, product: Product) -> Result<Cart, CartError> {
        self.add_item(product, 1).await
    }

    /// Adds `quantity` units of `product`, merging with an existing line.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_item(&self, product: Product, quantity: u32) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.apply(CartAction::AddItem { product, quantity }).await
    }

    /// Sets a line's quantity. Quantities below one leave the cart unchanged.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, product_id: ProductId, quantity: u32) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.apply(CartAction::UpdateQuantity { product_id, quantity }).await
    }

    #[instrument(skip(self))]
    pub async fn increment(&self, product_id: ProductId) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.apply(CartAction::Increment(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn decrement(&self, product_id: ProductId) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.apply(CartAction::Decrement(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, product_id: ProductId) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.apply(CartAction::RemoveItem(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.apply(CartAction::Clear).await
    }

    /// Exact total of the committed cart.
    pub async fn total(&self) -> Result<Decimal, CartError> {
        Ok(self.snapshot().await?.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};
    use crate::storage::StorageError;

    #[tokio::test]
    async fn test_add_sends_single_unit() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move {
            cart_client
                .add(Product::new("A", "Mug", Decimal::from(20)))
                .await
        });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        match action {
            CartAction::AddItem { product, quantity } => {
                assert_eq!(product.id.as_str(), "A");
                assert_eq!(quantity, 1);
            }
            other => panic!("Expected AddItem, got {:?}", other),
        }
        responder.send(Ok(Cart::default())).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_persistence_failure_maps_to_cart_error() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.clear().await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, CartAction::Clear));
        responder
            .send(Err(FrameworkError::Persistence(StorageError::Backend(
                "disk full".into(),
            ))))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(err, CartError::Persistence(ref msg) if msg.contains("disk full")));
        assert_eq!(err.user_message(), "Could not save your cart.");
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Cart>(1);
        drop(receiver);
        let err = CartClient::new(client).total().await.unwrap_err();
        assert!(matches!(err, CartError::ActorCommunicationError(_)));
    }
}
