use crate::cart_actor::CartError;
use crate::checkout::{validate_form, validate_order, CheckoutError};
use crate::clients::CartClient;
use crate::framework::StoreHandle;
use crate::gateway::OrderGateway;
use crate::model::{CheckoutForm, OrderReceipt, OrderSubmission};
use crate::session::SessionProvider;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Where a checkout attempt stands.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    Idle,
    /// The customer is filling in the form. `last_error` holds the outcome of the last
    /// failed submit, if any.
    FormEditing {
        form: CheckoutForm,
        last_error: Option<CheckoutError>,
    },
    /// An order request is in flight.
    Submitting { form: CheckoutForm },
    Completed { receipt: OrderReceipt },
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutCompletion {
    pub receipt: OrderReceipt,
    /// Set when the order went through but emptying the cart afterwards failed.
    pub cart_warning: Option<CartError>,
}

/// Drives one checkout flow against the cart, the session and the order endpoint.
pub struct CheckoutOrchestrator {
    cart: CartClient,
    session: Arc<dyn SessionProvider>,
    gateway: Arc<dyn OrderGateway>,
    state: CheckoutState,
}

impl CheckoutOrchestrator {
    pub fn new(
        cart: CartClient,
        session: Arc<dyn SessionProvider>,
        gateway: Arc<dyn OrderGateway>,
    ) -> Self {
        Self {
            cart,
            session,
            gateway,
            state: CheckoutState::Idle,
        }
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Shows the form.
    ///
    /// A form left over from a failed or interrupted attempt is kept; after a completed
    /// order, or from idle, the form starts blank.
    pub fn open(&mut self) {
        let form = match std::mem::replace(&mut self.state, CheckoutState::Idle) {
            CheckoutState::FormEditing { form, .. } | CheckoutState::Submitting { form } => form,
            CheckoutState::Idle | CheckoutState::Completed { .. } => CheckoutForm::default(),
        };
        debug!("Checkout opened");
        self.state = CheckoutState::FormEditing {
            form,
            last_error: None,
        };
    }

    /// The editable form, while in [`CheckoutState::FormEditing`].
    pub fn form_mut(&mut self) -> Option<&mut CheckoutForm> {
        match &mut self.state {
            CheckoutState::FormEditing { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&CheckoutError> {
        match &self.state {
            CheckoutState::FormEditing { last_error, .. } => last_error.as_ref(),
            _ => None,
        }
    }

    /// Leaves checkout and discards the form.
    pub fn cancel(&mut self) {
        self.state = CheckoutState::Idle;
    }

    /// Validates the form and places the order.
    ///
    /// On success the cart is emptied and the state becomes [`CheckoutState::Completed`].
    /// On any failure the state returns to [`CheckoutState::FormEditing`] with the form
    /// intact and the error recorded; the cart is left untouched.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<CheckoutCompletion, CheckoutError> {
        let form = match &self.state {
            CheckoutState::FormEditing { form, .. } => form.clone(),
            _ => {
                warn!("Submit outside of form editing");
                return Err(CheckoutError::InvalidState);
            }
        };

        let (submission, token) = match self.prepare(&form).await {
            Ok(prepared) => prepared,
            Err(e) => {
                debug!(error = %e, "Order not submitted");
                return Err(self.back_to_form(form, e));
            }
        };

        self.state = CheckoutState::Submitting { form: form.clone() };
        info!(
            items = submission.order_items.len(),
            total = %submission.total_price,
            payment_method = %submission.payment_method,
            "Submitting order"
        );

        let receipt = match self.gateway.create_order(token.as_deref(), &submission).await {
            Ok(receipt) => receipt,
            Err(e) => {
                warn!(error = %e, "Order submission failed, cart kept");
                return Err(self.back_to_form(form, e.into()));
            }
        };
        info!(order_id = %receipt.order_id, "Order placed");

        let cart_warning = match self.cart.clear().await {
            Ok(_) => None,
            Err(e) => {
                warn!(order_id = %receipt.order_id, error = %e, "Order placed but cart was not cleared");
                Some(e)
            }
        };

        self.state = CheckoutState::Completed {
            receipt: receipt.clone(),
        };
        Ok(CheckoutCompletion {
            receipt,
            cart_warning,
        })
    }

    /// Validates everything and builds the payload from the cart as it is now.
    async fn prepare(
        &self,
        form: &CheckoutForm,
    ) -> Result<(OrderSubmission, Option<String>), CheckoutError> {
        let payment_method = validate_form(form)?;
        let cart = self.cart.snapshot().await?;
        let user = self.session.current_user().await;
        let user = validate_order(&cart, user.as_ref())?;

        let submission = OrderSubmission::from_cart(
            user.id.clone(),
            &cart,
            form.mobile_number.trim(),
            form.shipping_address(),
            payment_method,
        );
        Ok((submission, self.session.token().await))
    }

    fn back_to_form(&mut self, form: CheckoutForm, error: CheckoutError) -> CheckoutError {
        self.state = CheckoutState::FormEditing {
            form,
            last_error: Some(error.clone()),
        };
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::ValidationError;
    use crate::config::StorefrontConfig;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::gateway::{GatewayError, InMemoryGateway};
    use crate::model::{Cart, CheckoutField, PaymentMethod, Product, UserIdentity};
    use crate::session::StoredSession;
    use crate::storage::{MemoryStore, StorageError};
    use rust_decimal::Decimal;

    async fn signed_in_session(storage: Arc<MemoryStore>) -> Arc<StoredSession> {
        let session = StoredSession::new(storage);
        session
            .sign_in("tok-1", &UserIdentity::new("u1", "Amira"))
            .await
            .unwrap();
        Arc::new(session)
    }

    fn start_cart(storage: Arc<MemoryStore>) -> CartClient {
        let (actor, client) = crate::cart_actor::new(&StorefrontConfig::default());
        tokio::spawn(actor.run(storage));
        client
    }

    fn fill(form: &mut CheckoutForm) {
        form.set_field(CheckoutField::MobileNumber, "55 123 456");
        form.set_field(CheckoutField::Address, "1 Main St");
        form.set_field(CheckoutField::City, "Tunis");
        form.set_field(CheckoutField::PostalCode, "1000");
        form.set_field(CheckoutField::Country, "TN");
        form.payment_method = Some(PaymentMethod::CreditCard);
    }

    #[tokio::test]
    async fn test_submit_requires_open_form() {
        let storage = Arc::new(MemoryStore::new());
        let session = signed_in_session(storage.clone()).await;
        let gateway = Arc::new(InMemoryGateway::new());
        let mut checkout = CheckoutOrchestrator::new(start_cart(storage), session, gateway.clone());

        assert_eq!(checkout.submit().await, Err(CheckoutError::InvalidState));
        assert_eq!(checkout.state(), &CheckoutState::Idle);
        assert!(checkout.form_mut().is_none());
        assert_eq!(gateway.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected() {
        let storage = Arc::new(MemoryStore::new());
        let session = signed_in_session(storage.clone()).await;
        let gateway = Arc::new(InMemoryGateway::new());
        let mut checkout = CheckoutOrchestrator::new(start_cart(storage), session, gateway.clone());

        checkout.open();
        fill(checkout.form_mut().unwrap());
        let err = checkout.submit().await.unwrap_err();

        assert_eq!(err, CheckoutError::Validation(ValidationError::EmptyCart));
        assert_eq!(checkout.last_error(), Some(&err));
        assert_eq!(gateway.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_signed_out_user_is_rejected() {
        let storage = Arc::new(MemoryStore::new());
        let cart = start_cart(storage.clone());
        cart.add(Product::new("A", "Mug", Decimal::from(20))).await.unwrap();
        let gateway = Arc::new(InMemoryGateway::new());
        let mut checkout =
            CheckoutOrchestrator::new(cart, Arc::new(StoredSession::new(storage)), gateway.clone());

        checkout.open();
        fill(checkout.form_mut().unwrap());
        let err = checkout.submit().await.unwrap_err();

        assert_eq!(err, CheckoutError::Validation(ValidationError::NotSignedIn));
        assert_eq!(err.user_message(), "Please sign in to place your order.");
        assert_eq!(gateway.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_reopen_after_failure_keeps_form() {
        let storage = Arc::new(MemoryStore::new());
        let session = signed_in_session(storage.clone()).await;
        let cart = start_cart(storage);
        cart.add(Product::new("A", "Mug", Decimal::from(20))).await.unwrap();
        let gateway = Arc::new(InMemoryGateway::new());
        gateway.fail_next(GatewayError::Transport("timed out".into()));
        let mut checkout = CheckoutOrchestrator::new(cart, session, gateway.clone());

        checkout.open();
        fill(checkout.form_mut().unwrap());
        let err = checkout.submit().await.unwrap_err();
        assert_eq!(err.user_message(), "Checkout failed, please retry.");

        checkout.open();
        assert!(checkout.last_error().is_none());
        assert_eq!(checkout.form_mut().unwrap().city, "Tunis");

        let completion = checkout.submit().await.unwrap();
        assert_eq!(completion.receipt.order_id, "order_1");
        assert_eq!(gateway.submission_count(), 2);

        checkout.open();
        assert_eq!(*checkout.form_mut().unwrap(), CheckoutForm::default());
    }

    #[tokio::test]
    async fn test_failed_cart_clear_still_completes() {
        let mut cart = Cart::default();
        cart.add_item(&Product::new("A", "Mug", Decimal::from(20)), 1);

        let mut mock = MockClient::<Cart>::new();
        mock.expect_snapshot().return_ok(cart);
        mock.expect_action()
            .return_err(FrameworkError::Persistence(StorageError::Backend("disk full".into())));

        let storage = Arc::new(MemoryStore::new());
        let session = signed_in_session(storage).await;
        let gateway = Arc::new(InMemoryGateway::new());
        let mut checkout =
            CheckoutOrchestrator::new(CartClient::new(mock.client()), session, gateway.clone());

        checkout.open();
        fill(checkout.form_mut().unwrap());
        let completion = checkout.submit().await.unwrap();

        assert!(matches!(completion.cart_warning, Some(CartError::Persistence(_))));
        assert!(matches!(checkout.state(), CheckoutState::Completed { .. }));
        assert_eq!(gateway.submission_count(), 1);
        mock.verify();
    }
}
