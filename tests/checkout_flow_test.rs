use rust_decimal::Decimal;
use std::sync::Arc;
use storefront_core::checkout::{CheckoutError, CheckoutState, ValidationError};
use storefront_core::framework::StoreHandle;
use storefront_core::gateway::{GatewayError, InMemoryGateway};
use storefront_core::history::HistoryError;
use storefront_core::lifecycle::StorefrontSystem;
use storefront_core::model::{CheckoutField, CheckoutForm, PaymentMethod, Product, UserIdentity};
use storefront_core::storage::MemoryStore;

/// A signed-in system with A (20 × 1) and B (5 × 3) in the cart.
async fn system_with_cart() -> StorefrontSystem {
    let system = StorefrontSystem::new(Arc::new(MemoryStore::new()));
    system
        .session
        .sign_in("tok-1", &UserIdentity::new("u1", "Amira"))
        .await
        .expect("Failed to sign in");
    system
        .cart_client
        .add(Product::new("A", "Mug", Decimal::from(20)))
        .await
        .expect("Failed to add A");
    system
        .cart_client
        .add_item(Product::new("B", "Pen", Decimal::from(5)), 3)
        .await
        .expect("Failed to add B");
    system
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
async fn test_successful_checkout_empties_cart() {
    let system = system_with_cart().await;
    let gateway = Arc::new(InMemoryGateway::new());
    let mut checkout = system.checkout(gateway.clone());

    checkout.open();
    fill(checkout.form_mut().unwrap());
    let completion = checkout.submit().await.expect("Checkout failed");

    assert_eq!(completion.receipt.order_id, "order_1");
    assert!(completion.cart_warning.is_none());
    assert!(matches!(checkout.state(), CheckoutState::Completed { receipt } if receipt.order_id == "order_1"));

    let submissions = gateway.submissions();
    assert_eq!(submissions.len(), 1);
    let sent = &submissions[0];
    assert_eq!(sent.user_id, "u1");
    assert_eq!(sent.total_price, Decimal::from(35));
    assert_eq!(sent.order_items.len(), 2);
    assert_eq!(sent.shipping_address.city, "Tunis");
    assert_eq!(sent.payment_method, PaymentMethod::CreditCard);

    assert!(system.cart_client.snapshot().await.unwrap().is_empty());

    drop(checkout);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_city_never_reaches_gateway() {
    let system = system_with_cart().await;
    let gateway = Arc::new(InMemoryGateway::new());
    let mut checkout = system.checkout(gateway.clone());

    checkout.open();
    let form = checkout.form_mut().unwrap();
    fill(form);
    form.set_field(CheckoutField::City, "");
    let err = checkout.submit().await.unwrap_err();

    assert_eq!(
        err,
        CheckoutError::Validation(ValidationError::MissingField(CheckoutField::City))
    );
    assert_eq!(err.user_message(), "Please enter your city.");
    assert_eq!(gateway.submission_count(), 0);
    assert_eq!(system.cart_client.total().await.unwrap(), Decimal::from(35));
    assert!(matches!(
        checkout.state(),
        CheckoutState::FormEditing { last_error: Some(_), .. }
    ));

    drop(checkout);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_payment_method_is_rejected() {
    let system = system_with_cart().await;
    let gateway = Arc::new(InMemoryGateway::new());
    let mut checkout = system.checkout(gateway.clone());

    checkout.open();
    let form = checkout.form_mut().unwrap();
    fill(form);
    form.payment_method = None;

    assert_eq!(
        checkout.submit().await.unwrap_err(),
        CheckoutError::Validation(ValidationError::MissingPaymentMethod)
    );
    assert_eq!(gateway.submission_count(), 0);

    drop(checkout);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_gateway_failure_keeps_cart_and_form() {
    let system = system_with_cart().await;
    let gateway = Arc::new(InMemoryGateway::new());
    gateway.fail_next(GatewayError::Status(500));
    let mut checkout = system.checkout(gateway.clone());

    checkout.open();
    fill(checkout.form_mut().unwrap());
    let err = checkout.submit().await.unwrap_err();

    assert_eq!(err, CheckoutError::Submission(GatewayError::Status(500)));
    assert_eq!(err.user_message(), "Checkout failed, please retry.");
    assert_eq!(gateway.submission_count(), 1);
    assert_eq!(system.cart_client.total().await.unwrap(), Decimal::from(35));

    match checkout.state() {
        CheckoutState::FormEditing { form, last_error } => {
            assert_eq!(form.city, "Tunis");
            assert_eq!(last_error.as_ref(), Some(&err));
        }
        other => panic!("Expected FormEditing, got {:?}", other),
    }

    // A retry from the preserved form goes through.
    let completion = checkout.submit().await.expect("Retry failed");
    assert_eq!(completion.receipt.order_id, "order_1");
    assert!(system.cart_client.snapshot().await.unwrap().is_empty());

    drop(checkout);
    system.shutdown().await.unwrap();
}

/// The payload is built from the cart at submit time, not when the form was opened.
#[tokio::test]
async fn test_payload_uses_cart_at_submit_time() {
    let system = system_with_cart().await;
    let gateway = Arc::new(InMemoryGateway::new());
    let mut checkout = system.checkout(gateway.clone());

    checkout.open();
    fill(checkout.form_mut().unwrap());
    system
        .cart_client
        .add(Product::new("C", "Notebook", Decimal::new(750, 2)))
        .await
        .unwrap();
    checkout.submit().await.unwrap();

    assert_eq!(gateway.submissions()[0].total_price, Decimal::new(4250, 2));

    drop(checkout);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_history_lists_placed_orders() {
    let system = system_with_cart().await;
    let gateway = Arc::new(InMemoryGateway::new());
    let mut checkout = system.checkout(gateway.clone());

    checkout.open();
    fill(checkout.form_mut().unwrap());
    checkout.submit().await.unwrap();
    drop(checkout);

    let orders = system.order_history(gateway.clone()).load().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, "order_1");
    assert_eq!(orders[0].total_price, Decimal::from(35));

    system.session.sign_out().await.unwrap();
    assert_eq!(
        system.order_history(gateway).load().await,
        Err(HistoryError::Unauthenticated)
    );

    system.shutdown().await.unwrap();
}
