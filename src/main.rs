//! # Storefront Demo
//!
//! Runs a scripted shopping session against a [`FileStore`]:
//! 1. Signs in and restores whatever cart the previous run left behind.
//! 2. Adds products to the cart and toggles a favorite.
//! 3. Checks out against an order endpoint that fails once, then succeeds.
//! 4. Lists the order history.
//!
//! ```bash
//! RUST_LOG=info cargo run -- ./data
//! ```

use rust_decimal::Decimal;
use std::sync::Arc;
use storefront_core::checkout::CheckoutError;
use storefront_core::gateway::{GatewayError, InMemoryGateway};
use storefront_core::lifecycle::{setup_tracing, StorefrontSystem};
use storefront_core::model::{format_amount, CheckoutField, PaymentMethod, Product, UserIdentity};
use storefront_core::storage::FileStore;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let dir = std::env::args().nth(1).unwrap_or_else(|| "storefront-data".to_string());
    let storage = FileStore::open(&dir).await.map_err(|e| e.to_string())?;
    info!(dir = %storage.dir().display(), "Starting storefront demo");

    let system = StorefrontSystem::new(Arc::new(storage));
    system
        .session
        .sign_in("demo-token", &UserIdentity::new("user_1", "Amira").with_email("amira@example.com"))
        .await
        .map_err(|e| e.to_string())?;

    let mug = Product::new("prod_mug", "Ceramic Mug", Decimal::new(2000, 2)).with_category("Kitchen");
    let pen = Product::new("prod_pen", "Fountain Pen", Decimal::new(500, 2)).with_category("Office");

    let span = tracing::info_span!("shopping");
    let cart = async {
        system.cart_client.add(mug.clone()).await?;
        system.cart_client.add_item(pen.clone(), 3).await?;
        system.cart_client.add(mug.clone()).await?;
        system.cart_client.decrement(mug.id.clone()).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.user_message().to_string())?;
    info!(lines = cart.len(), total = %format_amount(cart.total()), "Cart ready");

    match system.favorites_client.toggle(pen.clone()).await {
        Ok(now_favorite) => info!(now_favorite, "Toggled favorite"),
        Err(e) => warn!(error = %e, "Could not update favorites"),
    }

    let gateway = Arc::new(InMemoryGateway::new());
    gateway.fail_next(GatewayError::Status(503));

    let mut checkout = system.checkout(gateway.clone());
    checkout.open();
    if let Some(form) = checkout.form_mut() {
        form.set_field(CheckoutField::MobileNumber, "+216 55 123 456");
        form.set_field(CheckoutField::Address, "12 Rue de Marseille");
        form.set_field(CheckoutField::City, "Tunis");
        form.set_field(CheckoutField::PostalCode, "1000");
        form.set_field(CheckoutField::Country, "Tunisia");
        form.payment_method = Some(PaymentMethod::CashOnDelivery);
    }

    let span = tracing::info_span!("checkout");
    let completion = async {
        let mut attempt = 1;
        loop {
            match checkout.submit().await {
                Ok(completion) => break Ok(completion),
                Err(CheckoutError::Submission(e)) if attempt < 3 => {
                    warn!(attempt, error = %e, "Checkout failed, retrying");
                    attempt += 1;
                }
                Err(e) => break Err(e),
            }
        }
    }
    .instrument(span)
    .await;

    match completion {
        Ok(completion) => {
            info!(order_id = %completion.receipt.order_id, "Order placed");
            if let Some(e) = completion.cart_warning {
                warn!(error = %e, "Cart was not emptied");
            }
        }
        Err(e) => error!(error = %e, "{}", e.user_message()),
    }
    drop(checkout);

    match system.order_history(gateway).load().await {
        Ok(orders) => {
            for order in orders {
                info!(
                    order_id = %order.id,
                    total = %format_amount(order.total_price),
                    payment_method = %order.payment_method,
                    "Past order"
                );
            }
        }
        Err(e) => warn!(error = %e, "{}", e.user_message()),
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
