//! The signed-in customer's past orders.

use crate::gateway::{GatewayError, OrderGateway};
use crate::model::OrderRecord;
use crate::session::SessionProvider;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// There is no token to list orders with.
    #[error("Not signed in")]
    Unauthenticated,

    #[error("Could not load orders: {0}")]
    Gateway(#[from] GatewayError),
}

impl HistoryError {
    pub fn user_message(&self) -> &'static str {
        match self {
            HistoryError::Unauthenticated => "Please sign in to see your orders.",
            HistoryError::Gateway(_) => "Could not load your orders, please retry.",
        }
    }
}

/// Lists orders through the gateway using the session's bearer token.
#[derive(Clone)]
pub struct OrderHistory {
    session: Arc<dyn SessionProvider>,
    gateway: Arc<dyn OrderGateway>,
}

impl OrderHistory {
    pub fn new(session: Arc<dyn SessionProvider>, gateway: Arc<dyn OrderGateway>) -> Self {
        Self { session, gateway }
    }

    /// Past orders, newest first.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Vec<OrderRecord>, HistoryError> {
        let token = self.session.token().await.ok_or(HistoryError::Unauthenticated)?;
        let mut orders = self.gateway.my_orders(&token).await.map_err(|e| {
            warn!(error = %e, "Order history request failed");
            HistoryError::from(e)
        })?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!(count = orders.len(), "Order history loaded");
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::InMemoryGateway;
    use crate::model::{PaymentMethod, ShippingAddress, UserIdentity};
    use crate::session::StoredSession;
    use crate::storage::MemoryStore;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn record(id: &str, day: u32) -> OrderRecord {
        OrderRecord {
            id: id.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
            payment_method: PaymentMethod::CashOnDelivery,
            shipping_address: ShippingAddress {
                address: "1 Main St".into(),
                city: "Tunis".into(),
                postal_code: "1000".into(),
                country: "TN".into(),
            },
            order_items: Vec::new(),
            total_price: Decimal::from(10),
        }
    }

    #[tokio::test]
    async fn test_requires_token() {
        let session = Arc::new(StoredSession::new(Arc::new(MemoryStore::new())));
        let history = OrderHistory::new(session, Arc::new(InMemoryGateway::new()));
        assert_eq!(history.load().await, Err(HistoryError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_newest_first() {
        let session = StoredSession::new(Arc::new(MemoryStore::new()));
        session
            .sign_in("tok", &UserIdentity::new("u1", "Amira"))
            .await
            .unwrap();
        let gateway = InMemoryGateway::with_orders(vec![
            record("old", 1),
            record("newest", 20),
            record("middle", 9),
        ]);
        let history = OrderHistory::new(Arc::new(session), Arc::new(gateway));

        let ids: Vec<String> = history.load().await.unwrap().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["newest", "middle", "old"]);
    }
}
