use super::{GatewayError, OrderGateway};
use crate::model::{OrderReceipt, OrderRecord, OrderSubmission};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct GatewayState {
    next_id: u32,
    submissions: Vec<OrderSubmission>,
    orders: Vec<OrderRecord>,
    scripted_failures: VecDeque<GatewayError>,
}

/// [`OrderGateway`] that keeps orders in memory.
///
/// Every `create_order` call is recorded, including failed ones, so tests can assert on
/// what was (or was not) sent. Failures are scripted with [`InMemoryGateway::fail_next`].
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    state: Mutex<GatewayState>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the order history.
    pub fn with_orders(orders: Vec<OrderRecord>) -> Self {
        let gateway = Self::new();
        gateway.lock().orders = orders;
        gateway
    }

    /// Makes the next `create_order` call fail with `error`. Calls queue up.
    pub fn fail_next(&self, error: GatewayError) {
        self.lock().scripted_failures.push_back(error);
    }

    /// Every submission received so far, in order.
    pub fn submissions(&self) -> Vec<OrderSubmission> {
        self.lock().submissions.clone()
    }

    pub fn submission_count(&self) -> usize {
        self.lock().submissions.len()
    }

    fn lock(&self) -> MutexGuard<'_, GatewayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl OrderGateway for InMemoryGateway {
    async fn create_order(
        &self,
        token: Option<&str>,
        submission: &OrderSubmission,
    ) -> Result<OrderReceipt, GatewayError> {
        let mut state = self.lock();
        state.submissions.push(submission.clone());

        if let Some(error) = state.scripted_failures.pop_front() {
            warn!(error = %error, "Scripted order failure");
            return Err(error);
        }

        state.next_id += 1;
        let order_id = format!("order_{}", state.next_id);
        state.orders.push(OrderRecord {
            id: order_id.clone(),
            created_at: Utc::now(),
            payment_method: submission.payment_method,
            shipping_address: submission.shipping_address.clone(),
            order_items: submission.order_items.clone(),
            total_price: submission.total_price,
        });
        info!(%order_id, authenticated = token.is_some(), "Order created");
        Ok(OrderReceipt { order_id })
    }

    async fn my_orders(&self, token: &str) -> Result<Vec<OrderRecord>, GatewayError> {
        if token.is_empty() {
            return Err(GatewayError::Status(401));
        }
        let orders = self.lock().orders.clone();
        debug!(count = orders.len(), "Listing orders");
        Ok(orders)
    }
}
