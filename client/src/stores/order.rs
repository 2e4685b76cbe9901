//! Order store: order list, detail cache, status workflow

use shared::{Order, OrderCreate, OrderDetails, OrderStatus};

use crate::api::{ApiClient, OrderListQuery};
use crate::error::ApiResult;

// Localized messages surfaced to the UI
const MSG_LIST_FAILED: &str = "Siparişler yüklenemedi.";
const MSG_DETAILS_FAILED: &str = "Sipariş detayı yüklenemedi.";
const MSG_CREATE_FAILED: &str = "Sipariş oluşturulamadı.";
const MSG_STATUS_FAILED: &str = "Sipariş durumu güncellenemedi.";

/// Client-visible slice of order server state
#[derive(Debug, Clone, Default)]
pub struct OrderState {
    pub orders: Vec<Order>,
    pub total: i64,
    pub loading: bool,
    pub error: Option<String>,
    pub details: Option<OrderDetails>,
}

/// Store mediating between order views and the REST API
pub struct OrderStore {
    api: ApiClient,
    state: OrderState,
}

impl OrderStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: OrderState::default(),
        }
    }

    pub fn state(&self) -> &OrderState {
        &self.state
    }

    /// Replace the current page of orders and total count
    pub async fn fetch_orders(&mut self, query: &OrderListQuery) {
        self.state.loading = true;
        self.state.error = None;
        match self.api.list_orders(query).await {
            Ok(page) => {
                self.state.orders = page.items;
                self.state.total = page.total;
            }
            Err(err) => {
                tracing::warn!(error = %err, "order list fetch failed");
                self.state.error = Some(MSG_LIST_FAILED.into());
            }
        }
        self.state.loading = false;
    }

    /// Fetch one order with its line items into `details`
    ///
    /// The previous detail record is cleared before the request so a
    /// detail view never shows a stale order while loading.
    pub async fn fetch_details(&mut self, order_id: &str) {
        self.state.loading = true;
        self.state.error = None;
        self.state.details = None;
        match self.api.order_details(order_id).await {
            Ok(details) => self.state.details = Some(details),
            Err(err) => {
                tracing::warn!(error = %err, order_id, "order details fetch failed");
                self.state.error = Some(MSG_DETAILS_FAILED.into());
            }
        }
        self.state.loading = false;
    }

    /// Create an order, then refetch the list so it is visible
    ///
    /// The error is recorded and also returned so the create dialog
    /// can stay open. Any stock reservation the order implies is a
    /// separate API call; the two are not atomic.
    pub async fn create_order(&mut self, payload: OrderCreate) -> ApiResult<()> {
        self.state.loading = true;
        self.state.error = None;
        let outcome = match self.api.create_order(&payload).await {
            Ok(_) => {
                self.fetch_orders(&OrderListQuery::default()).await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, customer = %payload.customer_name, "order create failed");
                self.state.error = Some(MSG_CREATE_FAILED.into());
                Err(err)
            }
        };
        self.state.loading = false;
        outcome
    }

    /// Move an order through the status workflow
    ///
    /// No transition validation happens here; the server is
    /// authoritative and may reject the value.
    pub async fn update_status(&mut self, order_id: &str, status: OrderStatus) -> ApiResult<()> {
        self.state.loading = true;
        self.state.error = None;
        let outcome = match self.api.update_order_status(order_id, status).await {
            Ok(_) => {
                self.fetch_orders(&OrderListQuery::default()).await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, order_id, status = %status, "order status update failed");
                self.state.error = Some(MSG_STATUS_FAILED.into());
                Err(err)
            }
        };
        self.state.loading = false;
        outcome
    }
}
