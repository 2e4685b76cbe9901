//! Typed HTTP client for the inventory/order REST API
//!
//! One async method per endpoint; request/response bodies are JSON.
//! Non-2xx responses surface as [`ApiError::Status`], transport and
//! decode failures as their own variants.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    MaterialStock, MaterialStockCreate, MaterialStockUpdate, Order, OrderCreate, OrderDetails,
    OrderStatus, OrderStatusUpdate, Paginated, StockAdjustment, StockHistoryEntry, StockTrendPoint,
};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// REST API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Query parameters of `GET /inventory`
#[derive(Debug, Clone)]
pub struct StockListQuery {
    pub skip: i64,
    pub limit: i64,
    pub search: Option<String>,
}

impl Default for StockListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 10,
            search: None,
        }
    }
}

/// Query parameters of `GET /orders`
#[derive(Debug, Clone)]
pub struct OrderListQuery {
    pub search: String,
    pub page: i64,
    pub limit: i64,
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            limit: 10,
        }
    }
}

impl ApiClient {
    /// Create a new ApiClient from configuration
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_base_url(config.base_url.clone())
    }

    /// Create a new ApiClient with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    // ------------------------------------------------------------------
    // Inventory endpoints
    // ------------------------------------------------------------------

    /// `GET /inventory` - one page of stock records
    pub async fn list_stocks(&self, query: &StockListQuery) -> ApiResult<Paginated<MaterialStock>> {
        let mut request = self
            .client
            .get(format!("{}/inventory", self.base_url))
            .query(&[("skip", query.skip), ("limit", query.limit)]);
        if let Some(search) = &query.search {
            request = request.query(&[("search", search.as_str())]);
        }
        let response = request.send().await.map_err(ApiError::Request)?;
        Self::parse(response).await
    }

    /// `GET /inventory/low-stock/list` - materials at or below `threshold`
    pub async fn low_stock(&self, threshold: i64) -> ApiResult<Vec<MaterialStock>> {
        let response = self
            .client
            .get(format!("{}/inventory/low-stock/list", self.base_url))
            .query(&[("threshold", threshold)])
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::parse(response).await
    }

    /// `GET /inventory/{id}` - one stock record
    pub async fn get_stock(&self, material_id: &str) -> ApiResult<MaterialStock> {
        let response = self
            .client
            .get(format!("{}/inventory/{}", self.base_url, material_id))
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::parse(response).await
    }

    /// `GET /inventory/{id}/trend` - daily stock snapshots for charting
    pub async fn stock_trend(&self, material_id: &str) -> ApiResult<Vec<StockTrendPoint>> {
        let response = self
            .client
            .get(format!("{}/inventory/{}/trend", self.base_url, material_id))
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::parse(response).await
    }

    /// `GET /inventory/{id}/history` - audit log of adjustments
    pub async fn stock_history(&self, material_id: &str) -> ApiResult<Vec<StockHistoryEntry>> {
        let response = self
            .client
            .get(format!(
                "{}/inventory/{}/history",
                self.base_url, material_id
            ))
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::parse(response).await
    }

    /// `POST /inventory` - create a stock record
    pub async fn create_stock(&self, payload: &MaterialStockCreate) -> ApiResult<MaterialStock> {
        let response = self
            .client
            .post(format!("{}/inventory", self.base_url))
            .json(payload)
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::parse(response).await
    }

    /// `PUT /inventory/{id}` - partial-field update
    pub async fn update_stock(
        &self,
        material_id: &str,
        payload: &MaterialStockUpdate,
    ) -> ApiResult<MaterialStock> {
        let response = self
            .client
            .put(format!("{}/inventory/{}", self.base_url, material_id))
            .json(payload)
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::parse(response).await
    }

    /// `DELETE /inventory/{id}` - delete a stock record
    pub async fn delete_stock(&self, material_id: &str) -> ApiResult<()> {
        let response = self
            .client
            .delete(format!("{}/inventory/{}", self.base_url, material_id))
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// `POST /inventory/{id}/adjust` - apply a signed quantity delta
    ///
    /// The server appends one history entry as a side effect.
    pub async fn adjust_stock(
        &self,
        material_id: &str,
        adjustment: &StockAdjustment,
    ) -> ApiResult<MaterialStock> {
        let response = self
            .client
            .post(format!("{}/inventory/{}/adjust", self.base_url, material_id))
            .json(adjustment)
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::parse(response).await
    }

    // ------------------------------------------------------------------
    // Order endpoints
    // ------------------------------------------------------------------

    /// `GET /orders` - one page of orders
    pub async fn list_orders(&self, query: &OrderListQuery) -> ApiResult<Paginated<Order>> {
        let response = self
            .client
            .get(format!("{}/orders", self.base_url))
            .query(&[("search", query.search.as_str())])
            .query(&[("page", query.page), ("limit", query.limit)])
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::parse(response).await
    }

    /// `GET /orders/{id}` - one order with its line items
    pub async fn order_details(&self, order_id: &str) -> ApiResult<OrderDetails> {
        let response = self
            .client
            .get(format!("{}/orders/{}", self.base_url, order_id))
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::parse(response).await
    }

    /// `POST /orders` - create an order
    pub async fn create_order(&self, payload: &OrderCreate) -> ApiResult<Order> {
        let response = self
            .client
            .post(format!("{}/orders", self.base_url))
            .json(payload)
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::parse(response).await
    }

    /// `PUT /orders/{id}/status` - move an order through the workflow
    ///
    /// The client sends any of the enumerated values; the server is
    /// authoritative for transition rules.
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> ApiResult<Order> {
        let response = self
            .client
            .put(format!("{}/orders/{}/status", self.base_url, order_id))
            .json(&OrderStatusUpdate { status })
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::parse(response).await
    }

    // ------------------------------------------------------------------
    // Response handling
    // ------------------------------------------------------------------

    async fn check_status(response: Response) -> ApiResult<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status { status, body })
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(ApiError::Decode)
    }
}
