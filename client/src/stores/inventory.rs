//! Inventory store: stock list, selection, trend and history caches

use shared::{
    MaterialStock, MaterialStockCreate, MaterialStockUpdate, StockAdjustment, StockHistoryEntry,
    StockTrendPoint,
};

use crate::api::{ApiClient, StockListQuery};
use crate::error::ApiResult;

/// Default threshold for the low-stock view
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

// Localized messages surfaced to the UI
const MSG_LIST_FAILED: &str = "Stok listesi alınamadı";
const MSG_LOW_STOCK_FAILED: &str = "Düşük stok listesi alınamadı";
const MSG_DETAIL_FAILED: &str = "Stok detayı alınamadı";
const MSG_TREND_FAILED: &str = "Trend verisi alınamadı";
const MSG_HISTORY_FAILED: &str = "Geçmiş verisi alınamadı";
const MSG_CREATE_FAILED: &str = "Stok oluşturulamadı";
const MSG_UPDATE_FAILED: &str = "Stok güncellenemedi";
const MSG_DELETE_FAILED: &str = "Stok silinemedi";
const MSG_ADJUST_FAILED: &str = "Stok miktarı güncellenemedi";

/// Client-visible slice of inventory server state
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    /// Current page of stock records
    pub items: Vec<MaterialStock>,
    /// Total record count across all pages
    pub total: i64,
    pub loading: bool,
    pub error: Option<String>,
    /// The record a detail view is focused on
    pub selected: Option<MaterialStock>,
    pub low_stock_items: Vec<MaterialStock>,
    /// Trend series for the focused material
    pub trend: Vec<StockTrendPoint>,
    /// Audit log for the focused material
    pub history: Vec<StockHistoryEntry>,
}

/// Store mediating between inventory views and the REST API
pub struct InventoryStore {
    api: ApiClient,
    state: InventoryState,
}

impl InventoryStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: InventoryState::default(),
        }
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    /// Replace the current page of items and total count
    pub async fn fetch_stocks(&mut self, query: &StockListQuery) {
        self.state.loading = true;
        self.state.error = None;
        match self.api.list_stocks(query).await {
            Ok(page) => {
                self.state.items = page.items;
                self.state.total = page.total;
            }
            Err(err) => {
                tracing::warn!(error = %err, "stock list fetch failed");
                self.state.error = Some(MSG_LIST_FAILED.into());
            }
        }
        self.state.loading = false;
    }

    /// Replace `low_stock_items` with materials at or below `threshold`
    pub async fn fetch_low_stocks(&mut self, threshold: i64) {
        self.state.loading = true;
        self.state.error = None;
        match self.api.low_stock(threshold).await {
            Ok(items) => self.state.low_stock_items = items,
            Err(err) => {
                tracing::warn!(error = %err, threshold, "low-stock fetch failed");
                self.state.error = Some(MSG_LOW_STOCK_FAILED.into());
            }
        }
        self.state.loading = false;
    }

    /// Fetch one record into `selected`
    ///
    /// A missing record surfaces as an error string, not a propagated
    /// fault.
    pub async fn fetch_stock(&mut self, material_id: &str) {
        self.state.loading = true;
        self.state.error = None;
        match self.api.get_stock(material_id).await {
            Ok(stock) => self.state.selected = Some(stock),
            Err(err) => {
                tracing::warn!(error = %err, material_id, "stock detail fetch failed");
                self.state.error = Some(MSG_DETAIL_FAILED.into());
            }
        }
        self.state.loading = false;
    }

    /// Populate the trend series for one material
    ///
    /// No-op when `material_id` is empty.
    pub async fn fetch_trend(&mut self, material_id: &str) {
        if material_id.is_empty() {
            return;
        }
        self.state.loading = true;
        self.state.error = None;
        match self.api.stock_trend(material_id).await {
            Ok(points) => self.state.trend = points,
            Err(err) => {
                tracing::warn!(error = %err, material_id, "trend fetch failed");
                self.state.error = Some(MSG_TREND_FAILED.into());
            }
        }
        self.state.loading = false;
    }

    /// Populate the audit log for one material
    ///
    /// No-op when `material_id` is empty.
    pub async fn fetch_history(&mut self, material_id: &str) {
        if material_id.is_empty() {
            return;
        }
        self.state.loading = true;
        self.state.error = None;
        match self.api.stock_history(material_id).await {
            Ok(entries) => self.state.history = entries,
            Err(err) => {
                tracing::warn!(error = %err, material_id, "history fetch failed");
                self.state.error = Some(MSG_HISTORY_FAILED.into());
            }
        }
        self.state.loading = false;
    }

    /// Create a stock record, then refetch the list so it is visible
    ///
    /// The error is recorded and also returned so the create dialog
    /// can stay open. The payload is not validated here; that is the
    /// dialog's job, and the server enforces `reserved <= quantity`.
    pub async fn create_stock(&mut self, payload: MaterialStockCreate) -> ApiResult<()> {
        self.state.loading = true;
        self.state.error = None;
        let outcome = match self.api.create_stock(&payload).await {
            Ok(_) => {
                self.fetch_stocks(&StockListQuery::default()).await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, material_id = %payload.material_id, "stock create failed");
                self.state.error = Some(MSG_CREATE_FAILED.into());
                Err(err)
            }
        };
        self.state.loading = false;
        outcome
    }

    /// Partial-field update; same refetch-and-return contract as create
    pub async fn update_stock(
        &mut self,
        material_id: &str,
        payload: MaterialStockUpdate,
    ) -> ApiResult<()> {
        self.state.loading = true;
        self.state.error = None;
        let outcome = match self.api.update_stock(material_id, &payload).await {
            Ok(_) => {
                self.fetch_stocks(&StockListQuery::default()).await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, material_id, "stock update failed");
                self.state.error = Some(MSG_UPDATE_FAILED.into());
                Err(err)
            }
        };
        self.state.loading = false;
        outcome
    }

    /// Delete by id; same refetch-and-return contract as create
    pub async fn delete_stock(&mut self, material_id: &str) -> ApiResult<()> {
        self.state.loading = true;
        self.state.error = None;
        let outcome = match self.api.delete_stock(material_id).await {
            Ok(()) => {
                self.fetch_stocks(&StockListQuery::default()).await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, material_id, "stock delete failed");
                self.state.error = Some(MSG_DELETE_FAILED.into());
                Err(err)
            }
        };
        self.state.loading = false;
        outcome
    }

    /// Apply a signed delta to the total or reserved quantity
    ///
    /// After success the list is refetched, and the audit log too if
    /// the adjusted material is the selected one. Refetch failures are
    /// recorded in `error` but the adjustment itself still resolves
    /// `Ok`: the mutation is committed server-side.
    pub async fn adjust_stock(
        &mut self,
        material_id: &str,
        quantity_change: i64,
        is_reserved: bool,
        notes: impl Into<String>,
    ) -> ApiResult<()> {
        self.state.loading = true;
        self.state.error = None;
        let adjustment = StockAdjustment {
            quantity_change,
            is_reserved,
            notes: notes.into(),
        };
        let outcome = match self.api.adjust_stock(material_id, &adjustment).await {
            Ok(_) => {
                self.fetch_stocks(&StockListQuery::default()).await;
                let selected_matches = self
                    .state
                    .selected
                    .as_ref()
                    .is_some_and(|s| s.material_id == material_id);
                if selected_matches {
                    self.fetch_history(material_id).await;
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, material_id, quantity_change, "stock adjust failed");
                self.state.error = Some(MSG_ADJUST_FAILED.into());
                Err(err)
            }
        };
        self.state.loading = false;
        outcome
    }

    /// Pure local state set; no request
    pub fn set_selected(&mut self, stock: Option<MaterialStock>) {
        self.state.selected = stock;
    }
}
