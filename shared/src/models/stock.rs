//! Material stock models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A material stock record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialStock {
    pub id: i64,
    /// Unique material identifier (e.g. "MAT001")
    pub material_id: String,
    pub material_description: Option<String>,
    /// Total units on hand
    pub quantity: i64,
    /// Units held against open orders
    pub reserved: i64,
    /// Allocatable remainder, `quantity - reserved`
    pub available: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl MaterialStock {
    /// Whether this material is at or below the low-stock threshold
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.quantity <= threshold
    }
}

/// Payload for creating a new stock record
///
/// The server additionally enforces `reserved <= quantity`; dialogs
/// should pre-check with [`crate::validation::validate_stock_payload`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MaterialStockCreate {
    #[validate(length(min = 1, message = "material_id cannot be empty"))]
    pub material_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_description: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub reserved: i64,
}

/// Partial update payload; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MaterialStockUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub reserved: Option<i64>,
}

/// Wire body of `POST /inventory/{id}/adjust`
///
/// A signed delta applied to either the total quantity or the reserved
/// sub-quantity, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub quantity_change: i64,
    #[serde(default)]
    pub is_reserved: bool,
    #[serde(default)]
    pub notes: String,
}

/// Immutable audit record of one stock adjustment
///
/// Created server-side as a side effect of an adjust operation; never
/// mutated or deleted by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockHistoryEntry {
    pub id: i64,
    pub material_id: String,
    pub quantity_change: i64,
    pub is_reserved: bool,
    pub previous_quantity: i64,
    pub new_quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Date-stamped stock snapshot used for trend charts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockTrendPoint {
    pub date: DateTime<Utc>,
    pub quantity: i64,
    pub reserved: i64,
    pub available: i64,
}
