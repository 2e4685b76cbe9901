//! Order models

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order workflow status
///
/// Wire values are the Turkish labels shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Yeni")]
    New,
    #[serde(rename = "Hazırlanıyor")]
    Preparing,
    #[serde(rename = "Tamamlandı")]
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "Yeni",
            OrderStatus::Preparing => "Hazırlanıyor",
            OrderStatus::Completed => "Tamamlandı",
        }
    }

    /// The next step in the workflow, if any
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::New => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order as listed by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// One line item of an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub material_id: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub price: Decimal,
}

/// An order with its line items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetails {
    pub id: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

/// Payload for creating a new order
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    #[validate(length(min = 1, message = "customer_name cannot be empty"))]
    pub customer_name: String,
    #[validate(length(min = 1, message = "order needs at least one item"))]
    pub items: Vec<OrderItemInput>,
}

/// One requested line item in an order creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub material_id: String,
    pub quantity: i64,
}

/// Wire body of `PUT /orders/{id}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}
