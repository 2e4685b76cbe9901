//! WebAssembly module for the Inventory Dashboard
//!
//! Provides client-side checks for the stock dialogs:
//! - create/update payload validation (`reserved <= quantity`)
//! - adjustment pre-submission guards
//! - derived availability and low-stock classification
//!
//! These mirror the server rules so a dialog can reject bad input
//! before a round trip; the server stays authoritative.

use validator::Validate;
use wasm_bindgen::prelude::*;

use shared::models::MaterialStockCreate;
use shared::validation;

/// Validate a raw create-dialog payload (JSON string)
#[wasm_bindgen]
pub fn validate_create_payload(payload_json: &str) -> Result<(), JsValue> {
    let payload: MaterialStockCreate = serde_json::from_str(payload_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid payload JSON: {}", e)))?;
    payload
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    validation::validate_stock_payload(payload.quantity, payload.reserved)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check stock quantities before submitting a create/update form
#[wasm_bindgen]
pub fn check_stock_payload(quantity: i32, reserved: i32) -> Result<(), JsValue> {
    validation::validate_stock_payload(quantity as i64, reserved as i64)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check an adjustment before submitting the adjust dialog
///
/// When `is_reserved` the result must stay within `[0, quantity]`;
/// otherwise the resulting total must not fall below `reserved`.
#[wasm_bindgen]
pub fn check_adjustment(
    quantity: i32,
    reserved: i32,
    delta: i32,
    is_reserved: bool,
) -> Result<(), JsValue> {
    validation::check_adjustment(quantity as i64, reserved as i64, delta as i64, is_reserved)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Allocatable remainder shown next to the quantity fields
#[wasm_bindgen]
pub fn available_quantity(quantity: i32, reserved: i32) -> i32 {
    validation::available(quantity as i64, reserved as i64) as i32
}

/// Whether a row should get the low-stock badge
#[wasm_bindgen]
pub fn is_low_stock(quantity: i32, threshold: i32) -> bool {
    validation::is_low_stock(quantity as i64, threshold as i64)
}

/// Next status in the order workflow, or `None` for a completed order
///
/// Takes and returns the Turkish wire labels used by the dropdown.
#[wasm_bindgen]
pub fn next_order_status(status: &str) -> Option<String> {
    let status: shared::OrderStatus =
        serde_json::from_value(serde_json::Value::String(status.to_string())).ok()?;
    status.next().map(|next| next.as_str().to_string())
}
