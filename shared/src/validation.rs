//! Validation guards for the Inventory Dashboard
//!
//! These checks mirror what the stock dialogs enforce before
//! submitting. They are advisory: the server remains authoritative for
//! the `0 <= reserved <= quantity` invariant.

use thiserror::Error;

/// Violations of the stock quantity invariant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StockValidationError {
    #[error("quantity cannot be negative")]
    NegativeQuantity,
    #[error("reserved quantity cannot be negative")]
    NegativeReserved,
    #[error("reserved quantity cannot exceed total quantity")]
    ReservedExceedsQuantity,
    #[error("total quantity cannot fall below the reserved quantity")]
    QuantityBelowReserved,
}

/// Validate a create/update payload: both values non-negative and
/// `reserved <= quantity`
pub fn validate_stock_payload(quantity: i64, reserved: i64) -> Result<(), StockValidationError> {
    if quantity < 0 {
        return Err(StockValidationError::NegativeQuantity);
    }
    if reserved < 0 {
        return Err(StockValidationError::NegativeReserved);
    }
    if reserved > quantity {
        return Err(StockValidationError::ReservedExceedsQuantity);
    }
    Ok(())
}

/// Pre-submission check for an adjustment dialog
///
/// When adjusting the reserved sub-quantity the result must stay within
/// `[0, quantity]`; when adjusting the total quantity the result must
/// not fall below the current reserved value.
pub fn check_adjustment(
    quantity: i64,
    reserved: i64,
    delta: i64,
    is_reserved: bool,
) -> Result<(), StockValidationError> {
    if is_reserved {
        let new_reserved = reserved + delta;
        if new_reserved < 0 {
            return Err(StockValidationError::NegativeReserved);
        }
        if new_reserved > quantity {
            return Err(StockValidationError::ReservedExceedsQuantity);
        }
    } else {
        let new_quantity = quantity + delta;
        if new_quantity < reserved {
            return Err(StockValidationError::QuantityBelowReserved);
        }
    }
    Ok(())
}

/// Allocatable remainder, `quantity - reserved`
pub fn available(quantity: i64, reserved: i64) -> i64 {
    quantity - reserved
}

/// Whether a quantity is at or below the low-stock threshold
pub fn is_low_stock(quantity: i64, threshold: i64) -> bool {
    quantity <= threshold
}
