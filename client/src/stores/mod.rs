//! Domain stores
//!
//! Every action follows the same contract: `loading` is set on entry
//! and cleared on every exit path; a failure replaces `error` with a
//! localized message. Read actions swallow the failure and leave
//! cached data in place; mutating actions also return the error so a
//! dialog can stay open. There is no retry, cancellation, or request
//! de-duplication: on concurrent calls the latest response wins.

mod inventory;
mod order;
mod order_analysis;

pub use inventory::{InventoryState, InventoryStore, DEFAULT_LOW_STOCK_THRESHOLD};
pub use order::{OrderState, OrderStore};
pub use order_analysis::{OrderAnalysisState, OrderAnalysisStore};
