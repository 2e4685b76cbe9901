//! Domain models for the Inventory Dashboard

mod analysis;
mod order;
mod stock;

pub use analysis::*;
pub use order::*;
pub use stock::*;
