//! Shared types and models for the Inventory Dashboard
//!
//! This crate contains types shared between the API client, the WASM
//! dialog bindings, and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
