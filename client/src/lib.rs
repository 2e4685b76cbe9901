//! Inventory Dashboard - client-side data access layer
//!
//! The stores in this crate hold the client-visible slice of server
//! state (lists, selected entity, loading/error flags) and expose
//! action methods that perform one REST call, update local state, and
//! refetch dependent views. View code receives a [`Dashboard`] and
//! renders from the store state it exposes; there are no global
//! singletons.

pub mod api;
pub mod config;
pub mod error;
pub mod stores;

pub use api::ApiClient;
pub use config::Config;
pub use error::{ApiError, ApiResult};

use stores::{InventoryStore, OrderAnalysisStore, OrderStore};

/// Application state shared with view components
///
/// Each store exclusively owns its in-memory slice; cross-store
/// effects are independent API calls, never a shared transaction.
pub struct Dashboard {
    pub inventory: InventoryStore,
    pub orders: OrderStore,
    pub analysis: OrderAnalysisStore,
}

impl Dashboard {
    /// Build the stores from configuration
    pub fn new(config: &Config) -> Self {
        Self::with_api(ApiClient::new(&config.api))
    }

    /// Build the stores around an existing API client
    pub fn with_api(api: ApiClient) -> Self {
        Self {
            inventory: InventoryStore::new(api.clone()),
            orders: OrderStore::new(api),
            analysis: OrderAnalysisStore::new(),
        }
    }
}
