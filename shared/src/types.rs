//! Common types used across the dashboard

use serde::{Deserialize, Serialize};

/// Paginated response returned by every list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> Paginated<T> {
    /// An empty first page
    pub fn empty(page_size: i64) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size,
            total_pages: 0,
        }
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::empty(10)
    }
}
