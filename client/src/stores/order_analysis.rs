//! Order analysis store: read-only aggregate series for charts

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use shared::{AnalysisPeriod, OrderAnalysisPoint};

/// Client-visible slice of the analysis chart state
#[derive(Debug, Clone, Default)]
pub struct OrderAnalysisState {
    pub data: Vec<OrderAnalysisPoint>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Store feeding the order count/amount chart
///
/// The API does not expose an aggregation endpoint yet, so the series
/// is produced client-side.
// TODO: switch to a real orders-analysis endpoint once the API grows
// one; the action contract stays the same.
pub struct OrderAnalysisStore {
    state: OrderAnalysisState,
}

impl OrderAnalysisStore {
    pub fn new() -> Self {
        Self {
            state: OrderAnalysisState::default(),
        }
    }

    pub fn state(&self) -> &OrderAnalysisState {
        &self.state
    }

    /// Replace the series for the selected period
    pub async fn fetch_analysis(&mut self, period: AnalysisPeriod) {
        self.state.loading = true;
        self.state.error = None;
        self.state.data = placeholder_series(period);
        self.state.loading = false;
    }
}

impl Default for OrderAnalysisStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic placeholder series, one point per period step
fn placeholder_series(period: AnalysisPeriod) -> Vec<OrderAnalysisPoint> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    [(15, 3000), (20, 4000), (10, 2000)]
        .into_iter()
        .enumerate()
        .map(|(i, (total_orders, amount))| OrderAnalysisPoint {
            date: start
                .checked_add_days(Days::new(i as u64 * period.days()))
                .unwrap_or(start),
            total_orders,
            total_amount: Decimal::from(amount),
        })
        .collect()
}
