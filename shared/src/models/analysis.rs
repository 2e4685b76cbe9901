//! Order analysis models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregation period for the order analysis series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl AnalysisPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisPeriod::Daily => "daily",
            AnalysisPeriod::Weekly => "weekly",
            AnalysisPeriod::Monthly => "monthly",
        }
    }

    /// Calendar days covered by one point of this period
    pub fn days(&self) -> u64 {
        match self {
            AnalysisPeriod::Daily => 1,
            AnalysisPeriod::Weekly => 7,
            AnalysisPeriod::Monthly => 30,
        }
    }
}

/// One aggregated point of the order analysis series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderAnalysisPoint {
    pub date: NaiveDate,
    pub total_orders: i64,
    pub total_amount: Decimal,
}
