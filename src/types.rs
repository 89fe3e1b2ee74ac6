// =============================================================================
// Shared types used across the stock statistics service
// =============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One observed price at one instant, exactly as the provider reported it.
///
/// Both fields are required: a payload entry missing either one fails to
/// deserialize and the whole fetch is rejected. The timestamp is carried
/// through untouched so clients see the provider's own formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    pub timestamp: String,
}

/// Price observations in provider arrival order (assumed chronological).
pub type PriceSeries = Vec<PricePoint>;

/// Response body of `GET /stocks/:ticker`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageResult {
    pub average_stock_price: f64,
    pub price_history: PriceSeries,
}

/// Per-ticker block inside a [`CorrelationResult`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub average_price: f64,
    pub price_history: PriceSeries,
}

/// Response body of `GET /stockcorrelation`.
///
/// Keyed by ticker symbol. Requesting the same symbol twice yields a single
/// entry.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationResult {
    pub correlation: f64,
    pub stocks: BTreeMap<String, StockSummary>,
}
