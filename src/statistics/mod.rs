// =============================================================================
// Statistics Engine
// =============================================================================
//
// Pure, side-effect-free statistics over provider price series. Every
// function is total: empty or degenerate input yields `0.0`, never NaN and
// never an error, so handlers can serialize results without further checks.

pub mod correlation;
pub mod mean;

pub use correlation::price_correlation;
pub use mean::average;

use crate::types::{PriceSeries, StockSummary};

/// Stateless facade over the statistics functions, injected into the
/// application state alongside the upstream client.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsEngine;

impl StatisticsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Arithmetic mean of the series' prices.
    pub fn average(&self, series: &PriceSeries) -> f64 {
        average(series)
    }

    /// Pearson correlation of two series, aligned by position.
    pub fn correlation(&self, a: &PriceSeries, b: &PriceSeries) -> f64 {
        price_correlation(a, b)
    }

    /// Wrap a fetched series together with its average.
    pub fn summarize(&self, series: PriceSeries) -> StockSummary {
        StockSummary {
            average_price: self.average(&series),
            price_history: series,
        }
    }
}
