// =============================================================================
// Upstream price-history provider
// =============================================================================

pub mod client;

pub use client::StockApiClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::PriceSeries;

/// Failure to obtain a usable price history from the provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("provider returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed price history from {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// Anything that can produce a ticker's price history for a window of
/// `minutes`. Both arguments are forwarded verbatim.
#[async_trait]
pub trait PriceHistorySource: Send + Sync {
    async fn fetch_history(&self, ticker: &str, minutes: &str)
        -> Result<PriceSeries, UpstreamError>;
}
