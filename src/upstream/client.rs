// =============================================================================
// Stock Price Provider REST Client
// =============================================================================
//
// Thin wrapper over `GET {base}/{ticker}?minutes={minutes}`. No retries, no
// caching and no timeout beyond the transport default.
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, instrument};

use super::{PriceHistorySource, UpstreamError};
use crate::types::PriceSeries;

/// REST client for the upstream price-history provider.
#[derive(Debug, Clone)]
pub struct StockApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl StockApiClient {
    /// Create a client rooted at `base_url` (trailing slashes are ignored).
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("invalid upstream base URL '{base_url}'"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("upstream base URL '{base_url}' cannot carry path segments");
        }

        let client = reqwest::Client::builder()
            .build()
            .context("failed to build reqwest client")?;

        debug!(base_url = %base_url, "StockApiClient initialised");

        Ok(Self { base_url, client })
    }

    /// Base URL with `ticker` appended as exactly one percent-encoded path
    /// segment, so `/`, `?` and `#` inside a symbol never become URL syntax.
    fn history_url(&self, ticker: &str) -> Url {
        let mut url = self.base_url.clone();
        // Infallible: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(ticker);
        }
        url
    }
}

#[async_trait]
impl PriceHistorySource for StockApiClient {
    #[instrument(skip(self), name = "upstream::fetch_history")]
    async fn fetch_history(
        &self,
        ticker: &str,
        minutes: &str,
    ) -> Result<PriceSeries, UpstreamError> {
        let url = self.history_url(ticker);
        let url_str = url.to_string();

        let resp = self
            .client
            .get(url)
            .query(&[("minutes", minutes)])
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url_str.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url_str,
                status,
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url_str.clone(),
                source,
            })?;

        let series: PriceSeries =
            serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode {
                url: url_str.clone(),
                reason: e.to_string(),
            })?;

        debug!(ticker, minutes, count = series.len(), "price history fetched");
        Ok(series)
    }
}
