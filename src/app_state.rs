// =============================================================================
// Application State — injected dependencies for the request handlers
// =============================================================================
//
// Holds the upstream price source and the statistics engine. Nothing in here
// is mutated after construction, so one `Arc<AppState>` is shared by every
// request without locking.
// =============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::api::error::ApiError;
use crate::statistics::StatisticsEngine;
use crate::types::{AverageResult, CorrelationResult};
use crate::upstream::{PriceHistorySource, UpstreamError};

pub struct AppState {
    source: Arc<dyn PriceHistorySource>,
    engine: StatisticsEngine,
}

/// An empty query value counts as absent; anything else passes verbatim.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn require_minutes(minutes: Option<&str>) -> Result<&str, ApiError> {
    present(minutes).ok_or_else(|| {
        warn!("request rejected: missing minutes");
        ApiError::Validation("minutes query parameter is required".to_string())
    })
}

impl AppState {
    pub fn new(source: Arc<dyn PriceHistorySource>, engine: StatisticsEngine) -> Self {
        Self { source, engine }
    }

    /// Average price of `ticker` over the last `minutes`.
    pub async fn stock_average(
        &self,
        ticker: &str,
        minutes: Option<&str>,
    ) -> Result<AverageResult, ApiError> {
        let minutes = require_minutes(minutes)?;

        let history = self
            .source
            .fetch_history(ticker, minutes)
            .await
            .map_err(|e| upstream_failure(e, ticker))?;

        let average_stock_price = self.engine.average(&history);
        info!(ticker, minutes, points = history.len(), average_stock_price, "average computed");

        Ok(AverageResult {
            average_stock_price,
            price_history: history,
        })
    }

    /// Correlation between two tickers over the last `minutes`.
    ///
    /// Both tickers are validated before any upstream call. The two fetches
    /// run concurrently and either failure fails the whole request.
    pub async fn stock_correlation(
        &self,
        ticker1: Option<&str>,
        ticker2: Option<&str>,
        minutes: Option<&str>,
    ) -> Result<CorrelationResult, ApiError> {
        let (ticker1, ticker2) = match (present(ticker1), present(ticker2)) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                warn!(?ticker1, ?ticker2, "request rejected: missing ticker");
                return Err(ApiError::Validation(
                    "Both ticker1 and ticker2 are required".to_string(),
                ));
            }
        };
        let minutes = require_minutes(minutes)?;

        let (history1, history2) = tokio::try_join!(
            async {
                self.source
                    .fetch_history(ticker1, minutes)
                    .await
                    .map_err(|e| upstream_failure(e, ticker1))
            },
            async {
                self.source
                    .fetch_history(ticker2, minutes)
                    .await
                    .map_err(|e| upstream_failure(e, ticker2))
            },
        )?;

        let correlation = self.engine.correlation(&history1, &history2);
        info!(ticker1, ticker2, minutes, correlation, "correlation computed");

        let mut stocks = BTreeMap::new();
        stocks.insert(ticker1.to_string(), self.engine.summarize(history1));
        stocks.insert(ticker2.to_string(), self.engine.summarize(history2));

        Ok(CorrelationResult {
            correlation,
            stocks,
        })
    }
}

fn upstream_failure(e: UpstreamError, ticker: &str) -> ApiError {
    error!(ticker, error = %e, "upstream fetch failed");
    ApiError::Upstream(e)
}
