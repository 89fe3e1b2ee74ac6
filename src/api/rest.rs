// =============================================================================
// REST API Endpoints — Axum 0.7
// =============================================================================
//
//   GET /health                                         liveness, no upstream
//   GET /stocks/:ticker?minutes=N                       average price
//   GET /stockcorrelation?minutes=N&ticker1=A&ticker2=B correlation
//
// No authentication. CORS is fully permissive.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::error::ApiError;
use crate::app_state::AppState;
use crate::types::{AverageResult, CorrelationResult};

// =============================================================================
// Router construction
// =============================================================================

/// Build the full REST API router with CORS and tracing middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/stocks/:ticker", get(stock_average))
        .route("/stockcorrelation", get(stock_correlation))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Health
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    server_time: i64,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        server_time: chrono::Utc::now().timestamp_millis(),
    })
}

// =============================================================================
// Average price
// =============================================================================

#[derive(Debug, Deserialize)]
struct MinutesQuery {
    minutes: Option<String>,
}

async fn stock_average(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(query): Query<MinutesQuery>,
) -> Result<Json<AverageResult>, ApiError> {
    let result = state
        .stock_average(&ticker, query.minutes.as_deref())
        .await?;
    Ok(Json(result))
}

// =============================================================================
// Correlation
// =============================================================================

#[derive(Debug, Deserialize)]
struct CorrelationQuery {
    minutes: Option<String>,
    ticker1: Option<String>,
    ticker2: Option<String>,
}

async fn stock_correlation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CorrelationQuery>,
) -> Result<Json<CorrelationResult>, ApiError> {
    let result = state
        .stock_correlation(
            query.ticker1.as_deref(),
            query.ticker2.as_deref(),
            query.minutes.as_deref(),
        )
        .await?;
    Ok(Json(result))
}

// =============================================================================
// Tests
// =============================================================================
