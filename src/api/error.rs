// =============================================================================
// API error envelope
// =============================================================================
//
// Every failure leaves the service as `{"error": "<message>"}`. Validation
// messages are echoed to the caller; upstream details are logged and replaced
// with a fixed message.
// =============================================================================

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Message returned for any upstream failure.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch stock data";

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request parameter is missing or empty.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Upstream(_) => UPSTREAM_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.public_message() });
        (self.status(), Json(body)).into_response()
    }
}
