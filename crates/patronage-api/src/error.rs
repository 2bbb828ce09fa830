//! # API Errors
//!
//! Every handler failure becomes a 400 carrying the failure text as `detail`.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use patronage_core::GatewayError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Error response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Handler failure
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),

    #[error("Invalid JSON payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        warn!(detail = %detail, "request_failed");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { detail })).into_response()
    }
}
