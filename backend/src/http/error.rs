//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::DashboardError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Aggregation or rendering failure
    Dashboard(DashboardError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => {
                error!(%msg, "Internal error while serving request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("INTERNAL_ERROR", msg),
                )
            }
            AppError::Dashboard(e) => {
                error!(error = %e, "Dashboard render failed");
                let code = match &e {
                    DashboardError::Render(_) => "RENDER_ERROR",
                    _ => "DASHBOARD_ERROR",
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new(code, "Dashboard could not be rendered").with_details(e.to_string()),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        AppError::Dashboard(err)
    }
}
