//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::error::AnalysisError;
use crate::store::StoreError;

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
    /// Invalid request (query or path validation)
    BadRequest(String),
    /// Payload decoded but failed semantic validation
    Unprocessable(String),
    /// Internal server error
    Internal(String),
    /// Store error
    Store(StoreError),
    /// Analysis error
    Analysis(AnalysisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Unprocessable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("UNPROCESSABLE_ENTITY", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Store(e) => {
                let msg = e.to_string();
                match e {
                    StoreError::NotFound { .. } => {
                        (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg))
                    }
                    StoreError::SerializationError { .. } => (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        ApiError::new("UNPROCESSABLE_ENTITY", msg),
                    ),
                    StoreError::CapacityExceeded { .. } => {
                        (StatusCode::CONFLICT, ApiError::new("CAPACITY_EXCEEDED", msg))
                    }
                }
            }
            AppError::Analysis(e) => {
                let msg = e.to_string();
                match e {
                    // An unknown depot id behaves like a missing resource.
                    AnalysisError::InvalidDepot { .. } => {
                        (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg))
                    }
                    AnalysisError::MalformedEvent { .. } => (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        ApiError::new("UNPROCESSABLE_ENTITY", msg),
                    ),
                }
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        AppError::Analysis(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
