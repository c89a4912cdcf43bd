//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps the core's classified errors to HTTP status codes and the flat
//! `{"error": ..., "details": ...}` JSON body. Internal failure reasons are
//! logged for operators and never returned to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nigel_core::{CalculationError, NigelError, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// JSON error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Short error label, e.g. "Invalid input value".
    pub error: String,
    /// Longer explanation of what was wrong.
    pub details: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Client input rejected (400).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Unexpected failure during calculation (500).
    #[error("calculation error: {0}")]
    Calculation(#[from] CalculationError),
}

impl From<NigelError> for AppError {
    fn from(err: NigelError) -> Self {
        match err {
            NigelError::Validation(e) => Self::Validation(e),
            NigelError::Calculation(e) => Self::Calculation(e),
        }
    }
}

impl AppError {
    /// HTTP status for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Calculation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body. Built only from fixed text.
    fn body(&self) -> ErrorBody {
        let (error, details) = match self {
            Self::Validation(e) => (e.message(), e.details()),
            Self::Calculation(e) => (e.message(), e.details()),
        };
        ErrorBody {
            error: error.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Calculation(e) = &self {
            tracing::error!(code = e.code(), reason = e.reason(), "calculation failed");
        }

        (self.status(), Json(self.body())).into_response()
    }
}
