//! Axum-specific error types and mappings.
//!
//! Maps [`JobError`] kinds and delivery misses to HTTP status codes and a
//! JSON body the UI can branch on.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use voxcast_core::{JobError, JobErrorKind};

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request outside the job pipeline.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A synthesis job failed.
    #[error(transparent)]
    Job(#[from] JobError),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    success: bool,
    error: String,
    status: u16,
    /// Stable error discriminant for client-side handling
    error_kind: &'static str,
}

impl HttpError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "notFound"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, JobErrorKind::InvalidInput.as_str()),
            Self::Job(err) => {
                let kind = err.kind();
                let status = match kind {
                    JobErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
                    JobErrorKind::Busy => StatusCode::CONFLICT,
                    JobErrorKind::SynthesisFailed => StatusCode::BAD_GATEWAY,
                    JobErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, kind.as_str())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, error_kind) = self.status_and_kind();
        let message = match &self {
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::Job(err) => err.to_string(),
        };

        if status.is_server_error() {
            tracing::warn!(target: "voxcast.http", status = status.as_u16(), error = %message, "Request failed");
        }

        let body = ErrorBody {
            success: false,
            error: message,
            status: status.as_u16(),
            error_kind,
        };

        (status, Json(body)).into_response()
    }
}
