//! HTTP error response conversion
//!
//! This module converts `UploadError` into the service's JSON error bodies.
//! Every failure path renders as structured JSON; nothing escapes as an
//! unshaped response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use trademedia_core::{LogLevel, UploadError};
use utoipa::ToSchema;

/// JSON error body.
///
/// Simple failures carry only `error`; upload failures additionally carry
/// the backend's diagnostic text and the time of failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Wrapper type for UploadError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for UploadError (external type from
/// trademedia-core)
#[derive(Debug)]
pub struct HttpUploadError(pub UploadError);

impl From<UploadError> for HttpUploadError {
    fn from(err: UploadError) -> Self {
        HttpUploadError(err)
    }
}

fn log_error(error: &UploadError) {
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_code = error_code, "Upload rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_code = error_code, "Upload rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_code = error_code, "Upload failed");
        }
    }
}

impl IntoResponse for HttpUploadError {
    fn into_response(self) -> Response {
        let error = &self.0;

        let status = StatusCode::from_u16(error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(error);

        let body = match error {
            UploadError::UploadFailed(details) => ErrorBody {
                error: error.client_message(),
                details: Some(details.clone()),
                timestamp: Some(Utc::now().to_rfc3339()),
            },
            _ => ErrorBody {
                error: error.client_message(),
                details: None,
                timestamp: None,
            },
        };

        (status, Json(body)).into_response()
    }
}
