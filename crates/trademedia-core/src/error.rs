//! Error types module
//!
//! Upload admission and persistence errors for the media ingestion service.
//! Each variant self-describes its HTTP response characteristics (status
//! code, machine-readable code, client message, log level) so the API layer
//! can render it without variant-by-variant knowledge.

use thiserror::Error;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable configuration issues
    Warn,
    /// Error level - for backend failures
    Error,
}

/// Errors produced while admitting or persisting an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file provided")]
    MissingFile,

    #[error("File must be an image")]
    NotAnImage,

    #[error("Blob storage not configured")]
    StorageNotConfigured,

    /// Carries the backend's error text verbatim for diagnostics.
    #[error("Failed to upload image: {0}")]
    UploadFailed(String),
}

impl UploadError {
    /// HTTP status code to return
    pub fn http_status_code(&self) -> u16 {
        match self {
            UploadError::MissingFile | UploadError::NotAnImage => 400,
            UploadError::StorageNotConfigured | UploadError::UploadFailed(_) => 500,
        }
    }

    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            UploadError::MissingFile => "MISSING_FILE",
            UploadError::NotAnImage => "NOT_AN_IMAGE",
            UploadError::StorageNotConfigured => "STORAGE_NOT_CONFIGURED",
            UploadError::UploadFailed(_) => "UPLOAD_FAILED",
        }
    }

    /// Client-facing message. Part of the wire contract; the backend detail
    /// of `UploadFailed` is surfaced separately, never in this message.
    pub fn client_message(&self) -> String {
        match self {
            UploadError::MissingFile => "No file provided".to_string(),
            UploadError::NotAnImage => "File must be an image".to_string(),
            UploadError::StorageNotConfigured => "Blob storage not configured".to_string(),
            UploadError::UploadFailed(_) => "Failed to upload image".to_string(),
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            UploadError::MissingFile | UploadError::NotAnImage => LogLevel::Debug,
            UploadError::StorageNotConfigured => LogLevel::Warn,
            UploadError::UploadFailed(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_metadata() {
        let err = UploadError::MissingFile;
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "MISSING_FILE");
        assert_eq!(err.client_message(), "No file provided");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn not_an_image_metadata() {
        let err = UploadError::NotAnImage;
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "NOT_AN_IMAGE");
        assert_eq!(err.client_message(), "File must be an image");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn storage_not_configured_metadata() {
        let err = UploadError::StorageNotConfigured;
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "STORAGE_NOT_CONFIGURED");
        assert_eq!(err.client_message(), "Blob storage not configured");
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn upload_failed_preserves_backend_text() {
        let err = UploadError::UploadFailed("connection reset by peer".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "UPLOAD_FAILED");
        assert_eq!(err.client_message(), "Failed to upload image");
        assert_eq!(err.log_level(), LogLevel::Error);
        assert!(err.to_string().contains("connection reset by peer"));
    }
}
