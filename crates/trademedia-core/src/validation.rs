//! Upload admission rules.
//!
//! The rules run in a fixed order and the first failure wins: presence of
//! the file field, then the declared content type, then storage readiness.
//! Logging here is advisory only and never affects the outcome.

use crate::error::UploadError;
use crate::models::UploadRequest;

/// Content type family accepted for uploads.
const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";

/// Rule 1: a file field must have been decoded from the request.
pub fn require_file(request: Option<UploadRequest>) -> Result<UploadRequest, UploadError> {
    match request {
        Some(request) => Ok(request),
        None => {
            tracing::debug!("Rejecting upload without a file field");
            Err(UploadError::MissingFile)
        }
    }
}

/// Rule 2: the declared media type must belong to the `image/` family.
///
/// Declared-type check only; the payload bytes are not sniffed.
pub fn validate_content_type(content_type: &str) -> Result<(), UploadError> {
    if !content_type.starts_with(IMAGE_CONTENT_TYPE_PREFIX) {
        tracing::debug!(content_type = %content_type, "Rejecting non-image upload");
        return Err(UploadError::NotAnImage);
    }
    Ok(())
}

/// Rule 3: a non-empty storage write credential must be configured.
pub fn require_write_credential(token: Option<&str>) -> Result<(), UploadError> {
    match token {
        Some(token) if !token.trim().is_empty() => Ok(()),
        _ => {
            tracing::warn!("Rejecting upload: storage write credential is not configured");
            Err(UploadError::StorageNotConfigured)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content_type: &str) -> UploadRequest {
        UploadRequest {
            data: vec![0xFF, 0xD8],
            content_type: content_type.to_string(),
            file_name: "photo.jpg".to_string(),
        }
    }

    #[test]
    fn missing_file_is_rejected() {
        assert!(matches!(
            require_file(None),
            Err(UploadError::MissingFile)
        ));
    }

    #[test]
    fn present_file_passes_through() {
        let decoded = require_file(Some(request("image/jpeg"))).unwrap();
        assert_eq!(decoded.content_type, "image/jpeg");
    }

    #[test]
    fn image_content_types_accepted() {
        assert!(validate_content_type("image/jpeg").is_ok());
        assert!(validate_content_type("image/png").is_ok());
        assert!(validate_content_type("image/svg+xml").is_ok());
    }

    #[test]
    fn non_image_content_types_rejected() {
        assert!(matches!(
            validate_content_type("text/plain"),
            Err(UploadError::NotAnImage)
        ));
        assert!(matches!(
            validate_content_type("application/octet-stream"),
            Err(UploadError::NotAnImage)
        ));
        assert!(matches!(
            validate_content_type(""),
            Err(UploadError::NotAnImage)
        ));
    }

    #[test]
    fn missing_or_blank_credential_rejected() {
        assert!(matches!(
            require_write_credential(None),
            Err(UploadError::StorageNotConfigured)
        ));
        assert!(matches!(
            require_write_credential(Some("")),
            Err(UploadError::StorageNotConfigured)
        ));
        assert!(matches!(
            require_write_credential(Some("   ")),
            Err(UploadError::StorageNotConfigured)
        ));
    }

    #[test]
    fn configured_credential_accepted() {
        assert!(require_write_credential(Some("vercel_blob_rw_token")).is_ok());
    }
}
