//! Multipart decoding for the upload handler.

use axum::extract::Multipart;
use trademedia_core::models::UploadRequest;

/// Fallbacks applied when the client omits metadata for the file field.
const FALLBACK_FILE_NAME: &str = "unknown";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Extract the `file` field from a multipart body.
///
/// Returns the first field named `file`. Every decoding failure (malformed
/// body, unreadable field data) folds into `None`: downstream validation
/// cannot tell a malformed body apart from a request that never sent a file.
pub async fn extract_file_field(mut multipart: Multipart) -> Option<UploadRequest> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read multipart field");
                return None;
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());
        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

        match field.bytes().await {
            Ok(data) => {
                return Some(UploadRequest {
                    data: data.to_vec(),
                    content_type,
                    file_name,
                })
            }
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read file data");
                return None;
            }
        }
    }
}
