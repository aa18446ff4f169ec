//! Image upload handler.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use trademedia_core::models::StoredObject;
use trademedia_core::validation;
use trademedia_core::UploadError;
use trademedia_storage::keys::generate_object_key;
use utoipa::ToSchema;

use crate::error::{ErrorBody, HttpUploadError};
use crate::state::AppState;
use crate::utils::multipart::extract_file_field;

/// Response returned for a successful upload.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    /// Public URL of the stored object.
    pub url: String,
    /// Storage key the object was written under.
    pub filename: String,
}

impl From<StoredObject> for UploadResponse {
    fn from(stored: StoredObject) -> Self {
        UploadResponse {
            success: true,
            url: stored.url,
            filename: stored.key,
        }
    }
}

/// Upload image handler
///
/// Decodes the `file` field from the multipart body, validates it (presence,
/// declared content type, storage readiness), writes the payload to the
/// object store under a collision-resistant key, and returns the public
/// descriptor.
///
/// # Errors
/// - `UploadError::MissingFile` - No file field was decoded (HTTP 400)
/// - `UploadError::NotAnImage` - Declared type is not `image/*` (HTTP 400)
/// - `UploadError::StorageNotConfigured` - Write credential unset (HTTP 500)
/// - `UploadError::UploadFailed` - Storage backend failure (HTTP 500)
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image uploaded successfully", body = UploadResponse),
        (status = 400, description = "Missing file or not an image", body = ErrorBody),
        (status = 500, description = "Storage not configured or upload failure", body = ErrorBody)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_image"))]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpUploadError> {
    // A rejected multipart body is indistinguishable from a request that
    // never sent a file field.
    let decoded = match multipart {
        Ok(multipart) => extract_file_field(multipart).await,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Multipart extraction rejected");
            None
        }
    };

    let request = validation::require_file(decoded)?;
    validation::validate_content_type(&request.content_type)?;
    validation::require_write_credential(state.write_token())?;

    let key = generate_object_key(&request.file_name);

    tracing::info!(
        key = %key,
        content_type = %request.content_type,
        size_bytes = request.data.len(),
        "Uploading image"
    );

    let url = state
        .storage
        .put(&key, &request.content_type, request.data)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, key = %key, "Failed to upload to storage");
            UploadError::UploadFailed(e.to_string())
        })?;

    Ok(Json(UploadResponse::from(StoredObject { url, key })))
}
