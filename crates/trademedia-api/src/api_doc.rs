//! OpenAPI documentation.

use axum::Json;
use utoipa::OpenApi;

use crate::error;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trademedia API",
        version = "0.1.0",
        description = "Media ingestion API: accepts image uploads over multipart/form-data and stores them in object storage under collision-resistant keys."
    ),
    paths(handlers::upload::upload_image),
    components(schemas(handlers::upload::UploadResponse, error::ErrorBody)),
    tags((name = "upload", description = "Image upload"))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
