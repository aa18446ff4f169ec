//! Route configuration and setup.
//!
//! Health checks live in [health](health); the upload endpoint in
//! `crate::handlers::upload`.

mod health;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use trademedia_core::constants::API_PREFIX;
use trademedia_core::Config;

use crate::api_doc;
use crate::handlers;
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(&state.config)?;

    let api_routes = Router::new()
        .route(
            &format!("{}/upload", API_PREFIX),
            post(handlers::upload::upload_image),
        )
        .route(
            &format!("{}/openapi.json", API_PREFIX),
            get(api_doc::serve_openapi),
        );

    let health_routes = Router::new()
        .route("/health/live", get(health::liveness_check))
        .route("/health", get(health::health_check));

    let concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10_000)
        .max(1);

    let app = api_routes
        .merge(health_routes)
        .merge(
            utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
                .path("/docs"),
        )
        .layer(ConcurrencyLimitLayer::new(concurrency_limit))
        // Oversized bodies fail inside multipart decoding and fold into the
        // decoder's "absent file" semantics, keeping responses structured.
        .layer(DefaultBodyLimit::max(state.config.max_upload_size_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();
        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
