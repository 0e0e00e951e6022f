//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Landing page (`index.html` from the static directory)
//! - `POST /shorten`  - Create a short link
//! - `GET  /health`   - Health check
//! - `GET  /{code}`   - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeFile;

/// Builds the router with all routes and the tracing layer.
///
/// `static_dir` must contain `index.html`; a missing file yields 404 on `/`.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let index = ServeFile::new(static_dir.as_ref().join("index.html"));

    api::routes::public_routes()
        .route_service("/", index)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service, trimming trailing slashes before routing.
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, static_dir))
}
