//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortener endpoints.
///
/// # Endpoints
///
/// - `POST /shorten`  - Create a short link
/// - `GET  /health`   - Liveness and store size
/// - `GET  /{code}`   - Redirect to the target URL
///
/// Static segments take priority over `/{code}`, which is why `health` is a
/// reserved key.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
