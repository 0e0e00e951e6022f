//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `302 Found` and the target in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state
        .store
        .resolve(&code)
        .inspect_err(|_| debug!("No link for {}", code))?;

    debug!("Redirecting {} -> {}", code, long_url);

    let location = HeaderValue::from_str(&long_url).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid redirect target",
            json!({ "code": code }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
