//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use tracing::{info, warn};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::StoreError;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_url::build_short_url;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "long_url": "https://example.com/a",
///   "code": "aZ3k9Q",
///   "short_url": "http://localhost:8080/aZ3k9Q"
/// }
/// ```
///
/// Submitting the same URL twice yields two independent short links.
///
/// # Errors
///
/// - 400 Bad Request if the body is not valid JSON, the URL is empty, too
///   long, or not usable as a redirect target
/// - 503 Service Unavailable if no free key was found; the request can be
///   retried as-is
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let code = state.store.shorten(&payload.url).inspect_err(|e| {
        if let StoreError::KeyGenerationExhausted { attempts } = e {
            warn!("Key generation exhausted after {} attempts", attempts);
        }
    })?;

    let short_url = build_short_url(&state.base_url, &code);
    info!(code = %code, "Created short link");

    Ok(Json(ShortenResponse {
        long_url: payload.url,
        code,
        short_url,
    }))
}
