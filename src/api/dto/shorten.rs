//! DTOs for link shortening endpoint.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Longest target URL accepted, in bytes.
pub const MAX_URL_LENGTH: u64 = 8192;

/// Request to shorten a single URL.
///
/// The URL is not checked for syntax; any non-empty string that can be sent
/// back in a `Location` header is accepted.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(max = MAX_URL_LENGTH, message = "URL is too long"))]
    #[validate(custom(function = "validate_redirectable"))]
    pub url: String,
}

/// Response for a successfully created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub long_url: String,
    pub code: String,
    pub short_url: String,
}

/// Rejects URLs that could not be emitted as a redirect target.
fn validate_redirectable(url: &str) -> Result<(), ValidationError> {
    if HeaderValue::from_str(url).is_err() {
        return Err(ValidationError::new("redirectable")
            .with_message("URL contains characters not allowed in a redirect".into()));
    }
    Ok(())
}
