//! Errors returned by the shortener store.

use thiserror::Error;

/// Failure outcomes of [`crate::domain::store::ShortenerStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `shorten` was called with an empty target URL.
    #[error("target URL must not be empty")]
    EmptyInput,

    /// Every candidate key within the retry bound was already taken.
    ///
    /// Transient: retrying the whole operation is safe.
    #[error("no free short key found after {attempts} attempts")]
    KeyGenerationExhausted { attempts: usize },

    /// `resolve` was called with a key that is not bound.
    #[error("short key not found: {key}")]
    NotFound { key: String },
}
