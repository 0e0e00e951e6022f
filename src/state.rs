use std::sync::Arc;

use crate::domain::ShortenerStore;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ShortenerStore>,
    /// Prefix for short URLs returned by `POST /shorten`.
    pub base_url: String,
}

impl AppState {
    pub fn new(store: Arc<ShortenerStore>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }
}
