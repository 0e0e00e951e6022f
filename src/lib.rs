//! # Quick Shortener
//!
//! A small URL shortening service built with Axum. Links live in process
//! memory and disappear when the process exits.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`ShortenerStore`] and short key rules
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//! - **Utilities** ([`utils`]) - Key generation and short URL formatting
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8080"
//! cargo run
//!
//! curl -s -X POST localhost:8080/shorten -d '{"url":"https://example.com"}' \
//!      -H 'content-type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use domain::ShortenerStore;
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::{ShortenerStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{KeyGenerator, RandomKeyGenerator, SeededKeyGenerator};
}
