//! Domain layer: the shortener store and the rules for short keys.
//!
//! This layer has no knowledge of HTTP, configuration, or logging. Handlers
//! in [`crate::api`] call into it through two operations:
//!
//! - [`store::ShortenerStore::shorten`] - bind a URL to a new short key
//! - [`store::ShortenerStore::resolve`] - look a short key up
//!
//! # Modules
//!
//! - [`store`] - Concurrent in-memory mapping
//! - [`short_key`] - Key length, alphabet, and reserved keys
//! - [`error`] - [`error::StoreError`] outcomes

pub mod error;
pub mod short_key;
pub mod store;

pub use error::StoreError;
pub use store::ShortenerStore;
