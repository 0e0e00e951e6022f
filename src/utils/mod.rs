//! Utility functions for key generation and short URL formatting.
//!
//! - [`code_generator`] - Short key generation strategies
//! - [`short_url`] - Public short URL construction

pub mod code_generator;
pub mod short_url;
