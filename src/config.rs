//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export BASE_URL="https://s.example.com"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Prefix of the short URLs handed back to clients
//!   (default: `http://localhost:8080`)
//! - `STATIC_DIR` - Directory holding the landing page `index.html` (default: `static`)
//! - `KEY_MAX_ATTEMPTS` - Candidate keys tried before giving up on a collision
//!   (default: 10, range: 1-100)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

use crate::domain::store::DEFAULT_MAX_ATTEMPTS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Scheme and host used to build short URLs, e.g. `https://s.example.com`.
    pub base_url: String,
    pub static_dir: String,
    /// Upper bound on candidate keys drawn per shorten request.
    pub key_max_attempts: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            base_url: "http://localhost:8080".to_string(),
            static_dir: "static".to_string(),
            key_max_attempts: DEFAULT_MAX_ATTEMPTS,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Missing or unparsable values fall back to [`Config::default`].
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let base_url = env::var("BASE_URL").unwrap_or(defaults.base_url);
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        let key_max_attempts = env::var("KEY_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.key_max_attempts);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            listen_addr,
            base_url,
            static_dir,
            key_max_attempts,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an `http://` or `https://` URL
    /// - `static_dir` is empty
    /// - `key_max_attempts` is outside 1-100
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.static_dir.is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        if self.key_max_attempts == 0 || self.key_max_attempts > 100 {
            anyhow::bail!(
                "KEY_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.key_max_attempts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Key max attempts: {}", self.key_max_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
