//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `BYTEMART_HOST` - Bind address (default: 127.0.0.1)
//! - `BYTEMART_PORT` - Listen port (default: 3000)
//! - `BYTEMART_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `BYTEMART_CATALOG_PATH` - Catalog JSON file (default: crates/storefront/content/catalog.json)
//! - `BYTEMART_CHAT_BASE_URL` - Chat deep link for orders (default: <https://wa.me/256779315934>)
//! - `BYTEMART_RESTORE_THEME` - Restore the persisted theme on page load (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use bytemart_core::order::DEFAULT_CHAT_BASE_URL;
use thiserror::Error;
use url::Url;

const DEFAULT_CATALOG_PATH: &str = "crates/storefront/content/catalog.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Catalog file read once at startup
    pub catalog_path: PathBuf,
    /// Chat deep link that order dialogs hand off to
    pub chat_base_url: String,
    /// Start each page load in the persisted theme
    pub restore_theme: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            chat_base_url: DEFAULT_CHAT_BASE_URL.to_string(),
            restore_theme: false,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("BYTEMART_HOST") {
            Some(value) => value.parse::<IpAddr>().map_err(|e| {
                ConfigError::InvalidEnvVar("BYTEMART_HOST".to_string(), e.to_string())
            })?,
            None => defaults.host,
        };
        let port = match lookup("BYTEMART_PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar("BYTEMART_PORT".to_string(), e.to_string())
            })?,
            None => defaults.port,
        };
        let base_url = lookup("BYTEMART_BASE_URL").unwrap_or(defaults.base_url);
        let catalog_path = lookup("BYTEMART_CATALOG_PATH").map_or(defaults.catalog_path, PathBuf::from);
        let chat_base_url = match lookup("BYTEMART_CHAT_BASE_URL") {
            Some(value) => validate_chat_base_url(&value, "BYTEMART_CHAT_BASE_URL")?,
            None => defaults.chat_base_url,
        };
        let restore_theme = match lookup("BYTEMART_RESTORE_THEME") {
            Some(value) => parse_bool(&value, "BYTEMART_RESTORE_THEME")?,
            None => defaults.restore_theme,
        };

        Ok(Self {
            host,
            port,
            base_url,
            catalog_path,
            chat_base_url,
            restore_theme,
            sentry_dsn: lookup("SENTRY_DSN").filter(|v| !v.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT").filter(|v| !v.is_empty()),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should be marked `Secure`.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a boolean flag (`true`/`false`/`1`/`0`, case-insensitive).
fn parse_bool(value: &str, var_name: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("expected true or false, got '{other}'"),
        )),
    }
}

/// The chat link must be an absolute http(s) URL without its own query string.
fn validate_chat_base_url(value: &str, var_name: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.query().is_some() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must not contain a query string".to_string(),
        ));
    }

    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.chat_base_url, "https://wa.me/256779315934");
        assert_eq!(
            config.catalog_path,
            PathBuf::from("crates/storefront/content/catalog.json")
        );
        assert!(!config.restore_theme);
        assert!(config.sentry_dsn.is_none());
        assert!(!config.is_secure());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("BYTEMART_HOST", "0.0.0.0"),
            ("BYTEMART_PORT", "8080"),
            ("BYTEMART_BASE_URL", "https://bytemart.example"),
            ("BYTEMART_RESTORE_THEME", "TRUE"),
            ("BYTEMART_CHAT_BASE_URL", "https://wa.me/15550001111/"),
            ("SENTRY_DSN", ""),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(config.restore_theme);
        assert!(config.is_secure());
        assert_eq!(config.chat_base_url, "https://wa.me/15550001111");
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("BYTEMART_PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(var, _) if var == "BYTEMART_PORT"));
    }

    #[test]
    fn test_invalid_restore_flag() {
        assert!(load(&[("BYTEMART_RESTORE_THEME", "sometimes")]).is_err());
    }

    #[test]
    fn test_chat_url_validation() {
        assert!(validate_chat_base_url("not a url", "X").is_err());
        assert!(validate_chat_base_url("ftp://wa.me/1", "X").is_err());
        assert!(validate_chat_base_url("https://wa.me/1?text=hi", "X").is_err());
        assert_eq!(
            validate_chat_base_url("https://wa.me/1", "X").unwrap(),
            "https://wa.me/1"
        );
    }
}
