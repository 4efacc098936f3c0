//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `WEATHER_API_KEY` - API key for the upstream weather provider
//! - `DASHBOARD_USERNAME` / `DASHBOARD_PASSWORD` - the single credential pair
//!   accepted by the login form
//! - `SESSION_SIGNING_SECRET` - HMAC key used to sign session cookies
//!
//! ## Optional Variables
//!
//! - `WEATHER_API_URL` - Base URL of the weather provider
//!   (default: `https://api.weatherapi.com`)
//! - `WEATHER_TIMEOUT_SECONDS` - Per-request timeout for weather fetches
//!   (default: 10)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - When `true`, rate limiting reads the client IP from
//!   `X-Forwarded-For` / `X-Real-IP` headers (default: `false`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL of the upstream weather API, without a trailing slash.
    pub weather_api_url: String,
    /// Static credential for the upstream weather API. Embedded configuration,
    /// not a secret-management concern.
    pub weather_api_key: String,
    /// Per-request timeout (seconds) for each weather fetch. A hung upstream
    /// request fails the affected city instead of wedging the whole batch.
    pub weather_timeout_seconds: u64,
    /// The single username/password pair accepted by the login form.
    /// Compared case-sensitively, exact match.
    pub dashboard_username: String,
    pub dashboard_password: String,
    /// HMAC signing secret for session cookies. Must be non-empty.
    pub session_signing_secret: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let weather_api_url = env::var("WEATHER_API_URL")
            .unwrap_or_else(|_| "https://api.weatherapi.com".to_string());
        let weather_api_url = weather_api_url.trim_end_matches('/').to_string();

        let weather_api_key =
            env::var("WEATHER_API_KEY").context("WEATHER_API_KEY must be set")?;

        let weather_timeout_seconds = env::var("WEATHER_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let dashboard_username =
            env::var("DASHBOARD_USERNAME").context("DASHBOARD_USERNAME must be set")?;
        let dashboard_password =
            env::var("DASHBOARD_PASSWORD").context("DASHBOARD_PASSWORD must be set")?;

        let session_signing_secret =
            env::var("SESSION_SIGNING_SECRET").context("SESSION_SIGNING_SECRET must be set")?;

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            weather_api_url,
            weather_api_key,
            weather_timeout_seconds,
            dashboard_username,
            dashboard_password,
            session_signing_secret,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `weather_api_url` is not an HTTP(S) URL
    /// - `weather_timeout_seconds` is out of range
    /// - a credential or the signing secret is empty
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Validate weather API URL format
        if !self.weather_api_url.starts_with("http://")
            && !self.weather_api_url.starts_with("https://")
        {
            anyhow::bail!(
                "WEATHER_API_URL must start with 'http://' or 'https://', got '{}'",
                self.weather_api_url
            );
        }

        if self.weather_api_key.is_empty() {
            anyhow::bail!("WEATHER_API_KEY must not be empty");
        }

        // Validate fetch timeout
        if self.weather_timeout_seconds == 0 || self.weather_timeout_seconds > 120 {
            anyhow::bail!(
                "WEATHER_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.weather_timeout_seconds
            );
        }

        if self.dashboard_username.is_empty() || self.dashboard_password.is_empty() {
            anyhow::bail!("DASHBOARD_USERNAME and DASHBOARD_PASSWORD must not be empty");
        }

        if self.session_signing_secret.is_empty() {
            anyhow::bail!("SESSION_SIGNING_SECRET must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Weather API: {}", self.weather_api_url);
        tracing::info!("  Weather API key: {}", mask_key(&self.weather_api_key));
        tracing::info!("  Weather fetch timeout: {}s", self.weather_timeout_seconds);
        tracing::info!("  Dashboard user: {}", self.dashboard_username);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks an API key for logging, keeping only the first four characters.
///
/// - `e82c036befd246d78c1115154231610` → `e82c***`
/// - keys shorter than five characters are fully masked
fn mask_key(key: &str) -> String {
    if key.chars().count() > 4 {
        let prefix: String = key.chars().take(4).collect();
        format!("{prefix}***")
    } else {
        "***".to_string()
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            weather_api_url: "https://api.weatherapi.com".to_string(),
            weather_api_key: "test-key".to_string(),
            weather_timeout_seconds: 10,
            dashboard_username: "admin".to_string(),
            dashboard_password: "secret".to_string(),
            session_signing_secret: "test-signing-secret".to_string(),
            behind_proxy: false,
        }
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("e82c036befd246d78c1115154231610"), "e82c***");
        assert_eq!(mask_key("ab"), "***");
    }

    #[test]
    fn test_mask_key_multibyte() {
        // Char boundaries, not byte offsets.
        assert_eq!(mask_key("käyttöavain"), "käyt***");
        assert_eq!(mask_key("ключ"), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Test invalid weather API URL
        config.weather_api_url = "ftp://weather.example".to_string();
        assert!(config.validate().is_err());

        config.weather_api_url = "https://api.weatherapi.com".to_string();

        // Test invalid timeout
        config.weather_timeout_seconds = 0;
        assert!(config.validate().is_err());
        config.weather_timeout_seconds = 600;
        assert!(config.validate().is_err());

        config.weather_timeout_seconds = 10;

        // Test empty credentials
        config.dashboard_password = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("WEATHER_API_KEY");
            env::set_var("DASHBOARD_USERNAME", "admin");
            env::set_var("DASHBOARD_PASSWORD", "secret");
            env::set_var("SESSION_SIGNING_SECRET", "secret");
        }

        assert!(Config::from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("DASHBOARD_USERNAME");
            env::remove_var("DASHBOARD_PASSWORD");
            env::remove_var("SESSION_SIGNING_SECRET");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_and_url_trimming() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("WEATHER_API_KEY", "k");
            env::set_var("DASHBOARD_USERNAME", "admin");
            env::set_var("DASHBOARD_PASSWORD", "secret");
            env::set_var("SESSION_SIGNING_SECRET", "secret");
            env::set_var("WEATHER_API_URL", "https://weather.test/");
            env::remove_var("LISTEN");
            env::remove_var("WEATHER_TIMEOUT_SECONDS");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.weather_api_url, "https://weather.test");
        assert_eq!(config.weather_timeout_seconds, 10);
        assert!(!config.behind_proxy);

        // Cleanup
        unsafe {
            env::remove_var("WEATHER_API_KEY");
            env::remove_var("DASHBOARD_USERNAME");
            env::remove_var("DASHBOARD_PASSWORD");
            env::remove_var("SESSION_SIGNING_SECRET");
            env::remove_var("WEATHER_API_URL");
        }
    }
}
