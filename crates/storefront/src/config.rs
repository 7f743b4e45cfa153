//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_CATALOG_PATH` - Shoe catalog JSON file
//!   (default: crates/storefront/content/shoes.json)
//! - `STOREFRONT_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//! - `STOREFRONT_NEW_RELEASE_DAYS` - Days a shoe stays "Just released!" (default: 30)
//! - `STOREFRONT_CURRENCY` - ISO 4217 code used for prices (default: USD)
//! - `STOREFRONT_PROMO_MESSAGE` - Text in the super header
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use sole_and_ankle_core::{CurrencyCode, RecencyWindow};
use thiserror::Error;

const DEFAULT_PROMO_MESSAGE: &str = "Free shipping on domestic orders over $75!";

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
    /// Path of the shoe catalog JSON file
    pub catalog_path: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// How long a shoe is shown as a new release
    pub new_release_window: RecencyWindow,
    /// Currency all catalog prices are expressed in
    pub currency: CurrencyCode,
    /// Promotional message in the super header
    pub promo_message: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            catalog_path: PathBuf::from("crates/storefront/content/shoes.json"),
            static_dir: PathBuf::from("crates/storefront/static"),
            new_release_window: RecencyWindow::default(),
            currency: CurrencyCode::default(),
            promo_message: DEFAULT_PROMO_MESSAGE.to_string(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
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
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = parse_or(&lookup, "STOREFRONT_HOST", defaults.host)?;
        let port = parse_or(&lookup, "STOREFRONT_PORT", defaults.port)?;
        let catalog_path = lookup("STOREFRONT_CATALOG_PATH")
            .map_or(defaults.catalog_path, PathBuf::from);
        let static_dir =
            lookup("STOREFRONT_STATIC_DIR").map_or(defaults.static_dir, PathBuf::from);

        let new_release_days: u32 = parse_or(
            &lookup,
            "STOREFRONT_NEW_RELEASE_DAYS",
            defaults.new_release_window.days(),
        )?;
        if new_release_days == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_NEW_RELEASE_DAYS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let currency = parse_or(&lookup, "STOREFRONT_CURRENCY", defaults.currency)?;
        let promo_message = lookup("STOREFRONT_PROMO_MESSAGE").unwrap_or(defaults.promo_message);

        let sentry_sample_rate =
            parse_or(&lookup, "SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?;
        let sentry_traces_sample_rate = parse_or(
            &lookup,
            "SENTRY_TRACES_SAMPLE_RATE",
            defaults.sentry_traces_sample_rate,
        )?;

        Ok(Self {
            host,
            port,
            catalog_path,
            static_dir,
            new_release_window: RecencyWindow::from_days(new_release_days),
            currency,
            promo_message,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if set, otherwise use `default`.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}
