//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Server secret mixed into actor identity hashes.
    pub identity_secret: String,
    /// Budget for one asynchronous moderation review.
    pub review_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `API_ADDR` | Server bind address | `127.0.0.1:8790` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:nebula.db?mode=rwc` |
    /// | `IDENTITY_SECRET` | Secret for actor identity hashing | (required) |
    /// | `REVIEW_TIMEOUT_SECS` | Moderation review budget in seconds | `10` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("API_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8790".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:nebula.db?mode=rwc".to_string());

        let identity_secret =
            env::var("IDENTITY_SECRET").map_err(|_| ConfigError::MissingIdentitySecret)?;
        if identity_secret.is_empty() {
            return Err(ConfigError::MissingIdentitySecret);
        }

        let review_timeout_secs = env::var("REVIEW_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            addr,
            database_url,
            identity_secret,
            review_timeout: Duration::from_secs(review_timeout_secs),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API_ADDR format")]
    InvalidAddr,

    #[error("IDENTITY_SECRET environment variable is required")]
    MissingIdentitySecret,
}
