//! # Application Configuration
//!
//! Configuration loaded from environment variables, optionally seeded from a
//! `.env` file in the working directory.
//!
//! The config is a plain value: build it once at startup and hand it (or the
//! pieces it holds) to whatever needs it.
//!
//! ```rust,no_run
//! use lib_core::Config;
//!
//! let config = Config::from_env()?;
//! let lifetime = config.jwt_lifetime();
//! # Ok::<(), lib_core::AppError>(())
//! ```

use chrono::Duration;
use lib_utils::envs::{self, get_env, parse_env};
use tracing::{debug, info};

use crate::error::{AppError, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JWT_EXPIRATION_SECS: i64 = 3600;

/// Platform name that enables development-only endpoints.
const DEV_PLATFORM: &str = "dev";

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Database connection URL (`DB_URL`)
    pub database_url: String,

    /// HTTP listen port (`PORT`, default 8080)
    pub port: u16,

    /// Deployment platform (`PLATFORM`); `dev` unlocks admin reset
    pub platform: String,

    /// Shared HS256 secret for signing and verifying access tokens (`JWT_SECRET`)
    pub jwt_secret: String,

    /// Default access token lifetime in seconds (`JWT_EXPIRATION_SECS`, default 3600)
    pub jwt_expiration_secs: i64,
}

impl Config {
    /// Load `.env` if present, then read configuration from the environment.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(e) => return Err(AppError::Config(format!("Failed to read .env: {e}"))),
        }

        let config = Self::from_lookup(|name| get_env(name).ok())?;
        info!(
            "Configuration loaded (port: {}, platform: {:?})",
            config.port, config.platform
        );
        Ok(config)
    }

    /// Build configuration from an arbitrary variable lookup and validate it.
    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DB_URL").unwrap_or_default();

        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(raw) => parse_env("PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        let platform = lookup("PLATFORM").unwrap_or_default();

        let jwt_secret = lookup("JWT_SECRET").ok_or(envs::Error::MissingEnv("JWT_SECRET"))?;

        let jwt_expiration_secs = match lookup("JWT_EXPIRATION_SECS").filter(|v| !v.is_empty()) {
            Some(raw) => parse_env("JWT_EXPIRATION_SECS", &raw)?,
            None => DEFAULT_JWT_EXPIRATION_SECS,
        };

        let config = Self {
            database_url,
            port,
            platform,
            jwt_secret,
            jwt_expiration_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.is_empty() {
            return Err(AppError::Config("JWT_SECRET must not be empty".to_string()));
        }

        if self.jwt_expiration_secs <= 0 {
            return Err(AppError::Config(
                "JWT_EXPIRATION_SECS must be a positive number of seconds".to_string(),
            ));
        }

        Ok(())
    }

    /// Default lifetime for newly issued access tokens.
    pub fn jwt_lifetime(&self) -> Duration {
        Duration::seconds(self.jwt_expiration_secs)
    }

    /// Whether development-only endpoints are enabled.
    pub fn is_dev(&self) -> bool {
        self.platform == DEV_PLATFORM
    }
}

// Keeps the signing secret out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("port", &self.port)
            .field("platform", &self.platform)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiration_secs", &self.jwt_expiration_secs)
            .finish()
    }
}
