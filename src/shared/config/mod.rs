//! Application configuration module
//!
//! Configuration comes from environment variables (after an optional `.env`
//! file has been loaded by the binary). `DATABASE_URL` and `JWT_SECRET` are
//! required; everything else has a default.

use std::time::Duration;

use thiserror::Error;

/// Port used when `SERVER_PORT` is unset
pub const DEFAULT_PORT: u16 = 8787;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection string for the PostgreSQL store
    pub database_url: String,
    /// Shared HMAC secret for signing and verifying tokens
    pub jwt_secret: String,
    /// TCP port the HTTP server binds to
    pub port: u16,
    /// bcrypt work factor for stored passwords
    pub bcrypt_cost: u32,
    /// Lifetime of issued tokens; `None` issues tokens without `exp`
    pub token_ttl: Option<Duration>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT", port))?;
            builder = builder.port(port);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            let cost = cost
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue("BCRYPT_COST", cost))?;
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(ttl) = lookup("JWT_TTL_SECS") {
            let secs = ttl
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue("JWT_TTL_SECS", ttl))?;
            builder = builder.token_ttl(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue(
                "BCRYPT_COST",
                self.bcrypt_cost.to_string(),
            ));
        }
        if self.token_ttl == Some(Duration::ZERO) {
            return Err(ConfigError::InvalidValue("JWT_TTL_SECS", "0".to_string()));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    port: Option<u16>,
    bcrypt_cost: Option<u32>,
    token_ttl: Option<Duration>,
}

impl AppConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self
                .database_url
                .ok_or(ConfigError::MissingValue("DATABASE_URL"))?,
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            port: self.port.unwrap_or(DEFAULT_PORT),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
            token_ttl: self.token_ttl,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {0}: {1:?}")]
    InvalidValue(&'static str, String),
}
