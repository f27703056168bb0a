//! Database configuration module.
//!
//! Provides configuration structures for database connection management.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub database_url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout_secs: u64,

    /// Maximum connection lifetime in seconds
    pub max_lifetime_secs: u64,

    /// Per-statement timeout in seconds
    pub query_timeout_secs: u64,
}

/// Errors raised while reading database configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatabaseConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: String, value: String },
}

impl DatabaseConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `DATABASE_URL`: PostgreSQL connection string (required)
    /// - `DB_MAX_CONNECTIONS`: Maximum pool size (default: 10)
    /// - `DB_MIN_CONNECTIONS`: Minimum pool size (default: 1)
    /// - `DB_CONNECTION_TIMEOUT`: Connection timeout in seconds (default: 10)
    /// - `DB_IDLE_TIMEOUT`: Idle timeout in seconds (default: 600)
    /// - `DB_MAX_LIFETIME`: Max lifetime in seconds (default: 1800)
    /// - `DB_QUERY_TIMEOUT`: Per-statement timeout in seconds (default: 5)
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable if `DATABASE_URL` is missing or
    /// any numeric variable fails to parse
    pub fn from_env() -> Result<Self, DatabaseConfigError> {
        Self::from_lookup(None, None, |var| env::var(var).ok())
    }

    /// Create configuration from environment variables with an explicit URL
    ///
    /// The connection string is taken from `url_override`, then
    /// `DATABASE_URL`, then `fallback_url`. Pool settings are read from the
    /// same variables as [`DatabaseConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable if any numeric variable fails to parse
    pub fn from_env_or(
        url_override: Option<String>,
        fallback_url: &str,
    ) -> Result<Self, DatabaseConfigError> {
        Self::from_lookup(url_override, Some(fallback_url), |var| env::var(var).ok())
    }

    fn from_lookup<F>(
        url_override: Option<String>,
        fallback_url: Option<&str>,
        lookup: F,
    ) -> Result<Self, DatabaseConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = url_override
            .or_else(|| lookup("DATABASE_URL"))
            .or_else(|| fallback_url.map(str::to_string))
            .ok_or_else(|| DatabaseConfigError::Missing("DATABASE_URL".to_string()))?;

        Ok(Self {
            database_url,
            max_connections: lookup_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            min_connections: lookup_or(&lookup, "DB_MIN_CONNECTIONS", 1)?,
            connection_timeout_secs: lookup_or(&lookup, "DB_CONNECTION_TIMEOUT", 10)?,
            idle_timeout_secs: lookup_or(&lookup, "DB_IDLE_TIMEOUT", 600)?,
            max_lifetime_secs: lookup_or(&lookup, "DB_MAX_LIFETIME", 1800)?,
            query_timeout_secs: lookup_or(&lookup, "DB_QUERY_TIMEOUT", 5)?,
        })
    }

    /// Create a default configuration for development
    ///
    /// Uses `postgres://postgres@localhost/tournament` as the database URL
    pub fn development() -> Self {
        Self {
            database_url: "postgres://postgres@localhost/tournament".to_string(),
            max_connections: 10,
            min_connections: 1,
            connection_timeout_secs: 10,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
            query_timeout_secs: 5,
        }
    }

    /// Per-statement timeout as a `Duration`
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::development()
    }
}

fn lookup_or<T, F>(lookup: &F, var: &str, default: T) -> Result<T, DatabaseConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) => value.parse().map_err(|_| DatabaseConfigError::Invalid {
            var: var.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
