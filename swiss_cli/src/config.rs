//! CLI configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use swiss_tournament::db::{DatabaseConfig, DatabaseConfigError};

/// Default connection string when neither `--db-url` nor `DATABASE_URL` is set
pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres@localhost/tournament";

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Plain,
    /// JSON for scripting
    Json,
}

/// Complete CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Database configuration
    pub database: DatabaseConfig,
    /// Output format
    pub output: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// Database settings come from [`DatabaseConfig::from_env_or`], so the
    /// binary honours the same variables as the library.
    ///
    /// # Arguments
    ///
    /// * `database_url_override` - Optional database URL override (from CLI args)
    /// * `json` - Whether `--json` was passed
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable cannot be parsed
    pub fn from_env(
        database_url_override: Option<String>,
        json: bool,
    ) -> Result<Self, ConfigError> {
        let database = DatabaseConfig::from_env_or(database_url_override, DEFAULT_DATABASE_URL)?;

        let output = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        };

        Ok(CliConfig { database, output })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.database.database_url;
        if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
            return Err(ConfigError::Invalid {
                var: "DATABASE_URL".to_string(),
                reason: "Must be a postgres:// or postgresql:// URL".to_string(),
            });
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Invalid {
                var: "DB_MIN_CONNECTIONS".to_string(),
                reason: format!(
                    "Must not exceed max connections ({})",
                    self.database.max_connections
                ),
            });
        }

        if self.database.query_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_QUERY_TIMEOUT".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error(transparent)]
    Database(#[from] DatabaseConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            database: DatabaseConfig {
                database_url: "postgres://localhost/tournament".to_string(),
                max_connections: 10,
                min_connections: 1,
                connection_timeout_secs: 10,
                idle_timeout_secs: 600,
                max_lifetime_secs: 1800,
                query_timeout_secs: 5,
            },
            output: OutputFormat::Plain,
        }
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "DB_MAX_CONNECTIONS".to_string(),
            reason: "Must be greater than 0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("DB_MAX_CONNECTIONS"));
        assert!(msg.contains("greater than 0"));
    }

    #[test]
    fn test_url_override_wins() {
        let config = CliConfig::from_env(Some("postgres://override/db".to_string()), true).unwrap();
        assert_eq!(config.database.database_url, "postgres://override/db");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_database_settings_match_library() {
        let url = "postgres://override/db".to_string();
        let cli = CliConfig::from_env(Some(url.clone()), false).unwrap();
        let lib = DatabaseConfig::from_env_or(Some(url), DEFAULT_DATABASE_URL).unwrap();

        assert_eq!(cli.database, lib);
        assert_eq!(cli.output, OutputFormat::Plain);
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_url() {
        let mut config = config();
        config.database.database_url = "mysql://localhost/tournament".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "DATABASE_URL"));
    }

    #[test]
    fn test_config_validation_min_above_max() {
        let mut config = config();
        config.database.min_connections = 5;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "DB_MIN_CONNECTIONS"));
    }

    #[test]
    fn test_config_validation_zero_query_timeout() {
        let mut config = config();
        config.database.query_timeout_secs = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "DB_QUERY_TIMEOUT"));
    }
}
