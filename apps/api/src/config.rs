//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults suitable for local development.

use std::env;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port.
    pub http_port: u16,

    /// Path to the SQLite database file.
    pub database_path: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable        | Default        |
    /// |-----------------|----------------|
    /// | `HTTP_PORT`     | `3000`         |
    /// | `DATABASE_PATH` | `./apotek.db`  |
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "./apotek.db".to_string()),
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_unset() {
        // Only meaningful when the variables are not exported in the test
        // environment; the parse path is what matters here.
        if env::var("HTTP_PORT").is_err() && env::var("DATABASE_PATH").is_err() {
            let config = ApiConfig::load().unwrap();
            assert_eq!(config.http_port, 3000);
            assert_eq!(config.database_path, "./apotek.db");
        }
    }
}
