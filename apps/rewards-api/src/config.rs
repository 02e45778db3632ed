//! Rewards API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Host and port are the only knobs; everything else about the
//! service is fixed behavior.

use std::env;

/// Default HTTP port for the rewards API.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Rewards API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP server port.
    pub port: u16,

    /// Bind address (default: 0.0.0.0).
    pub bind_addr: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let port = match env::var("REWARDS_PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REWARDS_PORT".to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        let bind_addr =
            env::var("REWARDS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(ApiConfig { port, bind_addr })
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            port: DEFAULT_PORT,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
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
    fn test_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_addr, "0.0.0.0");
    }

    #[test]
    fn test_config_bind_address() {
        let config = ApiConfig {
            port: 9000,
            bind_addr: "127.0.0.1".to_string(),
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }
}
