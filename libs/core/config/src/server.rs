use crate::{ConfigError, FromEnv};
use std::time::Duration;

/// Listen address used when `APP_URL` is unset or empty.
pub const DEFAULT_URL: &str = "0.0.0.0:80";
/// Maximum idle time between request body frames.
pub const READ_TIMEOUT: Duration = Duration::from_secs(4);
/// Maximum time allowed to produce a response.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub url: String,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
}

impl ServerConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> &str {
        &self.url
    }
}

impl FromEnv for ServerConfig {
    /// Reads `APP_URL`, falling back to [`DEFAULT_URL`] when unset or blank.
    fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("APP_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_URL.to_string());

        Ok(Self::new(url))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            read_timeout: READ_TIMEOUT,
            write_timeout: WRITE_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_env_with_defaults() {
        temp_env::with_var_unset("APP_URL", || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "0.0.0.0:80");
            assert_eq!(config.read_timeout, Duration::from_secs(4));
            assert_eq!(config.write_timeout, Duration::from_secs(10));
        });
    }

    #[test]
    fn test_server_config_from_env_with_custom_url() {
        temp_env::with_var("APP_URL", Some("127.0.0.1:3000"), || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "127.0.0.1:3000");
        });
    }

    #[test]
    fn test_server_config_blank_url_uses_default() {
        temp_env::with_var("APP_URL", Some("  "), || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), DEFAULT_URL);
        });
    }

    #[test]
    fn test_server_config_new_keeps_fixed_timeouts() {
        let config = ServerConfig::new("localhost:8080");
        assert_eq!(config.address(), "localhost:8080");
        assert_eq!(config.read_timeout, READ_TIMEOUT);
        assert_eq!(config.write_timeout, WRITE_TIMEOUT);
    }
}
