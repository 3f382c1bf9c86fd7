//! Configuration management for the contact form demo.
//!
//! This module handles loading and validating configuration from environment
//! variables. All variables are optional; the defaults run the mock endpoint
//! and the form client against localhost.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the mock endpoint and the form client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the mock endpoint binds to (default: "127.0.0.1:8080")
    pub bind_addr: String,

    /// Base URL the form client submits to (default: derived from `bind_addr`)
    pub endpoint_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DEMO_BIND_ADDR`: Listen address for the mock endpoint (default: "127.0.0.1:8080")
    /// - `DEMO_ENDPOINT_URL`: Base URL the form client targets (default: "http://<bind_addr>")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let bind_addr =
            env::var("DEMO_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let endpoint_url =
            env::var("DEMO_ENDPOINT_URL").unwrap_or_else(|_| format!("http://{}", bind_addr));

        // Validate endpoint URL format
        if !endpoint_url.starts_with("http://") && !endpoint_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "DEMO_ENDPOINT_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            bind_addr,
            endpoint_url,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "127.0.0.1:8080".to_string(),
            endpoint_url: "http://127.0.0.1:8080".to_string(),
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.endpoint_url, "http://127.0.0.1:8080");
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("DEMO_BIND_ADDR");
        env::remove_var("DEMO_ENDPOINT_URL");
        env::remove_var("REQUEST_TIMEOUT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.endpoint_url, "http://127.0.0.1:8080");
        assert_eq!(config.request_timeout, 10);
    }

    #[test]
    #[serial]
    fn test_config_endpoint_url_follows_bind_addr() {
        let mut guard = EnvGuard::new();
        guard.set("DEMO_BIND_ADDR", "127.0.0.1:9999");

        let config = Config::from_env().unwrap();
        assert_eq!(config.endpoint_url, "http://127.0.0.1:9999");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("DEMO_ENDPOINT_URL", "not-a-url");

        let result = Config::from_env();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        let result = Config::parse_env_u64("TEST_U64", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u64("NONEXISTENT", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64_INVALID", "not-a-number");

        let result = Config::parse_env_u64("TEST_U64_INVALID", 10);
        assert!(result.is_err());
    }
}
