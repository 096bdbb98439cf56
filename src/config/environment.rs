// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads the Steam API key, server port and rate-limit settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration
//!
//! The service is configured entirely from environment variables. The only
//! required value is `STEAM_API_KEY`; its absence is a fatal configuration
//! error reported before any pipeline work begins.

use std::env;
use std::time::Duration;

use crate::constants::{env_config, limits};
use crate::errors::{AppError, AppResult};
use crate::gateway::SteamConfig;

/// Rate-limit gate configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Requests allowed per caller per window
    pub max_requests: u32,
    /// Window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: limits::DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            window: Duration::from_secs(limits::DEFAULT_RATE_LIMIT_WINDOW_SECS),
        }
    }
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Steam upstream configuration, including the API key
    pub steam: SteamConfig,
    /// Rate-limit gate configuration
    pub rate_limit: RateLimitConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `STEAM_API_KEY` is missing or empty.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var("STEAM_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::config("STEAM_API_KEY must be set"))?;

        let max_requests = env::var("RATE_LIMIT_MAX_REQUESTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(limits::DEFAULT_RATE_LIMIT_MAX_REQUESTS);

        let window_secs = env::var("RATE_LIMIT_WINDOW_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(limits::DEFAULT_RATE_LIMIT_WINDOW_SECS);

        Ok(Self {
            http_port: env_config::http_port(),
            steam: SteamConfig::new(api_key),
            rate_limit: RateLimitConfig {
                max_requests,
                window: Duration::from_secs(window_secs),
            },
        })
    }

    /// One-line startup summary, with the API key redacted
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} steam_api={} store_api={} rate_limit={}/{}s",
            self.http_port,
            self.steam.api_base,
            self.steam.store_base,
            self.rate_limit.max_requests,
            self.rate_limit.window.as_secs(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_missing_api_key_is_a_config_error() {
        env::remove_var("STEAM_API_KEY");
        let error = ServerConfig::from_env().unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ConfigError);
    }

    #[test]
    #[serial]
    fn test_empty_api_key_is_a_config_error() {
        env::set_var("STEAM_API_KEY", "");
        assert!(ServerConfig::from_env().is_err());
        env::remove_var("STEAM_API_KEY");
    }

    #[test]
    #[serial]
    fn test_defaults_applied() {
        env::set_var("STEAM_API_KEY", "test-key");
        env::remove_var("RATE_LIMIT_MAX_REQUESTS");
        env::remove_var("RATE_LIMIT_WINDOW_SECS");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.rate_limit.max_requests, 8);
        assert_eq!(config.rate_limit.window, Duration::from_secs(60));
        assert!(!config.summary().contains("test-key"));

        env::remove_var("STEAM_API_KEY");
    }
}
