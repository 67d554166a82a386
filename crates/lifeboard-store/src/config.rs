//! Store client configuration.
//!
//! The hosted store is addressed by exactly two values: an endpoint URL and
//! an access key. Both come from the environment (a `.env` file is honored).
//! The client handle built from this config is created once at startup and
//! shared read-only for every call.

use std::time::Duration;

use lifeboard_core::{Error, Result};

/// Environment variable holding the store endpoint URL.
pub const ENV_STORE_URL: &str = "LIFEBOARD_STORE_URL";

/// Environment variable holding the store access key.
pub const ENV_STORE_KEY: &str = "LIFEBOARD_STORE_KEY";

/// Environment variable overriding the request timeout (seconds).
pub const ENV_STORE_TIMEOUT_SECS: &str = "LIFEBOARD_STORE_TIMEOUT_SECS";

/// Default per-request timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the hosted record store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base endpoint URL, e.g. `https://xyzcompany.example.co`.
    pub base_url: String,
    /// Access key sent as `apikey` and bearer token on every request.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from the environment.
    ///
    /// Reads `LIFEBOARD_STORE_URL` and `LIFEBOARD_STORE_KEY`; both are
    /// required. `LIFEBOARD_STORE_TIMEOUT_SECS` optionally overrides the
    /// default timeout.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var(ENV_STORE_URL)
            .map_err(|_| Error::Config(format!("{} is not set", ENV_STORE_URL)))?;
        let api_key = std::env::var(ENV_STORE_KEY)
            .map_err(|_| Error::Config(format!("{} is not set", ENV_STORE_KEY)))?;

        let timeout_secs = std::env::var(ENV_STORE_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self::new(base_url, api_key).timeout(Duration::from_secs(timeout_secs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_timeout() {
        let config = StoreConfig::new("https://store.example", "anon-key");
        assert_eq!(config.base_url, "https://store.example");
        assert_eq!(config.api_key, "anon-key");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_timeout_builder() {
        let config =
            StoreConfig::new("https://store.example", "k").timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    // Env manipulation is process-wide, so both cases run in one test to
    // avoid racing a parallel test runner.
    #[test]
    fn test_from_env_round_trip_and_missing() {
        std::env::set_var(ENV_STORE_URL, "https://env.example");
        std::env::set_var(ENV_STORE_KEY, "env-key");
        std::env::set_var(ENV_STORE_TIMEOUT_SECS, "7");

        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://env.example");
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.timeout, Duration::from_secs(7));

        std::env::remove_var(ENV_STORE_KEY);
        let err = StoreConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_STORE_KEY));

        std::env::remove_var(ENV_STORE_URL);
        std::env::remove_var(ENV_STORE_TIMEOUT_SECS);
    }
}
