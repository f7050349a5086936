// =============================================================================
// CONFIGURATION MODULE
// =============================================================================
// This module handles loading configuration from environment variables and
// parsing them into a strongly-typed Config struct, so configuration errors
// surface at startup rather than mid-request.
// =============================================================================

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

// -----------------------------------------------------------------------------
// CONFIG STRUCT
// -----------------------------------------------------------------------------
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 8003)
    pub port: u16,

    /// Simulated network latency applied to every catalog operation, in
    /// milliseconds. A stand-in for a future real backend; tests set it to 0.
    pub catalog_latency_ms: u64,

    /// Simulated latency of the mocked login/registration flow, in
    /// milliseconds.
    pub auth_latency_ms: u64,

    /// Prefix for product image paths. Lets production serve assets from a
    /// different root than development. Empty means paths are used as-is.
    pub asset_base_path: String,
}

impl Config {
    // -------------------------------------------------------------------------
    // LOAD CONFIGURATION FROM ENVIRONMENT
    // -------------------------------------------------------------------------
    /// Creates a Config by reading environment variables.
    ///
    /// Every variable has a default; parsing failures (non-numeric port or
    /// latency) are reported with the variable name.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8003".to_string())
                .parse()
                .context("Failed to parse PORT as a number")?,

            catalog_latency_ms: env::var("CATALOG_LATENCY_MS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .context("Failed to parse CATALOG_LATENCY_MS as a number")?,

            auth_latency_ms: env::var("AUTH_LATENCY_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .context("Failed to parse AUTH_LATENCY_MS as a number")?,

            asset_base_path: env::var("ASSET_BASE_PATH").unwrap_or_default(),
        })
    }

    /// Catalog latency as a Duration, ready for `tokio::time::sleep`.
    pub fn catalog_latency(&self) -> Duration {
        Duration::from_millis(self.catalog_latency_ms)
    }

    /// Auth latency as a Duration.
    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_config_from_env() {
        env::set_var("PORT", "9100");
        env::set_var("CATALOG_LATENCY_MS", "0");
        env::set_var("AUTH_LATENCY_MS", "0");
        env::set_var("ASSET_BASE_PATH", "https://cdn.example.com");

        let config = Config::from_env().expect("Failed to load config");

        assert_eq!(config.port, 9100);
        assert_eq!(config.catalog_latency(), Duration::ZERO);
        assert_eq!(config.auth_latency(), Duration::ZERO);
        assert_eq!(config.asset_base_path, "https://cdn.example.com");

        env::remove_var("PORT");
        env::remove_var("CATALOG_LATENCY_MS");
        env::remove_var("AUTH_LATENCY_MS");
        env::remove_var("ASSET_BASE_PATH");
    }
}
