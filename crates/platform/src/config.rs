//! Platform configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to defaults:
//! - `LEARNHUB_DATA_DIR` - Data directory for persisted state
//!   (default: `./learnhub-data`)
//! - `LEARNHUB_SESSION_TTL_DAYS` - Session lifetime in days (default: 7)
//! - `LEARNHUB_MOCK_LATENCY_MS` - Simulated network latency applied to
//!   register/login calls, in milliseconds (default: 0)

use std::path::PathBuf;
use std::time::Duration as StdDuration;

use chrono::Duration;
use thiserror::Error;

/// Default session lifetime in days.
const DEFAULT_SESSION_TTL_DAYS: i64 = 7;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Platform configuration.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Directory holding the persisted JSON slots.
    pub data_dir: PathBuf,
    /// How long an issued session stays valid.
    pub session_ttl: Duration,
    /// Simulated latency for register/login calls.
    pub mock_latency: StdDuration,
}

impl PlatformConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default(
            "LEARNHUB_DATA_DIR",
            "./learnhub-data",
        ));

        let ttl_days = get_env_or_default(
            "LEARNHUB_SESSION_TTL_DAYS",
            &DEFAULT_SESSION_TTL_DAYS.to_string(),
        )
        .parse::<i64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("LEARNHUB_SESSION_TTL_DAYS".to_string(), e.to_string())
        })?;
        if ttl_days <= 0 {
            return Err(ConfigError::InvalidEnvVar(
                "LEARNHUB_SESSION_TTL_DAYS".to_string(),
                "must be a positive number of days".to_string(),
            ));
        }

        let latency_ms = get_env_or_default("LEARNHUB_MOCK_LATENCY_MS", "0")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("LEARNHUB_MOCK_LATENCY_MS".to_string(), e.to_string())
            })?;

        Ok(Self {
            data_dir,
            session_ttl: Duration::days(ttl_days),
            mock_latency: StdDuration::from_millis(latency_ms),
        })
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./learnhub-data"),
            session_ttl: Duration::days(DEFAULT_SESSION_TTL_DAYS),
            mock_latency: StdDuration::ZERO,
        }
    }
}

/// Get an environment variable with a fallback default.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
