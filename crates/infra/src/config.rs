//! Service configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use ticketing_catalog::SWITCH_TO_ONLINE_TOPIC;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Runtime settings of the ticket service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    /// Postgres ticket store when set; in-memory store otherwise.
    pub database_url: Option<String>,
    /// Redis pub/sub for notifications when set; in-memory publisher otherwise.
    pub redis_url: Option<String>,
    /// JSON array of ticket documents to seed the in-memory store with.
    pub seed_path: Option<PathBuf>,
    pub switch_topic: String,
    /// Deadline applied to the store calls of one request.
    pub request_timeout: Duration,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDR",
                message: e.to_string(),
            })?;

        let request_timeout_ms = match get("REQUEST_TIMEOUT_MS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_MS",
                message: e.to_string(),
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };
        if request_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_MS",
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            database_url: get("DATABASE_URL"),
            redis_url: get("REDIS_URL"),
            seed_path: get("TICKETS_SEED_PATH").map(PathBuf::from),
            switch_topic: get("SWITCH_TOPIC").unwrap_or_else(|| SWITCH_TO_ONLINE_TOPIC.to_string()),
            request_timeout: Duration::from_millis(request_timeout_ms),
        })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            database_url: None,
            redis_url: None,
            seed_path: None,
            switch_topic: SWITCH_TO_ONLINE_TOPIC.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}
