//! Load settings from the process environment (optionally seeded from `.env`).

use crate::config::types::*;
use crate::config::validator::{parse_value, validate};
use crate::error::ConfigError;
use std::time::Duration;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const BIND_ADDR: &str = "BIND_ADDR";
pub const DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
pub const DB_ACQUIRE_TIMEOUT_SECS: &str = "DB_ACQUIRE_TIMEOUT_SECS";

impl AppConfig {
    /// Resolve settings from env vars, falling back to the defaults of a local install.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get(DATABASE_URL).unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = match get(BIND_ADDR) {
            Some(v) => parse_value(BIND_ADDR, &v)?,
            None => parse_value(BIND_ADDR, DEFAULT_BIND_ADDR)?,
        };
        let max_connections = match get(DB_MAX_CONNECTIONS) {
            Some(v) => parse_value(DB_MAX_CONNECTIONS, &v)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let acquire_timeout_secs: u64 = match get(DB_ACQUIRE_TIMEOUT_SECS) {
            Some(v) => parse_value(DB_ACQUIRE_TIMEOUT_SECS, &v)?,
            None => DEFAULT_ACQUIRE_TIMEOUT_SECS,
        };

        let config = AppConfig {
            database_url,
            bind_addr,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        };
        validate(&config)?;
        Ok(config)
    }
}
