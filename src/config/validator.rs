//! Settings validation.

use crate::config::AppConfig;
use crate::error::ConfigError;
use std::str::FromStr;

pub(crate) fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: crate::config::DB_MAX_CONNECTIONS,
            value: "0".into(),
        });
    }
    if config.acquire_timeout.is_zero() {
        return Err(ConfigError::Invalid {
            key: crate::config::DB_ACQUIRE_TIMEOUT_SECS,
            value: "0".into(),
        });
    }
    if !config.database_url.starts_with("postgres://") && !config.database_url.starts_with("postgresql://") {
        return Err(ConfigError::Validation(format!(
            "{} must be a postgres:// url",
            crate::config::DATABASE_URL
        )));
    }
    Ok(())
}
