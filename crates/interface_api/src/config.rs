//! API configuration

use std::path::PathBuf;

use serde::Deserialize;

use core_kernel::{CoreError, Timezone};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Location of the wallet document
    pub data_path: PathBuf,
    /// IANA zone that decides what "today" is
    pub timezone: String,
    /// Log level
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_path: PathBuf::from("iwallet.json"),
            timezone: "America/Mexico_City".to_string(),
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `IWALLET_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("data_path", defaults.data_path.to_string_lossy().into_owned())?
            .set_default("timezone", defaults.timezone)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?
            .add_source(config::Environment::with_prefix("IWALLET").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolves the configured time zone
    pub fn timezone(&self) -> Result<Timezone, CoreError> {
        Timezone::parse(&self.timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(config.timezone().is_ok());
    }

    #[test]
    fn test_unknown_timezone_rejected() {
        let config = ApiConfig {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.timezone().is_err());
    }
}
