//! API configuration

use serde::Deserialize;

use core_kernel::Currency;
use domain_ledger::AccountRoleMap;

/// API configuration
///
/// Loaded from `API_`-prefixed environment variables; nested account role
/// overrides use a double underscore, e.g. `API_ACCOUNTS__CASH=1000`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database URL; the in-memory store is used when absent
    #[serde(default)]
    pub database_url: Option<String>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Ledger currency
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Account role overrides
    #[serde(default)]
    pub accounts: AccountRoleMap,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_currency() -> Currency {
    Currency::EUR
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            log_level: default_log_level(),
            currency: default_currency(),
            accounts: AccountRoleMap::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("API")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
