use dotenv::dotenv;
use std::{env, time::Duration};
use thiserror::Error;

pub const DEFAULT_PRICES_BASE_URL: &str = "https://api.g.alchemy.com/prices/v1";
pub const DEFAULT_ETHERSCAN_BASE_URL: &str = "https://api.etherscan.io/v2/api";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// Endpoints and credentials for the three upstream APIs.
///
/// Credentials stay optional here; each query asks for the one it needs and
/// fails on its own when it is absent.
#[derive(Debug, Clone)]
pub struct Config {
    pub alchemy_rpc_url: Option<String>,
    pub alchemy_prices_api_key: Option<String>,
    pub alchemy_prices_base_url: String,
    pub etherscan_api_key: Option<String>,
    pub etherscan_base_url: String,
    pub http_timeout: Duration,
}

impl Config {
    pub fn init() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let http_timeout = non_empty("HTTP_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Self {
            alchemy_rpc_url: non_empty("ALCHEMY_RPC_URL"),
            alchemy_prices_api_key: non_empty("ALCHEMY_PRICES_API_KEY"),
            alchemy_prices_base_url: non_empty("ALCHEMY_PRICES_BASE_URL")
                .unwrap_or_else(|| DEFAULT_PRICES_BASE_URL.to_string()),
            etherscan_api_key: non_empty("ETHERSCAN_API_KEY"),
            etherscan_base_url: non_empty("ETHERSCAN_BASE_URL")
                .unwrap_or_else(|| DEFAULT_ETHERSCAN_BASE_URL.to_string()),
            http_timeout: Duration::from_secs(http_timeout),
        }
    }

    pub fn rpc_url(&self) -> Result<&str, ConfigError> {
        self.alchemy_rpc_url
            .as_deref()
            .ok_or(ConfigError::Missing("ALCHEMY_RPC_URL"))
    }

    pub fn prices_api_key(&self) -> Result<&str, ConfigError> {
        self.alchemy_prices_api_key
            .as_deref()
            .ok_or(ConfigError::Missing("ALCHEMY_PRICES_API_KEY"))
    }

    pub fn etherscan_api_key(&self) -> Result<&str, ConfigError> {
        self.etherscan_api_key
            .as_deref()
            .ok_or(ConfigError::Missing("ETHERSCAN_API_KEY"))
    }
}
