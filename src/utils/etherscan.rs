use crate::{
    config::Config,
    error::QueryError,
    utils::{build_client, read_json},
};
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::debug;

pub const MAINNET_CHAIN_ID: &str = "1";

pub struct Etherscan;

impl Etherscan {
    /// Values are substituted as given; no encoding or format checks.
    pub fn funded_by_url(base_url: &str, address: &str, api_key: &str) -> String {
        format!(
            "{}?chainid={}&module=account&action=fundedby&address={}&apikey={}",
            base_url, MAINNET_CHAIN_ID, address, api_key
        )
    }

    pub async fn fetch_funded_by(
        config: &Config,
        address: &str,
        api_key: &str,
    ) -> Result<Value, QueryError> {
        let client = build_client(config.http_timeout)?;
        let url = Self::funded_by_url(&config.etherscan_base_url, address, api_key);

        debug!(address, "Fetching fundedby");
        let response = client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        read_json(response).await
    }
}
