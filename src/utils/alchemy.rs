use crate::{
    config::Config,
    error::QueryError,
    models::{
        asset_transfers::{AssetTransferFilter, GET_ASSET_TRANSFERS_METHOD},
        token_prices::TokenPricesRequest,
        JsonRpcRequest,
    },
    utils::{build_client, read_json},
};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

pub struct Alchemy;

impl Alchemy {
    pub async fn fetch_asset_transfers(
        config: &Config,
        filter: &AssetTransferFilter,
    ) -> Result<Value, QueryError> {
        let url = config.rpc_url()?;
        let client = build_client(config.http_timeout)?;
        let body = JsonRpcRequest::new(1, GET_ASSET_TRANSFERS_METHOD, filter);

        debug!(to_address = %filter.to_address, "Posting {}", GET_ASSET_TRANSFERS_METHOD);
        let response = client
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        read_json(response).await
    }

    pub fn prices_url(base_url: &str, api_key: &str) -> String {
        format!(
            "{}/{}/tokens/by-address",
            base_url.trim_end_matches('/'),
            api_key
        )
    }

    pub async fn fetch_token_prices(
        config: &Config,
        request: &TokenPricesRequest,
    ) -> Result<Value, QueryError> {
        let url = Self::prices_url(&config.alchemy_prices_base_url, config.prices_api_key()?);
        let client = build_client(config.http_timeout)?;

        debug!(tokens = request.addresses.len(), "Posting token price lookup");
        let response = client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        read_json(response).await
    }
}
