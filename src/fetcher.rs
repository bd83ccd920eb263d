use std::io::Write;

use crate::config::Config;
use crate::error::QueryError;
use crate::models::asset_transfers::AssetTransferFilter;
use crate::models::token_prices::{PriceEntry, TokenPricesRequest};
use crate::utils::alchemy::Alchemy;
use crate::utils::etherscan::Etherscan;
use crate::utils::pretty_json;
use serde_json::Value;
use tracing::{error, info};

pub const ASSET_TRANSFERS_FAILED: &str = "Asset transfer query failed";
pub const TOKEN_PRICES_FAILED: &str = "Token price query failed";
pub const FUNDED_BY_FAILED: &str = "fundedby query failed";

pub async fn get_asset_transfers<W: Write>(
    config: &Config,
    filter: &AssetTransferFilter,
    out: &mut W,
) {
    info!("Querying asset transfers to {}", filter.to_address);
    if let Err(e) = report_asset_transfers(config, filter, out).await {
        error!("{}: {}", ASSET_TRANSFERS_FAILED, e);
    }
}

pub async fn report_asset_transfers<W: Write>(
    config: &Config,
    filter: &AssetTransferFilter,
    out: &mut W,
) -> Result<(), QueryError> {
    let json = Alchemy::fetch_asset_transfers(config, filter).await?;
    writeln!(out, "Result: {}", pretty_json(&json)?)?;
    Ok(())
}

pub async fn get_token_prices<W: Write>(
    config: &Config,
    request: &TokenPricesRequest,
    out: &mut W,
) {
    info!("Querying prices for {} tokens", request.addresses.len());
    if let Err(e) = report_token_prices(config, request, out).await {
        error!("{}: {}", TOKEN_PRICES_FAILED, e);
    }
}

pub async fn report_token_prices<W: Write>(
    config: &Config,
    request: &TokenPricesRequest,
    out: &mut W,
) -> Result<(), QueryError> {
    let json = Alchemy::fetch_token_prices(config, request).await?;
    for line in price_report_lines(&json)? {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// One line per returned address, or the whole response when it does not
/// carry a `data` array of price entries.
pub fn price_report_lines(json: &Value) -> Result<Vec<String>, serde_json::Error> {
    match json.get("data").and_then(Value::as_array) {
        Some(items) => Ok(items
            .iter()
            .map(|item| PriceEntry::from_item(item).summary())
            .collect()),
        None => Ok(vec![format!(
            "Unexpected response format: {}",
            pretty_json(json)?
        )]),
    }
}

pub async fn get_funded_by<W: Write>(
    config: &Config,
    address: &str,
    api_key: Option<&str>,
    out: &mut W,
) {
    info!("Querying fundedby for {}", address);
    if let Err(e) = report_funded_by(config, address, api_key, out).await {
        error!("{}: {}", FUNDED_BY_FAILED, e);
    }
}

pub async fn report_funded_by<W: Write>(
    config: &Config,
    address: &str,
    api_key: Option<&str>,
    out: &mut W,
) -> Result<(), QueryError> {
    let api_key = match api_key {
        Some(key) => key,
        None => config.etherscan_api_key()?,
    };
    let json = Etherscan::fetch_funded_by(config, address, api_key).await?;
    writeln!(out, "fundedby result: {}", pretty_json(&json)?)?;
    Ok(())
}
