pub mod alchemy;
pub mod etherscan;
pub mod logging;

use crate::error::QueryError;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

// Status codes are not checked; error bodies are printed like any other JSON.
pub async fn read_json(response: Response) -> Result<Value, QueryError> {
    let status = response.status();
    let text = response.text().await?;
    debug!(%status, bytes = text.len(), "Response received");
    Ok(serde_json::from_str(&text)?)
}

pub fn pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
