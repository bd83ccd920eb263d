use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_TOKENS: [(&str, &str); 8] = [
    ("eth-mainnet", "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"), // WETH
    ("eth-mainnet", "0x2260fac5e5542a773aa44fbcfedf7c193bc2c599"), // WBTC
    ("eth-mainnet", "0xae7ab96520de3a18e5e111b5eaab095312d7fe84"), // stETH
    ("eth-mainnet", "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"), // USDC
    ("eth-mainnet", "0xdac17f958d2ee523a2206206994597c13d831ec7"), // USDT
    ("polygon-mainnet", "0x1bfd67037b42cf73acf2047067bd4f2c47d9bfd6"), // WBTC
    ("polygon-mainnet", "0x2791bca1f2de4661ed88a30c99a7a9449aa84174"), // USDC
    ("polygon-mainnet", "0xc2132d05d31c914a87c6611c10748aeb04b58e8f"), // USDT
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenAddress {
    pub network: String,
    pub address: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct TokenPricesRequest {
    pub addresses: Vec<TokenAddress>,
}

impl Default for TokenPricesRequest {
    fn default() -> Self {
        Self {
            addresses: DEFAULT_TOKENS
                .iter()
                .map(|(network, address)| TokenAddress {
                    network: network.to_string(),
                    address: address.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenPrice {
    pub value: Option<Value>,
    pub currency: Option<Value>,
    pub last_updated_at: Option<Value>,
}

/// One element of the response `data` array. Every field is kept as raw JSON
/// so an odd value only affects the line for its own address.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PriceEntry {
    pub network: Option<Value>,
    pub address: Option<Value>,
    pub prices: Option<Value>,
    pub error: Option<Value>,
}

impl PriceEntry {
    /// Non-object items read as an entry with nothing set.
    pub fn from_item(item: &Value) -> Self {
        serde_json::from_value(item.clone()).unwrap_or_default()
    }

    /// Error text reported for this address, if the service flagged one.
    pub fn error_text(&self) -> Option<String> {
        self.error.as_ref().filter(|e| is_truthy(e)).map(plain_text)
    }

    /// First element of `prices`, when it is a price object.
    pub fn latest_price(&self) -> Option<TokenPrice> {
        let first = self.prices.as_ref()?.as_array()?.first()?;
        if !first.is_object() {
            return None;
        }
        serde_json::from_value(first.clone()).ok()
    }

    pub fn summary(&self) -> String {
        let address = self
            .address
            .as_ref()
            .map(plain_text)
            .unwrap_or_else(|| "<unknown>".to_string());
        if let Some(error) = self.error_text() {
            return format!("Address: {} Error: {}", address, error);
        }
        match self.latest_price() {
            Some(price) => format!(
                "Address: {} Price: {} {} Updated: {}",
                address,
                text_or_empty(&price.value),
                text_or_empty(&price.currency),
                text_or_empty(&price.last_updated_at),
            ),
            None => format!("Address: {} No price information", address),
        }
    }
}

/// Renders a JSON scalar without quotes; anything else stays compact JSON.
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_or_empty(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(v) => plain_text(v),
    }
}

/// `null`, `false`, `0` and `""` count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
