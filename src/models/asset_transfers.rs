use serde::{Serialize, Serializer};

pub const GET_ASSET_TRANSFERS_METHOD: &str = "alchemy_getAssetTransfers";
pub const DEFAULT_TO_ADDRESS: &str = "0x6Df01209c6bFb652B8a1F00fAae229a317Dd5dE3";
pub const DEFAULT_MAX_COUNT: u64 = 1000;

/// Filter object sent as the single `params` entry of
/// `alchemy_getAssetTransfers`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransferFilter {
    pub from_block: String,
    pub to_block: String,
    pub to_address: String,
    pub with_metadata: bool,
    pub exclude_zero_value: bool,
    // The RPC takes counts as hex quantities.
    #[serde(serialize_with = "serialize_hex_quantity")]
    pub max_count: u64,
    pub category: Vec<String>,
}

impl Default for AssetTransferFilter {
    fn default() -> Self {
        Self {
            from_block: "0x0".to_string(),
            to_block: "latest".to_string(),
            to_address: DEFAULT_TO_ADDRESS.to_string(),
            with_metadata: false,
            exclude_zero_value: true,
            max_count: DEFAULT_MAX_COUNT,
            category: vec!["internal".to_string()],
        }
    }
}

impl AssetTransferFilter {
    pub fn to_address(mut self, address: impl Into<String>) -> Self {
        self.to_address = address.into();
        self
    }
}

fn serialize_hex_quantity<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{:#x}", value))
}
