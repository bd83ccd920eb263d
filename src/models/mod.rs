use serde::Serialize;
pub mod asset_transfers;
pub mod token_prices;

pub const JSONRPC_VERSION: &str = "2.0";

#[derive(Serialize, Debug, Clone)]
pub struct JsonRpcRequest<P> {
    pub id: u64,
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: Vec<P>,
}

impl<P> JsonRpcRequest<P> {
    pub fn new(id: u64, method: &'static str, params: P) -> Self {
        Self {
            id,
            jsonrpc: JSONRPC_VERSION,
            method,
            params: vec![params],
        }
    }
}
