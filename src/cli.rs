use clap::{Args, Parser, Subcommand};

use crate::models::asset_transfers::DEFAULT_TO_ADDRESS;

pub const DEFAULT_FUNDED_BY_ADDRESS: &str = "0x8f5419c8797cbdecaf3f2f1910d192f4306d527d";

/// Query Alchemy and Etherscan for on-chain data and print the responses.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Internal transfers received by an address (alchemy_getAssetTransfers)
    Transfers(TransfersArgs),

    /// Current prices for the built-in token list
    Prices,

    /// Address that first funded an account (Etherscan fundedby)
    FundedBy(FundedByArgs),
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct TransfersArgs {
    /// Recipient address to filter transfers on
    #[arg(long, default_value = DEFAULT_TO_ADDRESS)]
    pub to_address: String,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct FundedByArgs {
    /// Account to look up
    #[arg(long, default_value = DEFAULT_FUNDED_BY_ADDRESS)]
    pub address: String,

    /// Etherscan API key; falls back to ETHERSCAN_API_KEY
    #[arg(long)]
    pub api_key: Option<String>,
}

impl Default for FundedByArgs {
    fn default() -> Self {
        Self {
            address: DEFAULT_FUNDED_BY_ADDRESS.to_string(),
            api_key: None,
        }
    }
}

impl Cli {
    /// Without a subcommand the tool runs the fundedby lookup.
    pub fn into_command(self) -> Command {
        self.cmd
            .unwrap_or_else(|| Command::FundedBy(FundedByArgs::default()))
    }
}
