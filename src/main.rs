mod cli;
mod config;
mod error;
mod fetcher;
mod models;
mod utils;
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use fetcher::{get_asset_transfers, get_funded_by, get_token_prices};
use models::{asset_transfers::AssetTransferFilter, token_prices::TokenPricesRequest};
use utils::logging::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = Config::init();
    let mut stdout = std::io::stdout();

    match cli.into_command() {
        Command::Transfers(args) => {
            let filter = AssetTransferFilter::default().to_address(args.to_address);
            get_asset_transfers(&config, &filter, &mut stdout).await;
        }
        Command::Prices => {
            get_token_prices(&config, &TokenPricesRequest::default(), &mut stdout).await;
        }
        Command::FundedBy(args) => {
            get_funded_by(&config, &args.address, args.api_key.as_deref(), &mut stdout).await;
        }
    }
}
