//! Salesview main entry point

use clap::Parser;
use salesview_api::start_server;
use salesview_config::Config;
use salesview_core::{StoreRef, TransactionService};
use salesview_store::{load_csv, MemoryStore};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "salesview")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight sales-transaction browsing backend", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = if args.config.exists() {
        Config::load(args.config.clone())?
    } else {
        Config::default()
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .init();

    if !args.config.exists() {
        log::warn!(
            "Config file not found: {}, using defaults",
            args.config.display()
        );
    }

    let rt = Runtime::new()?;
    rt.block_on(async {
        let dataset_path = config.dataset_path();
        log::info!("Looking for dataset: {}", dataset_path.display());

        let records = if dataset_path.exists() {
            let records = load_csv(&dataset_path)?;
            log::info!("Dataset loaded: {} transactions", records.len());
            records
        } else {
            log::warn!("Dataset not found: {}", dataset_path.display());
            Vec::new()
        };

        let store: StoreRef = Arc::new(MemoryStore::new(records));
        let service = Arc::new(TransactionService::new(
            store,
            config.pagination.records_per_page,
        ));

        start_server(config, service).await
    })
}
