//! Create (or with `--recreate`, drop and recreate) every travelstore table.

use anyhow::Context;
use clap::Parser;
use travelstore::{AppConfig, TravelStore, init_logging};

#[derive(Debug, Parser)]
#[command(name = "travelstore-migrate")]
#[command(about = "Create the travelstore tables and indexes")]
struct Args {
    /// Drop every table before creating it again
    #[arg(long)]
    recreate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_logging(&config.logging)?;

    let store = TravelStore::new(config.database)
        .await
        .context("failed to connect to database")?;
    store
        .migrate_all(args.recreate)
        .await
        .context("migration failed")?;

    tracing::info!(recreate = args.recreate, "Migration complete");
    store.close().await;
    Ok(())
}
