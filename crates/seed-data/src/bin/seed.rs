//! Seeds the RHCSA quiz question collection.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! Connection settings come from `MONGODB_URI`, `SEED_DATABASE`, and
//! `SEED_COLLECTION`, with local development defaults. The run wipes the
//! target collection before inserting, so point it at production at your
//! peril.

use std::process::ExitCode;

use seed_data::{MongoStore, Payload, SeedConfig, SeedError, SeedSummary, Seeder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(summary) => {
            tracing::info!(
                "Seed completed: {} questions inserted, {} stale documents removed",
                summary.inserted,
                summary.deleted
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Seed failed: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<SeedSummary, SeedError> {
    let config = SeedConfig::from_env();
    let payload = Payload::load()?;
    tracing::info!(
        "Loaded {} questions for {}/{}",
        payload.len(),
        config.database,
        config.collection
    );

    let store = MongoStore::connect(&config).await?;
    tracing::info!("Connected to database");

    Seeder::new(store).reset(payload.questions()).await
}
