//! Log statistics report
//!
//! One-shot report over the nginx log collection. Runs to completion with
//! no arguments; any fault terminates the process with a non-zero exit.
//!
//! Usage:
//!   cargo run --bin log_stats
//!
//! Environment variables:
//!   MONGO_URI        - MongoDB connection URI (default: mongodb://127.0.0.1:27017)
//!   MONGO_DATABASE   - database holding the logs (default: logs)
//!   MONGO_COLLECTION - collection holding the logs (default: nginx)
//!   STATUS_PATH      - path counted as a status check (default: /status)

use cachetrace::{LogStats, LogStatsConfig};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let config = LogStatsConfig::from_env();
    let stats = LogStats::connect(&config).await?;

    let report = stats.report().await?;
    print!("{}", report);

    Ok(())
}
