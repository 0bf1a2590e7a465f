//! Insights HTTP Server Binary
//!
//! Entry point for the analytics REST API server: initializes logging,
//! resolves configuration, loads the dataset into memory, and serves.
//!
//! # Usage
//!
//! ```bash
//! DATASET_PATH=data/all_data.csv cargo run --bin insights-server
//!
//! # Or with a config file
//! cargo run --bin insights-server -- config.toml
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATASET_PATH`: Path to the order-item CSV (default: data/all_data.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use shop_insights::config::ServerConfig;
use shop_insights::dataset::Dataset;
use shop_insights::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting insights HTTP server");

    let config_path: Option<PathBuf> = env::args().nth(1).map(PathBuf::from);
    let config = ServerConfig::load(config_path.as_deref())?;

    let dataset = Dataset::from_csv(&config.dataset_path)?;
    if let Some((min, max)) = dataset.date_range() {
        info!(
            "Dataset loaded: {} order items, purchases {} to {}",
            dataset.len(),
            min,
            max
        );
    }

    let state = AppState::new(Arc::new(dataset));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
