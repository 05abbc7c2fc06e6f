//! BRI HTTP Server Binary
//!
//! This is the main entry point for the BRI REST API server.
//! It loads the rentals dataset, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Serve main_data.csv from the working directory
//! cargo run --bin bri-server
//!
//! # Serve a specific CSV export
//! DATA_PATH=data/main_data.csv cargo run --bin bri-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATA_PATH`: Path to the rentals CSV (default: main_data.csv)
//! - `BRI_CONFIG`: Path to a TOML config file (default: bri.toml)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bri_rust::config::DashboardConfig;
use bri_rust::data::Dataset;
use bri_rust::http::{create_router, AppState};

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

    info!("Starting BRI HTTP Server");

    // Resolve configuration (TOML file plus env overrides)
    let config = DashboardConfig::load()?;

    // Load the dataset once; a missing or malformed file is fatal here
    let dataset = Dataset::from_csv_path(&config.data.csv_path)?;
    if let Some((start, end)) = dataset.date_bounds() {
        info!(
            "Dataset loaded: {} records covering {} to {}",
            dataset.len(),
            start,
            end
        );
    }

    // Create application state
    let state = AppState::new(Arc::new(dataset));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
