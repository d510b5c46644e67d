//! Bike-Share Insights HTTP Server Binary
//!
//! Entry point for the dashboard backend. It loads the rentals dataset,
//! sets up the HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! DATA_PATH=train.csv cargo run --bin bikeshare-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATA_PATH`: Path to the rentals CSV (default: train.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bikeshare_insights::dataset::Dataset;
use bikeshare_insights::http::{create_router, AppState};

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

    info!("Starting Bike-Share Insights Server");

    // Load the dataset once; a bad file aborts startup instead of serving
    // wrong data.
    let data_path: PathBuf = env::var("DATA_PATH")
        .unwrap_or_else(|_| "train.csv".to_string())
        .into();
    let dataset = Dataset::load(&data_path)?;

    let state = AppState::new(Arc::new(dataset));
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
