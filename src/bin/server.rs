//! RSSched HTTP Server Binary
//!
//! This is the main entry point for the RSSched REST API server.
//! It loads the configuration, initializes the instance store, sets up the
//! HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (0.0.0.0:8080, in-memory store)
//! cargo run --bin rssched-server --features http-server
//!
//! # Run with a configuration file
//! RSSCHED_CONFIG=server.toml cargo run --bin rssched-server --features http-server
//! ```
//!
//! # Environment Variables
//!
//! - `RSSCHED_CONFIG`: Path to a TOML configuration file (optional)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rssched_rust::config::ServerConfig;
use rssched_rust::http::{create_router, AppState};
use rssched_rust::store;

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
        .with_thread_ids(true)
        .init();

    info!("Starting RSSched HTTP Server");

    // Load configuration (file + environment overrides)
    let config = ServerConfig::load()?;

    // Initialize global store once and reuse it across the app
    store::init_store(&config.store)?;
    let instance_store = std::sync::Arc::clone(store::get_store()?);
    info!("Instance store initialized successfully");

    // Create application state
    let addr: SocketAddr = config.bind_addr().parse()?;
    let state = AppState::new(instance_store, std::sync::Arc::new(config));

    // Create router with all endpoints
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
