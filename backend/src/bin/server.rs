//! School comparison HTTP server binary.
//!
//! Loads the repository, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! # Empty in-memory repository
//! cargo run --bin school-compare-server
//!
//! # Load a dataset file
//! SCHOOLS_DATA_FILE=backend/data/schools.json cargo run --bin school-compare-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: `local` or `file` (overrides repository.toml)
//! - `SCHOOLS_DATA_FILE`: JSON dataset to load (overrides repository.toml)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use school_compare::db::{RepositoryFactory, SchoolRepository};
use school_compare::http::{create_router, AppState};

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

    info!("Starting school comparison server");

    let repository =
        RepositoryFactory::from_default_config().context("Failed to initialize repository")?;
    if let Ok(info) = repository.dataset_info().await {
        info!(
            schools = info.school_count,
            peer_groups = info.peer_group_count,
            checksum = info.checksum.as_deref().unwrap_or("-"),
            "Repository initialized"
        );
    }

    let app = create_router(AppState::new(repository));

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
