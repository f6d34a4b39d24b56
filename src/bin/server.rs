//! Campus Scheduler HTTP Server Binary
//!
//! This is the main entry point for the campus scheduling REST API server.
//! It initializes the repository, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with local (in-memory) repository (default)
//! cargo run --bin campus-server --features "local-repo,http-server"
//!
//! # Seed a classroom and section catalog at startup
//! CATALOG_FILE=data/catalog.json \
//!   cargo run --bin campus-server --features "local-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SCHEDULER_CONFIG`: Path to scheduler.toml (default: standard locations)
//! - `CATALOG_FILE`: JSON catalog to seed into the repository at startup
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use campus_scheduler::db::{self, RepositoryConfig};
use campus_scheduler::http::{create_router, AppState};
use campus_scheduler::models::catalog;
use campus_scheduler::scheduler::SolverConfig;

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

    info!("Starting campus scheduler HTTP server");

    // Initialize global repository once and reuse it across the app
    db::init_repository()?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    // Solver configuration comes from scheduler.toml when one is present
    let solver = match env::var("SCHEDULER_CONFIG") {
        Ok(path) => {
            let config = RepositoryConfig::from_file(&path)?;
            info!("Loaded solver configuration from {}", path);
            config.to_solver_config()?
        }
        Err(_) => match RepositoryConfig::from_default_location() {
            Ok(config) => config.to_solver_config()?,
            Err(_) => SolverConfig::default(),
        },
    };

    // Optionally seed the catalog from a JSON file
    if let Ok(path) = env::var("CATALOG_FILE") {
        let catalog = catalog::parse_catalog_json_file(&path)?;
        let summary = db::seed_catalog(repository.as_ref(), &catalog).await?;
        info!(
            "Seeded catalog from {} ({} classrooms, {} sections)",
            path, summary.classrooms, summary.sections
        );
    }

    // Create application state
    let state = AppState::new(repository).with_solver(solver);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
