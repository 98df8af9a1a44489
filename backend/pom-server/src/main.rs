use pom_db::{ProjectStore, SqliteProjectStore, StoreOptions};
use pom_server::{AppState, build_router, error::ServerError, logger, shutdown::shutdown_signal};

use std::error::Error;
use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = pom_config::Config::load()?;
    config.validate()?;

    // Ensure log directory exists
    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| ServerError::Io {
            path: log_dir.to_path_buf(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pom-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Connect the store
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let store = SqliteProjectStore::connect(
        &database_path,
        StoreOptions {
            max_connections: config.database.max_connections,
            busy_timeout: config.busy_timeout(),
        },
    )
    .await?;

    info!("Database connection established, migrations complete");

    let store: Arc<dyn ProjectStore> = Arc::new(store);
    let app = build_router(AppState::new(Arc::clone(&store)));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Closing store connections");
    store.close().await;

    info!("Shutdown complete");
    Ok(())
}
