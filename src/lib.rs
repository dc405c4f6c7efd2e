pub mod api;
pub mod config;
pub mod db;
pub mod geo;
pub mod models;
pub mod search;

use tracing_subscriber::EnvFilter;

/// Run the document service: initialize logging, open and migrate the
/// database, then serve the HTTP API until ctrl-c.
pub async fn run() -> Result<(), String> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    // Open once at startup so migrations run before the first request.
    // Handlers open their own per-request connections afterwards.
    let db_path = config::database_path();
    db::open_database(&db_path).map_err(|e| format!("Failed to open database: {e}"))?;

    let ctx = api::ApiContext::new(db_path);
    let mut server = api::start_server(ctx, config::bind_addr()).await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for shutdown signal: {e}"))?;

    server.shutdown();
    Ok(())
}
