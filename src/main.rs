use std::sync::Arc;

use film_diary::{
    api::{create_router, AppState},
    config::Config,
    db::SqliteWatchStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "film_diary=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Open (or create) the watch log
    let store = SqliteWatchStore::open(&config.database_path).await?;
    let state = AppState::new(Arc::new(store));

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
