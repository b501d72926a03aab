//! toilet-ratings server entry point.
//!
//! Opens the store, applies the schema, and starts the Axum HTTP server
//! with the GraphQL endpoint.

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use toilet_ratings::api::{self, GRAPHQL_PATH};
use toilet_ratings::app_state::AppState;
use toilet_ratings::config::{LogFormat, ServiceConfig};
use toilet_ratings::persistence::SqliteStore;
use toilet_ratings::service::ToiletService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServiceConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(env_filter).init(),
    }

    tracing::info!(addr = %config.listen_addr, "starting toilet-ratings");

    // Build persistence layer; no request is served until the schema is in place
    let store = SqliteStore::connect(
        &config.database_url,
        config.database_max_connections,
        config.database_connect_timeout(),
    )
    .await
    .context("failed to open database")?;
    store
        .init_schema()
        .await
        .context("failed to initialize database schema")?;

    // Build service layer and application state
    let app_state = AppState::new(ToiletService::new(store.clone()));

    // Build router
    let app = api::build_router(config.graphiql_enabled)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(
        addr = %config.listen_addr,
        path = GRAPHQL_PATH,
        graphiql = config.graphiql_enabled,
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
