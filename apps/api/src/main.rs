//! # Veloce API Server
//!
//! Binary entry point: configuration, database, services, HTTP listener.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use veloce_api::config::ApiConfig;
use veloce_api::services::concierge::HttpChatModel;
use veloce_api::services::notifier::{NotificationDispatcher, TelegramTransport};
use veloce_api::state::AppState;
use veloce_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Veloce API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        port = config.http_port,
        db_path = %config.database_path,
        bot_configured = config.bot_token.is_some(),
        "Configuration loaded"
    );

    // Connect to database (runs migrations)
    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    info!("Database ready");

    // Build services
    let transport = Arc::new(TelegramTransport::new()?);
    let dispatcher = NotificationDispatcher::new(
        db.settings(),
        transport,
        config.bot_token.clone(),
        config.chat_id.clone(),
    );
    let concierge = Arc::new(HttpChatModel::new(
        config.concierge_api_url.clone(),
        config.concierge_api_key.clone(),
        config.concierge_model.clone(),
    )?);

    let state = AppState::new(db.clone(), dispatcher, concierge);
    let router = veloce_api::build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
