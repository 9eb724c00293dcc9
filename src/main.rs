//! Callsight Server
//!
//! A stateless analysis service: upload an earnings-call transcript PDF,
//! get back a structured sentiment and guidance report produced by a hosted
//! completion model.

use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use callsight_server::config::Config;
use callsight_server::routes;
use callsight_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "callsight_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::error!("Failed to load config from env: {}", e);
        std::process::exit(1);
    });

    tracing::info!("Starting Callsight Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Completion API: {}", config.analyst.base_url);
    tracing::info!("Model: {}", config.analyst.model);

    let app_state = AppState::new(config);
    let addr = SocketAddr::from(([0, 0, 0, 0], app_state.config().server.port));
    let app = routes::router(app_state);

    // Start server with graceful shutdown
    tracing::info!("Callsight Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("Server shutdown complete");
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
