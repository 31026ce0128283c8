/**
 * Ticketdesk Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads the configuration and serves the
 * Axum application until Ctrl-C.
 */

use ticketdesk::backend::server::{create_app, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,tower_http=debug".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;
    tracing::debug!("Loaded configuration: {:?}", config);

    let port = config.port;
    let app = create_app(config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server started on port {}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
