//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let config = apply_overrides(args, config);
    let addr = config.server_addr();

    // Create application state with the production policy
    let app_state = AppState::from_config(config);

    // Build router
    let app = create_router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::server(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::server(e.to_string()))?;

    Ok(())
}

/// CLI arguments take precedence over loaded configuration.
fn apply_overrides(args: ServeArgs, mut config: Config) -> Config {
    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    config
}
