//! Password Validator - Application entry point
//!
//! CLI-based entry point that dispatches to the requested command.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use password_validator::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load .env first so RUST_LOG from it reaches the filter
    dotenvy::dotenv().ok();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = log_filter(verbose, std::env::var("RUST_LOG").ok());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

/// `--verbose` wins over `RUST_LOG`, which wins over `info`.
fn log_filter(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        "debug".to_string()
    } else {
        rust_log.unwrap_or_else(|| "info".to_string())
    }
}
