//! Cube Server - HTTP game server binary.

use anyhow::Result;
use clap::Parser;
use cube_server::{Cli, Command, ServerConfig, serve};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, host, port } => {
            let config = resolve_config(config.as_deref())?.with_overrides(host, port);
            init_tracing(&config);
            info!(?config, "Starting Cube Tic-Tac-Toe server");
            serve(&config).await
        }
        Command::CheckConfig { config } => {
            let config = resolve_config(config.as_deref())?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Defaults, then the config file if given, then the environment.
fn resolve_config(path: Option<&Path>) -> Result<ServerConfig> {
    let config = match path {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    Ok(config.with_env()?)
}

fn init_tracing(config: &ServerConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();
}
