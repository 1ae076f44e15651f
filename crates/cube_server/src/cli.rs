//! Command-line interface for cube_server.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cube Tic-Tac-Toe - two-player 4x4x4 tic-tac-toe over HTTP
#[derive(Parser, Debug)]
#[command(name = "cube_server")]
#[command(about = "Authoritative game server for 4x4x4 tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config and HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the effective configuration as TOML
    CheckConfig {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
