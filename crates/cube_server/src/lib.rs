//! Cube server - HTTP transport for two-player 4x4x4 tic-tac-toe.
//!
//! # Architecture
//!
//! - **Config**: defaults, TOML file, environment and CLI flags
//! - **Request**: coercion of loose JSON into typed match requests
//! - **Server**: axum routes over the shared [`MatchGate`](cube_tictactoe::MatchGate)
//!
//! Match rules live in [`cube_tictactoe`]; this crate only maps HTTP onto
//! the five match operations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod error;
mod request;
mod server;

pub use cube_tictactoe as game;

// Crate-level exports - CLI and configuration
pub use cli::{Cli, Command};
pub use config::ServerConfig;

// Crate-level exports - Errors
pub use error::{ApiError, ConfigError};

// Crate-level exports - Request coercion
pub use request::{coerce_int, parse_body, parse_disconnect, parse_move};

// Crate-level exports - HTTP server
pub use server::{ConnectResponse, OkResponse, StateResponse, router, serve};
