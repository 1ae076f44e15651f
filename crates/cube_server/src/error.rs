//! Error types for the HTTP layer.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cube_tictactoe::{MoveError, SlotError};
use derive_more::{Display, Error};
use serde_json::json;
use tracing::instrument;

/// A request the match refused, in the shape returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ApiError {
    /// Body absent or fields not integer-coercible.
    #[display("{}", _0)]
    MalformedInput(#[error(not(source))] &'static str),

    /// No free slot.
    #[display("{}", _0)]
    Slot(SlotError),

    /// Move preconditions failed.
    #[display("{}", _0)]
    Move(MoveError),
}

impl ApiError {
    /// Body missing, not JSON, or an empty JSON value.
    pub const MISSING_JSON: Self = ApiError::MalformedInput("Missing JSON");

    /// A required field is absent or not an integer.
    pub const INVALID_FIELDS: Self = ApiError::MalformedInput("Invalid fields");
}

impl From<SlotError> for ApiError {
    fn from(err: SlotError) -> Self {
        ApiError::Slot(err)
    }
}

impl From<MoveError> for ApiError {
    fn from(err: MoveError) -> Self {
        ApiError::Move(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
