//! HTTP routes over the shared match.

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::request::{parse_disconnect, parse_move};
use anyhow::Result;
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use cube_tictactoe::{MatchGate, Slot, Snapshot};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};

/// Body of a successful `/connect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectResponse {
    /// Slot assigned to the caller.
    pub player_id: Slot,
}

/// Acknowledgement body for `/disconnect` and `/reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkResponse {
    /// Always `true`.
    pub ok: bool,
}

impl OkResponse {
    const ACK: Self = Self { ok: true };
}

/// Full state payload returned by `/state` and `/move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateResponse {
    /// Payload tag, always `"state"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The match as seen by players.
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

impl From<Snapshot> for StateResponse {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            kind: "state".to_string(),
            snapshot,
        }
    }
}

/// Builds the router for the five match operations.
pub fn router(gate: MatchGate) -> Router {
    Router::new()
        .route("/connect", post(connect))
        .route("/disconnect", post(disconnect))
        .route("/state", get(state))
        .route("/move", post(submit_move))
        .route("/reset", post(reset))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(gate)
}

fn log_request(req: Request) -> Request {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

#[instrument(skip(gate))]
async fn connect(State(gate): State<MatchGate>) -> Result<Json<ConnectResponse>, ApiError> {
    match gate.connect() {
        Ok(player_id) => {
            info!(player_id = %player_id, "Player connected");
            Ok(Json(ConnectResponse { player_id }))
        }
        Err(e) => {
            warn!(error = %e, "Connect refused");
            Err(e.into())
        }
    }
}

#[instrument(skip(gate, body))]
async fn disconnect(State(gate): State<MatchGate>, body: Bytes) -> Json<OkResponse> {
    let slot = parse_disconnect(&body);
    match slot {
        Some(slot) => info!(player_id = %slot, "Player disconnected"),
        None => debug!("Disconnect named no slot"),
    }
    gate.disconnect(slot);
    Json(OkResponse::ACK)
}

#[instrument(skip(gate))]
async fn state(State(gate): State<MatchGate>) -> Json<StateResponse> {
    Json(gate.state().into())
}

#[instrument(skip(gate, body))]
async fn submit_move(
    State(gate): State<MatchGate>,
    body: Bytes,
) -> Result<Json<StateResponse>, ApiError> {
    let request = parse_move(&body).inspect_err(|e| warn!(error = %e, "Malformed move"))?;

    let snapshot = gate
        .submit_move(request)
        .inspect_err(|e| warn!(?request, error = %e, "Move rejected"))?;

    info!(
        player = request.player,
        z = request.z,
        y = request.y,
        x = request.x,
        winner = ?snapshot.winner,
        "Move accepted"
    );
    Ok(Json(snapshot.into()))
}

#[instrument(skip(gate))]
async fn reset(State(gate): State<MatchGate>) -> Json<OkResponse> {
    gate.reset();
    info!("Match reset");
    Json(OkResponse::ACK)
}

/// Binds the configured address and serves until Ctrl-C.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let gate = MatchGate::new();
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(addr = %listener.local_addr()?, "Server ready");

    axum::serve(listener, router(gate))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C, serving until killed");
        std::future::pending::<()>().await;
    }
}
