//! Match engine: slot assignment, move validation, turn advancement and reset.
//!
//! The engine holds no state of its own. Every operation takes the
//! [`GameState`] it acts on, and validation always precedes mutation, so a
//! rejected call leaves the state exactly as it was.

use crate::action::{Move, MoveError, MoveRequest};
use crate::rules::check_winner;
use crate::slots::SlotError;
use crate::state::{GameState, Phase, Snapshot};
use crate::types::{Coord, Slot};
use tracing::{debug, instrument};

/// Stateless rules engine over a [`GameState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEngine;

impl MatchEngine {
    /// Assigns the lowest free slot to a new player.
    #[instrument(skip(state))]
    pub fn connect(state: &mut GameState) -> Result<Slot, SlotError> {
        state.slots_mut().claim()
    }

    /// Frees a slot. Unknown or already free slots are ignored.
    ///
    /// Game progress is untouched: a player leaving mid-game neither pauses
    /// nor forfeits the match.
    #[instrument(skip(state))]
    pub fn disconnect(state: &mut GameState, slot: Option<Slot>) {
        if let Some(slot) = slot {
            state.slots_mut().release(slot);
        }
    }

    /// Validates and applies a move, returning the updated snapshot.
    ///
    /// Checks run in a fixed order: finished, turn, bounds, occupancy.
    #[instrument(skip(state))]
    pub fn submit_move(state: &mut GameState, request: MoveRequest) -> Result<Snapshot, MoveError> {
        let mov = Self::validate(state, request)?;

        state.place(mov);
        if let Some(winner) = check_winner(state.board()) {
            state.declare_winner(winner);
            debug!(winner = %winner, last = %mov, board = %state.board(), "Line completed");
        } else {
            state.pass_turn();
            debug!(last = %mov, next = %state.current_player(), "Move accepted");
        }

        Ok(state.snapshot())
    }

    /// Runs the move preconditions without touching the state.
    pub fn validate(state: &GameState, request: MoveRequest) -> Result<Move, MoveError> {
        let turn = match state.phase() {
            Phase::Finished(_) => return Err(MoveError::GameFinished),
            Phase::AwaitingMove(turn) => turn,
        };

        if Slot::from_id(request.player) != Some(turn) {
            return Err(MoveError::WrongTurn { expected: turn });
        }

        let coord =
            Coord::from_signed(request.z, request.y, request.x).ok_or(MoveError::OutOfBounds)?;

        if !state.board().is_empty(coord) {
            return Err(MoveError::CellOccupied);
        }

        Ok(Move::new(turn, coord))
    }

    /// Reinitializes board, turn, winner and last move; slot occupancy stays.
    #[instrument(skip(state))]
    pub fn reset(state: &mut GameState) {
        state.clear_board();
        debug!("Board reset");
    }

    /// Read-only view of the state.
    pub fn snapshot(state: &GameState) -> Snapshot {
        state.snapshot()
    }
}
