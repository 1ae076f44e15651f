//! The match aggregate and its read-only snapshot.

use crate::action::{LastMove, Move};
use crate::slots::SlotTable;
use crate::types::{Board, Cell, Slot};
use serde::{Deserialize, Serialize};

/// Where the turn state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Accepting a move from the given slot.
    AwaitingMove(Slot),
    /// A line was completed by the given slot.
    Finished(Slot),
}

/// Complete match state: board, turn, outcome and slot occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Slot,
    winner: Option<Slot>,
    last_move: Option<LastMove>,
    slots: SlotTable,
}

impl GameState {
    /// Creates a fresh match with both slots free.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Slot::First,
            winner: None,
            last_move: None,
            slots: SlotTable::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the slot holding the turn.
    pub fn current_player(&self) -> Slot {
        self.current_player
    }

    /// Returns the winner, once there is one.
    pub fn winner(&self) -> Option<Slot> {
        self.winner
    }

    /// Returns the most recent accepted move.
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Returns slot occupancy.
    pub fn slots(&self) -> &SlotTable {
        &self.slots
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        match self.winner {
            Some(winner) => Phase::Finished(winner),
            None => Phase::AwaitingMove(self.current_player),
        }
    }

    /// Copies the client-visible part of the state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            winner: self.winner,
            last_move: self.last_move,
        }
    }

    pub(crate) fn slots_mut(&mut self) -> &mut SlotTable {
        &mut self.slots
    }

    /// Writes the mark and records the move (unchecked - the engine validates).
    pub(crate) fn place(&mut self, mov: Move) {
        self.board.set(mov.coord, Cell::Occupied(mov.player));
        self.last_move = Some(mov.into());
    }

    pub(crate) fn declare_winner(&mut self, winner: Slot) {
        self.winner = Some(winner);
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.other();
    }

    /// Clears board, turn, winner and last move. Slot occupancy is kept.
    pub(crate) fn clear_board(&mut self) {
        self.board = Board::new();
        self.current_player = Slot::First;
        self.winner = None;
        self.last_move = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only copy of the match as shown to players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cube contents, `[z][y][x]`.
    pub board: Board,
    /// Slot holding the turn.
    pub current_player: Slot,
    /// Winning slot, if any.
    pub winner: Option<Slot>,
    /// Most recent accepted move, if any.
    pub last_move: Option<LastMove>,
}
