//! Move requests, accepted moves and move errors.
//!
//! A [`MoveRequest`] is the caller's intent, with every field already coerced
//! to an integer but not yet validated. The engine turns it into a [`Move`]
//! once the turn, bounds and occupancy checks pass.

use crate::types::{Coord, Slot};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A move as submitted: player id and coordinates, unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct MoveRequest {
    /// Claimed player id.
    pub player: i64,
    /// Layer.
    pub z: i64,
    /// Row.
    pub y: i64,
    /// Column.
    pub x: i64,
}

/// An accepted move: a slot placing its mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Move {
    /// The slot that moved.
    pub player: Slot,
    /// Where the mark went.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Record of the most recent accepted move, in its wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    /// The slot that moved.
    pub player: Slot,
    /// Layer.
    pub z: usize,
    /// Row.
    pub y: usize,
    /// Column.
    pub x: usize,
}

impl From<Move> for LastMove {
    fn from(mov: Move) -> Self {
        Self {
            player: mov.player,
            z: mov.coord.z(),
            y: mov.coord.y(),
            x: mov.coord.x(),
        }
    }
}

/// Reason a move was rejected.
///
/// Checks run in declaration order, so a request breaking several rules
/// reports the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The match already has a winner.
    #[display("Game already finished")]
    GameFinished,

    /// The requester does not hold the turn.
    #[display("Not your turn")]
    WrongTurn {
        /// Slot whose move is accepted.
        expected: Slot,
    },

    /// A coordinate lies outside `[0, 4)`.
    #[display("Out of bounds")]
    OutOfBounds,

    /// The target cell already carries a mark.
    #[display("Cell occupied")]
    CellOccupied,
}
