//! Cube tic-tac-toe - two-player 4x4x4 tic-tac-toe match logic.
//!
//! # Architecture
//!
//! - **Types**: slots, cells, coordinates and the board
//! - **Rules**: the 76 winning lines and win detection
//! - **State**: the match aggregate ([`GameState`]) and its [`Snapshot`]
//! - **Engine**: stateless validation and transitions ([`MatchEngine`])
//! - **Gate**: the shared, lock-guarded match ([`MatchGate`])
//!
//! # Example
//!
//! ```
//! use cube_tictactoe::{MatchGate, MoveRequest, Slot};
//!
//! let gate = MatchGate::new();
//! let me = gate.connect()?;
//! assert_eq!(me, Slot::First);
//!
//! let snapshot = gate.submit_move(MoveRequest::new(0, 0, 0, 0))?;
//! assert_eq!(snapshot.current_player, Slot::Second);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod gate;
pub mod rules;
mod slots;
mod state;
mod types;

// Crate-level exports - Domain types
pub use types::{Board, Cell, Coord, InvalidCell, SIZE, Slot, UnknownSlot};

// Crate-level exports - Moves
pub use action::{LastMove, Move, MoveError, MoveRequest};

// Crate-level exports - Rules
pub use rules::{LINE_COUNT, Line, check_winner, winning_lines};

// Crate-level exports - State and engine
pub use engine::MatchEngine;
pub use gate::MatchGate;
pub use slots::{SlotError, SlotTable};
pub use state::{GameState, Phase, Snapshot};
