//! Game rules for 4x4x4 tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! state storage so the engine and tests can use them directly.

pub mod lines;
pub mod win;

pub use lines::{LINE_COUNT, Line, winning_lines};
pub use win::{check_winner, completes_line};
