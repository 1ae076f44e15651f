//! Win detection for 4x4x4 tic-tac-toe.

use super::lines::{Line, winning_lines};
use crate::types::{Board, Cell, Slot};

/// Returns the slot owning every cell of `line`, if one does.
///
/// An empty cell never completes a line.
pub fn completes_line(board: &Board, line: &Line) -> Option<Slot> {
    let owner = board.get(line[0]).owner()?;
    line[1..]
        .iter()
        .all(|coord| board.get(*coord) == Cell::Occupied(owner))
        .then_some(owner)
}

/// Checks if there is a winner on the board.
///
/// Scans all 76 lines and returns the owner of the first complete one.
pub fn check_winner(board: &Board) -> Option<Slot> {
    winning_lines()
        .iter()
        .find_map(|line| completes_line(board, line))
}
