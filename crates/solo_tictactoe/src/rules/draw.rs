//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;

/// Checks if the board is full (all cells marked).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no completed triple.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
