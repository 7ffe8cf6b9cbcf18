//! Draw detection.

use super::win::check_winner;
use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if every cell holds a mark.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Checks for a draw: a full board with no completed line.
///
/// The win check takes precedence: a filled board containing a winning line
/// is a win, not a draw.
#[instrument]
pub fn check_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
