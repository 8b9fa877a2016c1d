//! Board-fullness checks for caller-side draw display.
//!
//! The core never reports a draw: [`crate::Status`] keeps announcing the
//! next player on a full board with no winner. A rendering layer that wants
//! a draw display combines these checks itself.

use super::win::check_winner;
use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells taken).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Checks if the board is full with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
