//! Win detection over a single board snapshot.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are checked in a fixed order (rows, columns, diagonals) and the
/// first complete line wins. Standard play cannot produce two differently
/// marked lines, but the tie-break stays deterministic regardless.
///
/// Returns `Some(mark)` for three in a row, `None` otherwise. A full board
/// with no line is still `None`; draw is the caller's call.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        // Columns
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return match cell {
                Cell::Taken(mark) => Some(mark),
                Cell::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Taken(Mark::X));
        board.set(Position::TopCenter, Cell::Taken(Mark::X));
        board.set(Position::TopRight, Cell::Taken(Mark::X));
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Taken(Mark::O));
        board.set(Position::Center, Cell::Taken(Mark::O));
        board.set(Position::BottomRight, Cell::Taken(Mark::O));
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Taken(Mark::X));
        board.set(Position::TopCenter, Cell::Taken(Mark::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Unreachable in real play, but the tie-break must be deterministic:
        // the top row comes before the middle row in line order.
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Taken(Mark::X));
        board.set(Position::TopCenter, Cell::Taken(Mark::X));
        board.set(Position::TopRight, Cell::Taken(Mark::X));
        board.set(Position::MiddleLeft, Cell::Taken(Mark::O));
        board.set(Position::Center, Cell::Taken(Mark::O));
        board.set(Position::MiddleRight, Cell::Taken(Mark::O));
        assert_eq!(check_winner(&board), Some(Mark::X));
    }
}
