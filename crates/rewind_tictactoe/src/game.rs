//! Game state: the snapshot history, the viewing pointer, and the two
//! state-changing operations (`play` and `jump_to`).

use crate::position::Position;
use crate::rules::win::check_winner;
use crate::types::{Board, Cell, Mark, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error returned when a move is rejected.
///
/// A rejected move never changes state. Callers that want click-through
/// behavior (re-clicking an occupied cell does nothing) can drop the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The cell at this position is already taken.
    #[display("Cell {} is already taken", _0)]
    CellTaken(Position),

    /// The viewed snapshot already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Mark),
}

impl std::error::Error for PlayError {}

/// Error returned for an out-of-range jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested move number does not exist in history.
    #[display("Move {index} is out of range (history has {len} snapshots)")]
    OutOfRange {
        /// Requested move number.
        index: usize,
        /// Number of snapshots in history.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// Error returned when a serialized session fails validation on restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// History must contain at least the starting snapshot.
    #[display("History must contain at least the starting snapshot")]
    EmptyHistory,

    /// The first snapshot in history must be the empty board.
    #[display("History must start from the empty board")]
    NonEmptyRoot,

    /// The move pointer must index an existing snapshot.
    #[display("Move {index} is out of range (history has {len} snapshots)")]
    PointerOutOfRange {
        /// Restored move number.
        index: usize,
        /// Number of snapshots in the restored history.
        len: usize,
    },
}

impl std::error::Error for StateError {}

/// Untrusted mirror of [`GameState`], validated before use.
///
/// Deserializing straight into `GameState` would hand out a constructor
/// that skips the private-field invariants, so restore goes through this
/// shape and [`TryFrom`] instead.
#[derive(Debug, Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    current_move: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        if raw.history.is_empty() {
            return Err(StateError::EmptyHistory);
        }
        if raw.history[0] != Board::new() {
            return Err(StateError::NonEmptyRoot);
        }
        if raw.current_move >= raw.history.len() {
            return Err(StateError::PointerOutOfRange {
                index: raw.current_move,
                len: raw.history.len(),
            });
        }
        Ok(Self {
            history: raw.history,
            current_move: raw.current_move,
        })
    }
}

/// Single source of truth for one play session.
///
/// Owns the snapshot history and the pointer to the snapshot currently on
/// view. Everything else a renderer needs (turn, winner, status) is derived
/// on read, never stored, so there is no second source of truth to drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Snapshot history; element 0 is always the empty board.
    pub(crate) history: Vec<Board>,
    /// Index into `history` of the snapshot on view.
    pub(crate) current_move: usize,
}

impl GameState {
    /// Creates a session at move 0 with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// The snapshot currently on view.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Move number of the snapshot on view.
    ///
    /// Not necessarily the latest move: the player may be time-traveling.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Read-only view of the snapshot history.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Mark that moves next from the snapshot on view.
    ///
    /// Derived from move parity: `X` on even move numbers, `O` on odd.
    pub fn to_move(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// Winner on the snapshot on view, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(self.current_board())
    }

    /// Status derived from the snapshot on view.
    ///
    /// A full board with no winner still reports the next player; whether
    /// to present that as a draw is the rendering layer's decision (see
    /// [`crate::rules::draw`]).
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Won(mark),
            None => Status::NextTurn(self.to_move()),
        }
    }

    /// Places the parity mark at `pos` and advances the timeline.
    ///
    /// If the player had jumped back, every snapshot after the one on view
    /// is discarded first: the new move branches the timeline and the old
    /// future is unrecoverable.
    ///
    /// # Errors
    ///
    /// Rejects the move, changing nothing, when the viewed snapshot already
    /// has a winner or the cell is taken.
    #[instrument(skip(self), fields(position = %pos, mark = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<(), PlayError> {
        if let Some(winner) = self.winner() {
            return Err(PlayError::GameOver(winner));
        }
        if !self.current_board().is_empty(pos) {
            return Err(PlayError::CellTaken(pos));
        }

        let mut next = self.current_board().clone();
        next.set(pos, Cell::Taken(self.to_move()));

        // Branching: drop the abandoned future before appending.
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(move_number = self.current_move, "Move accepted");
        Ok(())
    }

    /// Re-points the view at another snapshot in history.
    ///
    /// History is never altered; only the pointer moves. Move 0 is the
    /// game start.
    ///
    /// # Errors
    ///
    /// Rejects move numbers outside `0..history.len()` rather than
    /// clamping, so a stale control can't silently land on the wrong move.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), JumpError> {
        if move_number >= self.history.len() {
            return Err(JumpError::OutOfRange {
                index: move_number,
                len: self.history.len(),
            });
        }
        self.current_move = move_number;
        debug!(move_number, "Viewing snapshot");
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_at_empty_board() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.status(), Status::NextTurn(Mark::X));
    }

    #[test]
    fn test_play_appends_snapshot_and_advances_pointer() {
        let mut game = GameState::new();
        game.play(Position::Center).unwrap();

        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.current_board().get(Position::Center), Cell::Taken(Mark::X));
        assert_eq!(game.to_move(), Mark::O);
        // The starting snapshot is untouched.
        assert_eq!(game.history()[0], Board::new());
    }

    #[test]
    fn test_play_occupied_cell_rejected_without_mutation() {
        let mut game = GameState::new();
        game.play(Position::Center).unwrap();
        let before = game.clone();

        let err = game.play(Position::Center).unwrap_err();
        assert_eq!(err, PlayError::CellTaken(Position::Center));
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_after_win_rejected() {
        let mut game = GameState::new();
        // X: 0, 1, 2 across the top; O: 3, 4 in the middle.
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.winner(), Some(Mark::X));
        assert_eq!(game.status(), Status::Won(Mark::X));

        let before = game.clone();
        let err = game.play(Position::BottomLeft).unwrap_err();
        assert_eq!(err, PlayError::GameOver(Mark::X));
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_to_moves_pointer_only() {
        let mut game = GameState::new();
        game.play(Position::TopLeft).unwrap();
        game.play(Position::Center).unwrap();

        game.jump_to(1).unwrap();
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.to_move(), Mark::O);

        game.jump_to(0).unwrap();
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = GameState::new();
        game.play(Position::TopLeft).unwrap();

        let err = game.jump_to(2).unwrap_err();
        assert_eq!(err, JumpError::OutOfRange { index: 2, len: 2 });
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_branching_discards_the_future() {
        let mut game = GameState::new();
        game.play(Position::TopLeft).unwrap();
        game.play(Position::Center).unwrap();
        game.play(Position::TopRight).unwrap();
        assert_eq!(game.history().len(), 4);

        game.jump_to(1).unwrap();
        game.play(Position::BottomRight).unwrap();

        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_move(), 2);
        assert_eq!(
            game.current_board().get(Position::BottomRight),
            Cell::Taken(Mark::O)
        );
        // The old move 2 (O in the center) is gone.
        assert_eq!(game.current_board().get(Position::Center), Cell::Empty);
    }
}
