//! Tic-tac-toe game logic with snapshot history and time travel.
//!
//! The game keeps every board state it has passed through as an immutable
//! snapshot. A player can jump the view back to any earlier snapshot, and
//! playing from there branches the timeline: the abandoned future is
//! discarded and replaced by the new line of play.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Position};
//!
//! let mut game = GameState::new();
//! game.play(Position::TopLeft)?;
//! game.play(Position::Center)?;
//! game.jump_to(1)?; // review the board after X's first move
//! game.play(Position::TopRight)?; // O branches; the old future is gone
//! assert_eq!(game.history().len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use game::{GameState, JumpError, PlayError, StateError};
pub use position::Position;
pub use types::{Board, Cell, Mark, Status};
