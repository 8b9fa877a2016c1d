//! Pointer-bounds invariant: the view never leaves history.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_move` always indexes an existing snapshot.
///
/// `jump_to` rejects out-of-range moves and `play` re-points at the last
/// appended snapshot, so the pointer can only dangle if history is
/// truncated behind its back.
pub struct PointerInBoundsInvariant;

impl Invariant<GameState> for PointerInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move pointer stays within history bounds"
    }
}
