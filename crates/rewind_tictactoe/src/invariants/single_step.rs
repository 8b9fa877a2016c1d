//! Single-step invariant: history grows one mark at a time.

use super::Invariant;
use crate::types::{Board, Cell};
use crate::{GameState, Position};

/// Invariant: history starts from the empty board and each snapshot adds
/// exactly one mark.
///
/// For every `k >= 1`, `history[k]` and `history[k-1]` differ in exactly
/// one cell, and that cell goes from empty to taken. Marks are never
/// removed or overwritten along the timeline.
pub struct SingleStepInvariant;

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        if history.first() != Some(&Board::new()) {
            return false;
        }

        for k in 1..history.len() {
            let mut added = 0;
            for pos in Position::ALL {
                match (history[k - 1].get(pos), history[k].get(pos)) {
                    (a, b) if a == b => {}
                    (Cell::Empty, Cell::Taken(_)) => added += 1,
                    _ => return false,
                }
            }
            if added != 1 {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "History starts empty and each snapshot adds exactly one mark"
    }
}
