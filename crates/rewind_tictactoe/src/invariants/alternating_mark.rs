//! Alternating-mark invariant: placed marks follow move parity.

use super::Invariant;
use crate::types::{Cell, Mark};
use crate::{GameState, Position};

/// Invariant: the mark added at step `k` matches move parity.
///
/// The turn indicator is derived from `current_move`, never stored, so the
/// timeline itself must carry the alternation: step 1 places `X`, step 2
/// places `O`, and so on.
pub struct AlternatingMarkInvariant;

impl Invariant<GameState> for AlternatingMarkInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        for k in 1..history.len() {
            let placed = Position::ALL.iter().copied().find_map(|pos| {
                match (history[k - 1].get(pos), history[k].get(pos)) {
                    (Cell::Empty, Cell::Taken(mark)) => Some(mark),
                    _ => None,
                }
            });
            match placed {
                Some(mark) if mark == Mark::for_move(k - 1) => {}
                _ => return false,
            }
        }
        true
    }

    fn description() -> &'static str {
        "Mark placed at each step matches move parity (X on even moves)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        let game = GameState::new();
        assert!(AlternatingMarkInvariant::holds(&game));
    }

    #[test]
    fn test_holds_through_a_game() {
        let mut game = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ] {
            game.play(pos).unwrap();
        }
        assert!(AlternatingMarkInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_branching() {
        let mut game = GameState::new();
        game.play(Position::TopLeft).unwrap();
        game.play(Position::Center).unwrap();
        game.jump_to(0).unwrap();
        game.play(Position::BottomRight).unwrap();
        assert!(AlternatingMarkInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_parity_violates() {
        let mut game = GameState::new();
        game.play(Position::TopLeft).unwrap();

        // Corrupt: the first step must place X, not O.
        game.history[1].set(Position::TopLeft, Cell::Taken(Mark::O));

        assert!(!AlternatingMarkInvariant::holds(&game));
    }
}
