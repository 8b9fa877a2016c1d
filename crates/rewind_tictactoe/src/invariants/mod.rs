//! First-class invariants for the snapshot timeline.
//!
//! Invariants are logical properties that must hold throughout a session.
//! They are testable independently and double as documentation of what the
//! history mechanism guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants over the same state type.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod alternating_mark;
pub mod pointer_bounds;
pub mod single_step;

pub use alternating_mark::AlternatingMarkInvariant;
pub use pointer_bounds::PointerInBoundsInvariant;
pub use single_step::SingleStepInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    SingleStepInvariant,
    AlternatingMarkInvariant,
    PointerInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameState, Mark, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new();
        assert!(TimelineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut game = GameState::new();
        game.play(Position::TopLeft).unwrap();
        game.play(Position::Center).unwrap();
        game.jump_to(1).unwrap();
        game.play(Position::BottomRight).unwrap();

        assert!(TimelineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_violations() {
        let mut game = GameState::new();
        game.play(Position::Center).unwrap();

        // Corrupt a stored snapshot directly: two cells change in one step.
        game.history[1].set(Position::TopLeft, Cell::Taken(Mark::O));

        let violations = TimelineInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameState::new();

        type TwoInvariants = (SingleStepInvariant, PointerInBoundsInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
