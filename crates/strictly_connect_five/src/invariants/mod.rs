//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
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
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// A `holds` check paired with its description.
type Check<S> = (fn(&S) -> bool, fn() -> &'static str);

fn collect<S>(checks: &[Check<S>], state: &S) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| InvariantViolation::new(description()))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(
            &[
                (<I1 as Invariant<S>>::holds, <I1 as Invariant<S>>::description),
                (<I2 as Invariant<S>>::holds, <I2 as Invariant<S>>::description),
                (<I3 as Invariant<S>>::holds, <I3 as Invariant<S>>::description),
            ],
            state,
        )
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(
            &[
                (<I1 as Invariant<S>>::holds, <I1 as Invariant<S>>::description),
                (<I2 as Invariant<S>>::holds, <I2 as Invariant<S>>::description),
            ],
            state,
        )
    }
}

mod alternating_turn;
mod cursor_in_range;
mod single_cell_diff;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_range::CursorInRangeInvariant;
pub use single_cell_diff::SingleCellDiffInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    SingleCellDiffInvariant,
    AlternatingTurnInvariant,
    CursorInRangeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Flat, Game, History, Mark, Snapshot};

    #[test]
    fn test_invariant_set_holds_for_empty_history() {
        let history = History::<Flat>::new();
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut game = Game::<Flat>::new();
        for index in [12, 0, 6, 1] {
            game.place(index).unwrap();
        }
        game.jump_to(2).unwrap();
        game.place(24).unwrap();

        assert!(HistoryInvariants::check_all(game.history()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut history = History::<Flat>::new();
        // Two O marks appended in one step: wrong count and wrong mark.
        let corrupt = Snapshot::from_moves([(0, Mark::O), (1, Mark::O)]).unwrap();
        history.snapshots.push(corrupt);
        history.position = 1;

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            <SingleCellDiffInvariant as Invariant<History<Flat>>>::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let history = History::<Flat>::new();

        type TwoInvariants = (SingleCellDiffInvariant, CursorInRangeInvariant);
        assert!(TwoInvariants::check_all(&history).is_ok());
    }
}
