//! Contract-based validation for placing a mark.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::Move;
use crate::error::{BoardError, MoveError};
use crate::game::Game;
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::rules;
use crate::variant::Variant;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: nobody has completed a line on the current board.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`MoveError::GameOver`] if the current board has a winner.
    #[instrument(skip(game))]
    pub fn check<V: Variant>(game: &Game<V>) -> Result<(), MoveError> {
        match rules::winner_of(game.current_snapshot()) {
            Some(winner) => Err(MoveError::GameOver { winner }),
            None => Ok(()),
        }
    }
}

/// Precondition: the target cell exists and is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`BoardError::CellOccupied`] or [`BoardError::IndexOutOfBounds`].
    #[instrument(skip(game))]
    pub fn check<V: Variant>(mov: &Move, game: &Game<V>) -> Result<(), MoveError> {
        if game.current_snapshot().cell_at(mov.index)?.is_empty() {
            Ok(())
        } else {
            Err(BoardError::CellOccupied { index: mov.index }.into())
        }
    }
}

/// Precondition: it must be the mark's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongPlayer`] if `mov.mark` is not to move.
    #[instrument(skip(game))]
    pub fn check<V: Variant>(mov: &Move, game: &Game<V>) -> Result<(), MoveError> {
        if mov.mark != game.current_player() {
            Err(MoveError::WrongPlayer { mark: mov.mark })
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - No winner on the current board
/// - Target cell exists and is empty
/// - Must be the mark's turn
///
/// Postconditions:
/// - History grew by exactly one snapshot past the old position
/// - Every history invariant still holds
pub struct MoveContract;

impl<V: Variant> Contract<Game<V>, Move> for MoveContract {
    fn pre(game: &Game<V>, action: &Move) -> Result<(), MoveError> {
        NoWinnerYet::check(game)?;
        CellIsEmpty::check(action, game)?;
        PlayersTurn::check(action, game)?;
        Ok(())
    }

    fn post(before: &Game<V>, after: &Game<V>) -> Result<(), MoveError> {
        let expected = before.history().position() + 1;
        if after.history().position() != expected || after.history().len() != expected + 1 {
            warn!(
                expected,
                position = after.history().position(),
                len = after.history().len(),
                "History did not advance by one snapshot"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history did not advance by one snapshot".to_string(),
            ));
        }

        HistoryInvariants::check_all(after.history()).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
