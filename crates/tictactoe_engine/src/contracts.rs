//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style: {P} action {Q}.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, MoveInvariants};
use super::state::GameState;
use tracing::warn;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if the square is taken.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Postcondition: exactly one move was appended and earlier moves are intact.
pub struct ExtendsHistory;

impl ExtendsHistory {
    /// Returns true if `after` is `before` plus one move.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        after.move_count() == before.move_count() + 1
            && after.history().starts_with(before.history())
    }
}

/// Contract for applying a move.
///
/// Preconditions:
/// - Square must be empty (range is guaranteed by [`Move`] holding a `Position`)
///
/// Postconditions:
/// - History grew by exactly one move
/// - History and board agree, no position repeats
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        SquareIsEmpty::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !ExtendsHistory::holds(before, after) {
            warn!(
                before = before.move_count(),
                after = after.move_count(),
                "History not extended by one move"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one move".to_string(),
            ));
        }

        MoveInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
