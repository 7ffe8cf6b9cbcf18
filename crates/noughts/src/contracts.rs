//! Contract-based validation for move application.
//!
//! Contracts formalize Hoare-style reasoning over state transitions:
//! {P} action {Q}. Preconditions are checked before every move;
//! postconditions (the composed invariant set) in debug builds.

use crate::action::{Move, MoveError};
use crate::engine::GameInProgress;
use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// Verifies that the transition maintained the system invariants.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that the move targets an empty cell.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().is_empty(action.position) {
            Ok(())
        } else {
            Err(MoveError::Occupied(action.position))
        }
    }
}

/// Contract for move application.
///
/// Precondition: the target cell is empty. Range and turn order need no
/// runtime check here - positions are a closed enum and the engine stamps
/// the current player as the mover.
///
/// Postconditions:
/// - Board cells are monotonic (marks are never removed)
/// - Turns alternate starting from X
/// - History matches the board
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        CellIsEmpty::check(action, game)
    }

    fn post(
        _before: &GameInProgress,
        after: &GameInProgress,
    ) -> Result<(), Vec<InvariantViolation>> {
        EngineInvariants::check_all(after)
    }
}
