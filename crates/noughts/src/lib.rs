//! Game-state engine for 3x3 noughts and crosses.
//!
//! The engine owns all game state and is the single source of truth for
//! move legality, mutation, and outcome:
//!
//! - [`GameInProgress`] and [`GameFinished`] encode the game phase in the
//!   type system; a finished game has no move-accepting method.
//! - [`GameState`] is a serializable view over the phases, exposing the
//!   new-game / apply-move contract to callers that want a single type.
//! - [`Game`] is a small mutable facade for interactive front ends.
//!
//! # Example
//!
//! ```
//! use noughts::{GameState, Position};
//!
//! let game = GameState::new_game();
//! let game = game.apply_move(Position::Center)?;
//! assert!(!game.is_over());
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod position;
mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, MoveContract};
pub use engine::{GameFinished, GameInProgress, GameTransition, Outcome};
pub use invariants::{
    AlternatingTurns, EngineInvariants, HistoryConsistent, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoard,
};
pub use position::Position;
pub use rules::{check_draw, check_win, check_winner, is_full};
pub use state::{Game, GameState};
pub use types::{Board, Cell, Player};
