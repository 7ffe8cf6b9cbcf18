//! Move records and the errors a rejected move can raise.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A single applied move: a player's mark at a position.
///
/// Callers supply only a position; the engine stamps the current player as
/// the mover. Moves are kept in the game history so the turn sequence can
/// be audited and replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who placed the mark.
    pub player: Player,
    /// The position of the mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move record.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error raised when a move is rejected.
///
/// Every variant is locally recoverable and leaves the game state unchanged;
/// the caller decides how to re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position number is outside 1-9.
    #[display("Position {} is out of range (valid positions are 1-9)", _0)]
    OutOfRange(u8),

    /// The targeted cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The game has already ended in a win or draw.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
