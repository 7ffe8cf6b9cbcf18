//! Unified, serializable game state and the mutable facade over it.

use crate::action::{Move, MoveError};
use crate::engine::{GameFinished, GameInProgress, GameTransition, Outcome};
use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state in any phase.
///
/// Serializable view over the typestate engine. [`GameState::apply_move`]
/// is a pure function of (state, position): the receiver is untouched on
/// every error path and a new state is returned on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Game accepting moves.
    InProgress {
        /// The board.
        board: Board,
        /// Player whose turn it is.
        to_move: Player,
        /// Moves applied so far.
        history: Vec<Move>,
    },
    /// Game ended in a win or draw.
    Finished {
        /// The board.
        board: Board,
        /// The terminal outcome.
        outcome: Outcome,
        /// Moves applied over the whole game.
        history: Vec<Move>,
    },
}

impl GameState {
    /// Creates a fresh game: empty board, X to move, no outcome.
    #[instrument]
    pub fn new_game() -> Self {
        GameInProgress::new().into()
    }

    /// Applies the current player's mark at `pos`, returning the new state.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if the outcome is already decided, or
    /// [`MoveError::Occupied`] if the cell holds a mark. The receiver is
    /// unchanged either way.
    #[instrument(skip(self))]
    pub fn apply_move(&self, pos: Position) -> Result<Self, MoveError> {
        match self {
            GameState::InProgress {
                board,
                to_move,
                history,
            } => {
                let game = GameInProgress {
                    board: board.clone(),
                    history: history.clone(),
                    to_move: *to_move,
                };

                Ok(game.make_move(pos)?.into())
            }
            GameState::Finished { .. } => Err(MoveError::GameOver),
        }
    }

    /// Parses a 1-9 position number and applies the move.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] for numbers outside 1-9, otherwise as
    /// [`GameState::apply_move`].
    #[instrument(skip(self))]
    pub fn play(&self, number: u8) -> Result<Self, MoveError> {
        let pos = Position::from_number(number).ok_or(MoveError::OutOfRange(number))?;
        self.apply_move(pos)
    }

    /// Returns the board for any phase.
    pub fn board(&self) -> &Board {
        match self {
            GameState::InProgress { board, .. } => board,
            GameState::Finished { board, .. } => board,
        }
    }

    /// Returns the move history for any phase.
    pub fn history(&self) -> &[Move] {
        match self {
            GameState::InProgress { history, .. } => history,
            GameState::Finished { history, .. } => history,
        }
    }

    /// Returns the player to move, if the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            GameState::InProgress { to_move, .. } => Some(*to_move),
            GameState::Finished { .. } => None,
        }
    }

    /// Returns the terminal outcome, if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameState::InProgress { .. } => None,
            GameState::Finished { outcome, .. } => Some(*outcome),
        }
    }

    /// Returns the winner, if the game ended in a win.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|outcome| outcome.winner())
    }

    /// Returns true once the outcome is decided.
    pub fn is_over(&self) -> bool {
        matches!(self, GameState::Finished { .. })
    }

    /// Human-readable status for display.
    pub fn status_line(&self) -> String {
        match self {
            GameState::InProgress { to_move, .. } => {
                format!("Player {}'s turn.", to_move)
            }
            GameState::Finished {
                outcome: Outcome::Winner(player),
                ..
            } => format!("Player {} wins!", player),
            GameState::Finished {
                outcome: Outcome::Draw,
                ..
            } => "It's a draw!".to_string(),
        }
    }
}

impl From<GameInProgress> for GameState {
    fn from(game: GameInProgress) -> Self {
        GameState::InProgress {
            to_move: game.to_move,
            history: game.history,
            board: game.board,
        }
    }
}

impl From<GameFinished> for GameState {
    fn from(game: GameFinished) -> Self {
        GameState::Finished {
            outcome: game.outcome,
            history: game.history,
            board: game.board,
        }
    }
}

impl From<GameTransition> for GameState {
    fn from(transition: GameTransition) -> Self {
        match transition {
            GameTransition::InProgress(game) => game.into(),
            GameTransition::Finished(game) => game.into(),
        }
    }
}

/// Mutable game facade for interactive front ends.
///
/// Wraps a [`GameState`] behind the classic make-a-move interface: a failed
/// move leaves the wrapped state untouched, a successful one commits it.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    pub fn new() -> Self {
        Self {
            state: GameState::new_game(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a move by 1-9 position number.
    ///
    /// # Errors
    ///
    /// As [`GameState::play`]; the wrapped state is unchanged on error.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, number: u8) -> Result<(), MoveError> {
        self.state = self.state.play(number)?;
        Ok(())
    }

    /// Discards the current round and starts a fresh one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("starting fresh round");
        self.state = GameState::new_game();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
