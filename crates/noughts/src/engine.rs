//! Typestate game engine.
//!
//! The game phase is encoded in the type system: only [`GameInProgress`]
//! accepts moves, and [`GameFinished`] always carries an outcome rather
//! than an `Option` of one.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player completed a line.
    Winner(Player),
    /// The board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - accepts moves.
///
/// Invariants enforced by construction:
/// - X moves first and turns alternate
/// - No outcome yet (the outcome lives in [`GameFinished`])
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            to_move: Player::X,
        }
    }

    /// Places the current player's mark at `pos`, consuming self and
    /// transitioning to the next state.
    ///
    /// The outcome is recomputed in a fixed order: place the mark, check a
    /// win for the mover, then check for a draw; only a continuing game
    /// switches the turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(position = %pos, player = %self.to_move))]
    pub fn make_move(self, pos: Position) -> Result<GameTransition, MoveError> {
        let action = Move::new(self.to_move, pos);
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        let mover = action.player;
        game.board.set(pos, Cell::Marked(mover));
        game.history.push(action);

        if rules::check_win(&game.board, mover) {
            return Ok(GameTransition::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Winner(mover),
            }));
        }

        if rules::check_draw(&game.board) {
            return Ok(GameTransition::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Draw,
            }));
        }

        game.to_move = mover.opponent();

        #[cfg(debug_assertions)]
        debug_assert!(
            MoveContract::post(&before, &game).is_ok(),
            "move postcondition violated"
        );

        Ok(GameTransition::InProgress(game))
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the positions still open for a move.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays a game from a position sequence (X moves first).
    ///
    /// # Errors
    ///
    /// Propagates any rejected move; positions left over after a terminal
    /// move fail with [`MoveError::GameOver`].
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<GameTransition, MoveError> {
        let mut game = GameInProgress::new();

        for (i, &pos) in positions.iter().enumerate() {
            match game.make_move(pos)? {
                GameTransition::InProgress(next) => game = next,
                GameTransition::Finished(finished) => {
                    if i + 1 < positions.len() {
                        return Err(MoveError::GameOver);
                    }
                    return Ok(GameTransition::Finished(finished));
                }
            }
        }

        Ok(GameTransition::InProgress(game))
    }
}

impl Default for GameInProgress {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// There is no move-accepting method on this type: once a game is won or
/// drawn, further moves are unrepresentable here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFinished {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome. Always present, never an `Option`.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the winner, if the game was not a draw.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Starts a fresh round, consuming the finished game.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameInProgress {
        GameInProgress::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Type
// ─────────────────────────────────────────────────────────────

/// Result of applying a move - an explicit state transition.
#[derive(Debug)]
pub enum GameTransition {
    /// Game continues with the other player to move.
    InProgress(GameInProgress),
    /// Game ended in a win or draw.
    Finished(GameFinished),
}
