//! Application state and logic.

use noughts::{Game, GameState};
use tracing::debug;

const OPENING_STATUS: &str = "Player X's turn. Press 1-9 to place a mark.";

/// Main application state.
pub struct App {
    game: Game,
    status: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            status: OPENING_STATUS.to_string(),
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Applies a move at a 1-9 position number.
    ///
    /// A rejected move leaves the game untouched and turns into a retry
    /// prompt in the status bar.
    pub fn make_move(&mut self, number: u8) {
        debug!(number, "applying move");

        match self.game.make_move(number) {
            Ok(()) => {
                let state = self.game.state();
                self.status = if state.is_over() {
                    format!(
                        "{} Press 'r' for a new round or 'q' to quit.",
                        state.status_line()
                    )
                } else {
                    state.status_line()
                };
            }
            Err(e) => {
                self.status = format!("Invalid move: {}. Try again.", e);
            }
        }
    }

    /// Starts a fresh round.
    pub fn restart(&mut self) {
        debug!("restarting round");
        self.game.restart();
        self.status = OPENING_STATUS.to_string();
    }
}
