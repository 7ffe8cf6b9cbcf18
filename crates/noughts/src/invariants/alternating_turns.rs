//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::engine::GameInProgress;
use crate::types::Player;

/// Invariant: players alternate turns.
///
/// The move history must show an X, O, X, O, ... pattern, the first move is
/// always X, and the player to move matches the history's parity.
pub struct AlternatingTurns;

impl Invariant<GameInProgress> for AlternatingTurns {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if let Some(first) = history.first() {
            if first.player != Player::X {
                return false;
            }
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
