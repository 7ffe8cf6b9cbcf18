//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::engine::GameInProgress;
use crate::types::{Board, Cell};

/// Invariant: board cells are monotonic (never overwritten).
///
/// Once a cell transitions from Empty to Marked it never changes. Verified
/// by replaying the move history and comparing against the live board.
pub struct MonotonicBoard;

impl Invariant<GameInProgress> for MonotonicBoard {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            // The cell must be empty before the mark lands
            if reconstructed.get(mov.position) != Cell::Empty {
                return false;
            }

            reconstructed.set(mov.position, Cell::Marked(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameTransition;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_fresh_game_holds() {
        let game = GameInProgress::new();
        assert!(MonotonicBoard::holds(&game));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let positions = [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ];

        if let Ok(GameTransition::InProgress(game)) = GameInProgress::replay(&positions) {
            assert!(MonotonicBoard::holds(&game));
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let game = GameInProgress::new();

        if let Ok(GameTransition::InProgress(mut game)) = game.make_move(Position::Center) {
            // Flip an occupied cell to the other player
            game.board.set(Position::Center, Cell::Marked(Player::O));

            assert!(!MonotonicBoard::holds(&game));
        } else {
            panic!("Expected in-progress game");
        }
    }
}
