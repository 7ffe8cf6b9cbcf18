//! History consistency invariant: history length matches marked cells.

use super::Invariant;
use crate::engine::GameInProgress;
use crate::types::Cell;

/// Invariant: history length equals the number of marked cells.
///
/// Every move in history corresponds to exactly one marked cell. No moves
/// are missing, no cells are marked without a move.
pub struct HistoryConsistent;

impl Invariant<GameInProgress> for HistoryConsistent {
    fn holds(game: &GameInProgress) -> bool {
        let marked = game
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();

        game.history().len() == marked
    }

    fn description() -> &'static str {
        "History length matches the number of marked cells"
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
        assert!(HistoryConsistent::holds(&game));
    }

    #[test]
    fn test_moves_stay_consistent() {
        let positions = [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ];

        if let Ok(GameTransition::InProgress(game)) = GameInProgress::replay(&positions) {
            assert!(HistoryConsistent::holds(&game));
            assert_eq!(game.history().len(), 4);
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let game = GameInProgress::new();

        if let Ok(GameTransition::InProgress(mut game)) = game.make_move(Position::Center) {
            // Mark a cell without a matching history entry
            game.board.set(Position::TopLeft, Cell::Marked(Player::O));

            assert!(!HistoryConsistent::holds(&game));
        } else {
            panic!("Expected in-progress game");
        }
    }
}
