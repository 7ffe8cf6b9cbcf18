//! Tests for the unified GameState contract and the Game facade.

use noughts::{Game, GameState, MoveError, Outcome, Player, Position};

fn finished_win() -> GameState {
    // X:1, O:4, X:2, O:5, X:3 - X takes the top row
    let mut state = GameState::new_game();
    for n in [1, 4, 2, 5, 3] {
        state = state.play(n).expect("Valid move");
    }
    state
}

#[test]
fn test_new_game() {
    let state = GameState::new_game();

    assert_eq!(state.to_move(), Some(Player::X));
    assert_eq!(state.outcome(), None);
    assert!(!state.is_over());
    assert!(state.history().is_empty());
    assert_eq!(state.status_line(), "Player X's turn.");
}

#[test]
fn test_every_position_succeeds_once_on_fresh_game() {
    for n in 1..=9 {
        let state = GameState::new_game();
        let after = state.play(n).expect("Fresh cell must accept a move");
        assert_eq!(after.history().len(), 1);

        // The receiver was not mutated
        assert!(state.history().is_empty());
    }
}

#[test]
fn test_second_move_at_same_position_fails() {
    let state = GameState::new_game().play(5).expect("Valid move");
    let snapshot = state.clone();

    let result = state.play(5);
    assert_eq!(result.unwrap_err(), MoveError::Occupied(Position::Center));

    // State unchanged by the rejected move
    assert_eq!(state, snapshot);
    assert_eq!(state.to_move(), Some(Player::O));
}

#[test]
fn test_out_of_range_positions_fail() {
    let state = GameState::new_game();
    let snapshot = state.clone();

    for n in [0, 10, 42, 200] {
        let result = state.play(n);
        assert_eq!(result.unwrap_err(), MoveError::OutOfRange(n));
    }

    assert_eq!(state, snapshot);
}

#[test]
fn test_moves_rejected_after_win() {
    let state = finished_win();
    assert_eq!(state.outcome(), Some(Outcome::Winner(Player::X)));
    assert_eq!(state.winner(), Some(Player::X));
    assert_eq!(state.to_move(), None);
    assert_eq!(state.status_line(), "Player X wins!");

    let snapshot = state.clone();
    for n in 1..=9 {
        assert_eq!(state.play(n).unwrap_err(), MoveError::GameOver);
    }
    assert_eq!(state, snapshot);
}

#[test]
fn test_moves_rejected_after_draw() {
    let mut state = GameState::new_game();
    for n in [1, 2, 3, 5, 8, 4, 6, 9, 7] {
        state = state.play(n).expect("Valid move");
    }

    assert_eq!(state.outcome(), Some(Outcome::Draw));
    assert_eq!(state.winner(), None);
    assert_eq!(state.status_line(), "It's a draw!");
    assert_eq!(state.play(1).unwrap_err(), MoveError::GameOver);
}

#[test]
fn test_turn_flips_only_on_non_terminal_moves() {
    let mut state = GameState::new_game();
    assert_eq!(state.to_move(), Some(Player::X));

    state = state.play(1).expect("Valid move");
    assert_eq!(state.to_move(), Some(Player::O));

    state = state.play(4).expect("Valid move");
    assert_eq!(state.to_move(), Some(Player::X));

    state = state.play(2).expect("Valid move");
    state = state.play(5).expect("Valid move");

    // Terminal move: X wins, the turn does not flip to O
    state = state.play(3).expect("Valid move");
    assert_eq!(state.to_move(), None);
    assert_eq!(state.winner(), Some(Player::X));
}

#[test]
fn test_history_records_movers_in_order() {
    let state = finished_win();
    let players: Vec<Player> = state.history().iter().map(|m| m.player).collect();

    assert_eq!(
        players,
        [Player::X, Player::O, Player::X, Player::O, Player::X]
    );
}

#[test]
fn test_state_round_trips_through_serde() {
    let state = finished_win();

    let json = serde_json::to_string(&state).expect("Serializable state");
    let decoded: GameState = serde_json::from_str(&json).expect("Deserializable state");

    assert_eq!(state, decoded);
}

#[test]
fn test_facade_commits_only_on_success() {
    let mut game = Game::new();

    game.make_move(5).expect("Valid move");
    assert_eq!(game.state().to_move(), Some(Player::O));

    let snapshot = game.state().clone();
    assert!(game.make_move(5).is_err());
    assert_eq!(game.state(), &snapshot);
}

#[test]
fn test_facade_restart() {
    let mut game = Game::new();
    for n in [1, 4, 2, 5, 3] {
        game.make_move(n).expect("Valid move");
    }
    assert!(game.state().is_over());

    game.restart();
    assert!(!game.state().is_over());
    assert_eq!(game.state().to_move(), Some(Player::X));
    assert!(game.state().history().is_empty());
}
