//! Tests for board positions.

use noughts::{Board, Cell, Player, Position};

#[test]
fn test_number_round_trip() {
    for n in 1..=9 {
        let pos = Position::from_number(n).expect("1-9 are valid position numbers");
        assert_eq!(pos.number(), n);
    }
}

#[test]
fn test_out_of_band_numbers() {
    assert_eq!(Position::from_number(0), None);
    assert_eq!(Position::from_number(10), None);
    assert_eq!(Position::from_number(u8::MAX), None);
}

#[test]
fn test_index_conversions() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);

    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_number_and_index_agree() {
    // 1-9 numbering is the 0-8 row-major index shifted by one
    assert_eq!(Position::from_number(1), Position::from_index(0));
    assert_eq!(Position::from_number(5), Position::from_index(4));
    assert_eq!(Position::from_number(9), Position::from_index(8));
}

#[test]
fn test_labels() {
    assert_eq!(Position::TopLeft.label(), "Top-left");
    assert_eq!(Position::Center.to_string(), "Center");
}

#[test]
fn test_valid_moves_on_empty_board() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board).len(), 9);
}

#[test]
fn test_valid_moves_filters_marked_cells() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Cell::Marked(Player::X));
    board.set(Position::Center, Cell::Marked(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
