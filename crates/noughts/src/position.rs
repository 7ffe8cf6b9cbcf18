//! Board positions for the 3x3 grid.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board, numbered 1-9 in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (1).
    TopLeft,
    /// Top-center (2).
    TopCenter,
    /// Top-right (3).
    TopRight,
    /// Middle-left (4).
    MiddleLeft,
    /// Center (5).
    Center,
    /// Middle-right (6).
    MiddleRight,
    /// Bottom-left (7).
    BottomLeft,
    /// Bottom-center (8).
    BottomCenter,
    /// Bottom-right (9).
    BottomRight,
}

impl Position {
    /// Parses a 1-9 position number.
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        if (1..=9).contains(&number) {
            Self::from_index(number as usize - 1)
        } else {
            None
        }
    }

    /// Returns the 1-9 position number.
    pub fn number(self) -> u8 {
        self.to_index() as u8 + 1
    }

    /// Creates a position from a 0-8 row-major index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Converts the position to a 0-8 row-major index.
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Display label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Returns the positions whose cells are empty on `board`.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
