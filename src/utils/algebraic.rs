//! Square names in algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! squares. Row 0 is rank 8, so `a8` is `(0, 0)` and `h1` is `(7, 7)`.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Square, BOARD_SIZE};

/// Convert an algebraic square name (for example: "e4") to a square.
pub fn algebraic_to_square(name: &str) -> ChessResult<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquareName(name.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquareName(name.to_owned()));
    }

    let col = i32::from(file - b'a');
    let row = i32::from(BOARD_SIZE) - 1 - i32::from(rank - b'1');
    Square::new(row, col).ok_or_else(|| ChessError::InvalidSquareName(name.to_owned()))
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col());
        let rank = char::from(b'8' - self.row());
        write!(f, "{file}{rank}")
    }
}
