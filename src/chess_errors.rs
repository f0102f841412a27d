//! Errors used throughout the rules engine.
//!
//! `ChessError` covers the recoverable failure modes: malformed text input
//! (square names, coordinate moves, FEN) and rejected selections at the
//! interactive API boundary. Broken board invariants, such as a side without
//! a king, are programming errors and panic instead of appearing here.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square name outside `a1..h8`.
    #[error("invalid square name: {0:?}")]
    InvalidSquareName(String),

    /// Coordinate-notation move text that could not be read.
    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),

    /// FEN text with a malformed field.
    #[error("invalid FEN: {reason}")]
    InvalidFen { reason: String },

    /// A position that would break the one-king-per-color invariant.
    #[error("position has {count} {color} kings, expected exactly one")]
    KingCount { color: Color, count: usize },

    /// Nothing stands on the selected square.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The selected piece belongs to the side that is not on move.
    #[error("piece on {square} belongs to {color}, but it is {side_to_move}'s turn")]
    NotSideToMove {
        square: Square,
        color: Color,
        side_to_move: Color,
    },

    /// No legal move matches the requested transition.
    #[error("illegal move: {0}")]
    IllegalMove(ChessMove),

    /// Several promotion variants reach the destination and none was chosen.
    #[error("move {from}{to} needs a promotion choice")]
    PromotionChoiceRequired { from: Square, to: Square },
}

pub type ChessResult<T> = Result<T, ChessError>;
