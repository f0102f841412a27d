//! Coordinate-notation move text, e.g. `e2e4` or `e7e8q`.
//!
//! Parsing is purely syntactic: the result still has to be matched against
//! the legal moves of a position (see `move_selection::resolve_move`).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::algebraic_to_square;

/// Split coordinate move text into origin, destination and optional
/// promotion choice. Surrounding whitespace is ignored; the promotion letter
/// may be either case but must name a knight, bishop, rook or queen.
pub fn parse_coordinate_move(text: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let trimmed = text.trim();
    let invalid = || ChessError::InvalidMoveText(text.to_owned());

    if !trimmed.is_ascii() || !(4..=5).contains(&trimmed.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&trimmed[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&trimmed[2..4]).map_err(|_| invalid())?;

    let promotion = match trimmed[4..].chars().next() {
        None => None,
        Some(letter) => match PieceKind::from_letter(letter) {
            Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)) => {
                Some(kind)
            }
            _ => return Err(invalid()),
        },
    };

    Ok((from, to, promotion))
}

/// Parse coordinate move text straight into a [`ChessMove`].
pub fn coordinate_to_move(text: &str) -> ChessResult<ChessMove> {
    let (from, to, promotion) = parse_coordinate_move(text)?;
    Ok(ChessMove { from, to, promotion })
}
