//! Canonical chess-rule constants.
//!
//! Start rows, promotion rows, back-rank layout and the promotion choices
//! offered to a pawn reaching the far edge of the board.

use crate::game_state::chess_types::{Color, PieceKind};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Officer layout from column 0 to column 7, identical for both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Promotion choices in generation order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Row holding a color's officers at the start of the game.
#[inline]
pub const fn home_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Row holding a color's pawns at the start of the game.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row on which a color's pawns promote.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    home_row(color.opposite())
}

/// Row step of a pawn advance: White moves toward row 0.
#[inline]
pub const fn pawn_direction(color: Color) -> i32 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}
