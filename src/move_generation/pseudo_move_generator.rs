//! Pseudo-legal move generation: raw piece-movement rules, ignoring whether
//! the move leaves the mover's own king in check.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::CastlingGeneration;
use crate::moves::move_descriptions::ChessMove;

/// Raw moves of the piece on `square`; empty when the square is empty.
pub fn generate_pseudo_moves(
    game_state: &GameState,
    square: Square,
    castling: CastlingGeneration,
) -> Vec<ChessMove> {
    let Some(piece) = game_state.piece_at(square) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, square, color, &mut out),
        PieceKind::Knight => generate_knight_moves(game_state, square, color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(game_state, square, color, &mut out),
        PieceKind::Rook => generate_rook_moves(game_state, square, color, &mut out),
        PieceKind::Queen => generate_queen_moves(game_state, square, color, &mut out),
        PieceKind::King => generate_king_moves(game_state, square, color, castling, &mut out),
    }
    out
}
