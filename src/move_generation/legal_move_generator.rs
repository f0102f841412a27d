//! Legal move filter.
//!
//! Generates pseudo-legal moves, tries each one on a clone of the position
//! and keeps those that do not leave the mover's own king in check.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::{CastlingGeneration, MoveGenerator};
use crate::move_generation::pseudo_move_generator::generate_pseudo_moves;
use crate::moves::move_descriptions::ChessMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState, square: Square) -> Vec<ChessMove> {
        generate_legal_moves(game_state, square)
    }
}

/// Legal moves of the piece on `square`.
///
/// Ownership is not checked: the caller must already know the piece belongs
/// to the side to move. The mover is the piece's own color.
///
/// # Panics
///
/// Panics when the mover has no king on the board.
pub fn generate_legal_moves(game_state: &GameState, square: Square) -> Vec<ChessMove> {
    let Some(piece) = game_state.piece_at(square) else {
        return Vec::new();
    };

    generate_pseudo_moves(game_state, square, CastlingGeneration::Include)
        .into_iter()
        .filter(|mv| {
            let mut next = game_state.clone();
            next.apply_move(*mv);
            !next.is_in_check(piece.color)
        })
        .collect()
}

/// Legal moves of every piece of the side to move.
#[inline]
pub fn generate_all_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    LegalMoveGenerator.generate_all_legal_moves(game_state)
}
