use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::CastlingGeneration;
use crate::move_generation::pseudo_move_generator::generate_pseudo_moves;
use crate::moves::pawn_moves::pawn_attacks;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state
        .pieces()
        .find(|(_, piece)| piece.is_kind(PieceKind::King, color))
        .map(|(square, _)| square)
}

/// # Panics
///
/// Panics when `color` has no king on the board. Every position built by
/// the public constructors has one, so this is a broken invariant.
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        panic!("no {color} king on the board");
    };
    is_square_attacked(game_state, king_sq, color)
}

/// Whether any piece of `defender`'s opponent attacks `square`.
///
/// Pawns attack their forward diagonals whatever stands there. Every other
/// piece attacks the destinations of its pseudo-legal moves, generated with
/// castling excluded.
pub fn is_square_attacked(game_state: &GameState, square: Square, defender: Color) -> bool {
    let attacker = defender.opposite();

    game_state
        .pieces()
        .filter(|(_, piece)| piece.color == attacker)
        .any(|(from, piece)| match piece.kind {
            PieceKind::Pawn => pawn_attacks(attacker, from).any(|target| target == square),
            _ => generate_pseudo_moves(game_state, from, CastlingGeneration::Exclude)
                .iter()
                .any(|mv| mv.to == square),
        })
}
