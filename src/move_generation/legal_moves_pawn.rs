//! Pawn move generation: pushes, double pushes, captures, en passant and
//! promotion expansion.

use crate::game_state::chess_rules::{pawn_direction, pawn_start_row, promotion_row, PROMOTION_KINDS};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    let direction = pawn_direction(color);

    if let Some(one_step) = from.offset(direction, 0) {
        if game_state.piece_at(one_step).is_none() {
            push_pawn_move(color, from, one_step, out);

            if from.row() == pawn_start_row(color) {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(ChessMove::new(from, two_step));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(color, from) {
        if game_state
            .piece_at(to)
            .is_some_and(|target| target.color != color)
        {
            push_pawn_move(color, from, to, out);
        }
    }

    if let Some(to) = en_passant_target(game_state, from, color) {
        out.push(ChessMove::new(from, to));
    }
}

/// Landing square of an en passant capture by the pawn on `from`, available
/// only right after an enemy pawn advanced two squares to land beside it.
fn en_passant_target(game_state: &GameState, from: Square, color: Color) -> Option<Square> {
    let last = game_state.last_move()?;
    if last.row_distance() != 2 || last.col_distance() != 0 {
        return None;
    }

    let passed = game_state.piece_at(last.to)?;
    if !passed.is_kind(PieceKind::Pawn, color.opposite()) {
        return None;
    }

    if last.to.row() != from.row() || last.to.col().abs_diff(from.col()) != 1 {
        return None;
    }

    from.offset(
        pawn_direction(color),
        i32::from(last.to.col()) - i32::from(from.col()),
    )
}

#[inline]
fn push_pawn_move(color: Color, from: Square, to: Square, out: &mut Vec<ChessMove>) {
    if to.row() == promotion_row(color) {
        for kind in PROMOTION_KINDS {
            out.push(ChessMove::with_promotion(from, to, kind));
        }
    } else {
        out.push(ChessMove::new(from, to));
    }
}
