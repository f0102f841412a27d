//! King steps and castling.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_unless_friendly;
use crate::move_generation::move_generator::CastlingGeneration;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::rook_moves::ray_squares;

pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    castling: CastlingGeneration,
    out: &mut Vec<ChessMove>,
) {
    for to in king_targets(from) {
        push_unless_friendly(game_state, color, from, to, out);
    }

    if castling == CastlingGeneration::Include {
        generate_castling_moves(game_state, from, out);
    }
}

fn generate_castling_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    for kingside in [true, false] {
        if can_castle(game_state, from, kingside) {
            let step = if kingside { 2 } else { -2 };
            if let Some(to) = from.offset(0, step) {
                out.push(ChessMove::new(from, to));
            }
        }
    }
}

/// Whether the king on `king_square` may castle toward the kingside (column 7)
/// or queenside (column 0) corner.
///
/// Requires an unmoved rook of the king's color on that corner, an unmoved
/// king that is not in check, empty squares strictly between them, and no
/// attack on the king's start, transit and destination squares. The king's
/// destination, two columns over, must lie strictly between its start and
/// the rook.
pub fn can_castle(game_state: &GameState, king_square: Square, kingside: bool) -> bool {
    let Some(king) = game_state.piece_at(king_square) else {
        return false;
    };
    if king.kind != PieceKind::King || king.has_moved {
        return false;
    }
    let color = king.color;

    let (rook_col, step) = if kingside {
        (KINGSIDE_ROOK_COL, 1)
    } else {
        (QUEENSIDE_ROOK_COL, -1)
    };

    let Some(rook_square) = Square::new(i32::from(king_square.row()), i32::from(rook_col)) else {
        return false;
    };
    let rook_ready = game_state
        .piece_at(rook_square)
        .is_some_and(|rook| rook.is_kind(PieceKind::Rook, color) && !rook.has_moved);
    if !rook_ready {
        return false;
    }

    let Some(destination) = king_square.offset(0, 2 * step) else {
        return false;
    };
    let rook_beyond_destination = if kingside {
        rook_col > destination.col()
    } else {
        rook_col < destination.col()
    };
    if !rook_beyond_destination {
        return false;
    }

    // Not currently in check.
    if is_square_attacked(game_state, king_square, color) {
        return false;
    }

    let path_clear = ray_squares(king_square, (0, step))
        .take_while(|square| *square != rook_square)
        .all(|square| game_state.piece_at(square).is_none());
    if !path_clear {
        return false;
    }

    ray_squares(king_square, (0, step))
        .take(2)
        .all(|square| !is_square_attacked(game_state, square, color))
}
