use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;
use crate::moves::rook_moves::ray_squares;

/// Push `from -> to` unless a piece of `color` already stands on `to`.
#[inline]
pub fn push_unless_friendly(
    game_state: &GameState,
    color: Color,
    from: Square,
    to: Square,
    out: &mut Vec<ChessMove>,
) {
    match game_state.piece_at(to) {
        Some(target) if target.color == color => {}
        _ => out.push(ChessMove::new(from, to)),
    }
}

/// Ray-cast from `from` along each direction, stopping before a friendly
/// piece and on (including) an enemy piece.
pub fn push_slides(
    game_state: &GameState,
    color: Color,
    from: Square,
    directions: &[(i32, i32)],
    out: &mut Vec<ChessMove>,
) {
    for direction in directions {
        for to in ray_squares(from, *direction) {
            match game_state.piece_at(to) {
                None => out.push(ChessMove::new(from, to)),
                Some(blocker) => {
                    if blocker.color != color {
                        out.push(ChessMove::new(from, to));
                    }
                    break;
                }
            }
        }
    }
}
