use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_unless_friendly;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    for to in knight_targets(from) {
        push_unless_friendly(game_state, color, from, to, out);
    }
}
