//! Uniformly random self-play.
//!
//! Handy as a smoke test of the rules: every position it reaches came from
//! legal moves only, so board invariants can be checked after each ply.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::ChessMove;

/// Play up to `max_plies` random legal moves on `game_state` and return them
/// in order. Stops early when the side to move has no legal move.
pub fn random_playout<R: Rng + ?Sized>(
    game_state: &mut GameState,
    max_plies: usize,
    rng: &mut R,
) -> Vec<ChessMove> {
    let generator = LegalMoveGenerator;
    let mut played = Vec::with_capacity(max_plies);

    while played.len() < max_plies {
        let legal_moves = generator.generate_all_legal_moves(game_state);
        let Some(&mv) = legal_moves.as_slice().choose(rng) else {
            debug!(ply = played.len(), side = %game_state.side_to_move(), "no legal moves left");
            break;
        };

        game_state.apply_move(mv);
        played.push(mv);
    }

    played
}
