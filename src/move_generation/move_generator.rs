//! Move generation seam.
//!
//! `MoveGenerator` lets perft and other whole-tree walkers run against the
//! real legal generator or against mocks in tests.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// Whether king move generation may append castling moves.
///
/// Attack detection must always pass `Exclude`: castling eligibility asks
/// whether squares are attacked, so letting castling feed back into attack
/// queries would recurse without end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingGeneration {
    Include,
    Exclude,
}

pub trait MoveGenerator {
    /// Legal moves of the piece on `square`, in generation order. Empty when
    /// the square is empty. The piece is not required to belong to the side
    /// to move.
    fn generate_legal_moves(&self, game_state: &GameState, square: Square) -> Vec<ChessMove>;

    /// Legal moves of every piece of the side to move, squares in row-major
    /// order.
    fn generate_all_legal_moves(&self, game_state: &GameState) -> Vec<ChessMove> {
        let side = game_state.side_to_move();
        let mut out = Vec::with_capacity(64);
        for (square, piece) in game_state.pieces() {
            if piece.color == side {
                out.extend(self.generate_legal_moves(game_state, square));
            }
        }
        out
    }
}
