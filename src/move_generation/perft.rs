//! Perft: exhaustive legal-move tree walk used to validate move generation
//! against published node counts.

use std::ops::AddAssign;

use crate::game_state::chess_rules::promotion_row;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::ChessMove;

/// Leaf statistics of a perft walk. Everything but `nodes` classifies the
/// move that reached the leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl AddAssign for PerftCounts {
    fn add_assign(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    for mv in generator.generate_all_legal_moves(game_state) {
        counts += perft_move(generator, game_state, mv, depth);
    }
    counts
}

/// Per-root-move breakdown of [`perft`], in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Vec<(ChessMove, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .generate_all_legal_moves(game_state)
        .into_iter()
        .map(|mv| (mv, perft_move(generator, game_state, mv, depth)))
        .collect()
}

fn perft_move<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    mv: ChessMove,
    depth: u8,
) -> PerftCounts {
    let mut next = game_state.clone();
    next.apply_move(mv);

    if depth > 1 {
        return perft(generator, &next, depth - 1);
    }

    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    let Some(mover) = game_state.piece_at(mv.from) else {
        return counts;
    };
    let is_pawn = mover.kind == PieceKind::Pawn;
    let en_passant = is_pawn && mv.col_distance() != 0 && game_state.piece_at(mv.to).is_none();

    if en_passant || game_state.piece_at(mv.to).is_some() {
        counts.captures += 1;
    }
    if en_passant {
        counts.en_passant += 1;
    }
    if mover.kind == PieceKind::King && mv.col_distance() == 2 {
        counts.castles += 1;
    }
    if is_pawn && mv.to.row() == promotion_row(mover.color) {
        counts.promotions += 1;
    }
    if next.is_in_check(next.side_to_move()) {
        counts.checks += 1;
    }

    counts
}
