//! Pawn capture geometry.

use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Color, Square};

/// The forward diagonals a pawn of `color` on `square` attacks, left column
/// first. Occupancy is not considered.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_row = pawn_direction(color);
    [-1, 1]
        .into_iter()
        .filter_map(move |d_col| square.offset(d_row, d_col))
}
