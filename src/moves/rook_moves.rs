//! Rook ray directions and the ray walker shared by all sliders.

use crate::game_state::chess_types::Square;

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Squares from `square` outward along `(d_row, d_col)` up to the board edge,
/// ignoring occupancy. The caller stops at the first blocker.
pub fn ray_squares(square: Square, (d_row, d_col): (i32, i32)) -> impl Iterator<Item = Square> {
    std::iter::successors(square.offset(d_row, d_col), move |current| {
        current.offset(d_row, d_col)
    })
}
