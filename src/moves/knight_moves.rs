//! Knight jump pattern.

use crate::game_state::chess_types::Square;

/// `(d_row, d_col)` jumps in generation order.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// On-board squares a knight on `square` could jump to, ignoring occupancy.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| square.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_in_the_centre_has_eight_targets() {
        let d4 = Square::new(4, 3).unwrap();
        assert_eq!(knight_targets(d4).count(), 8);
    }

    #[test]
    fn knight_in_a_corner_has_two_targets() {
        let a1 = Square::new(7, 0).unwrap();
        let targets: Vec<Square> = knight_targets(a1).collect();
        assert_eq!(targets, vec![Square::new(6, 2).unwrap(), Square::new(5, 1).unwrap()]);
    }
}
