//! Move value type.
//!
//! A `ChessMove` is an immutable origin/destination pair plus an optional
//! promotion choice. Special-move handling (castling rook relocation, en
//! passant capture) is inferred by `apply_move` from the board, so the move
//! itself carries no flags.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Absolute column distance travelled.
    #[inline]
    pub fn col_distance(&self) -> u8 {
        self.from.col().abs_diff(self.to.col())
    }

    /// Absolute row distance travelled.
    #[inline]
    pub fn row_distance(&self) -> u8 {
        self.from.row().abs_diff(self.to.row())
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ChessMove;
    use crate::game_state::chess_types::{PieceKind, Square};

    #[test]
    fn displays_in_coordinate_notation() {
        let e2 = Square::new(6, 4).unwrap();
        let e4 = Square::new(4, 4).unwrap();
        assert_eq!(ChessMove::new(e2, e4).to_string(), "e2e4");

        let e7 = Square::new(1, 4).unwrap();
        let e8 = Square::new(0, 4).unwrap();
        assert_eq!(
            ChessMove::with_promotion(e7, e8, PieceKind::Knight).to_string(),
            "e7e8n"
        );
    }

    #[test]
    fn distances_are_absolute() {
        let mv = ChessMove::new(Square::new(7, 4).unwrap(), Square::new(7, 2).unwrap());
        assert_eq!(mv.col_distance(), 2);
        assert_eq!(mv.row_distance(), 0);
    }
}
