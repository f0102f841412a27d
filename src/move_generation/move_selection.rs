//! Turn-checked move selection for interactive callers.
//!
//! `generate_legal_moves` trusts its caller to pick a piece of the side to
//! move. The helpers here are the strict boundary a UI goes through instead:
//! they reject empty squares and pieces of the wrong color, and they resolve
//! a clicked destination into exactly one move, asking for a promotion
//! choice when the destination alone is ambiguous.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::ChessMove;

/// Legal moves of the piece on `square`, which must belong to the side to
/// move.
pub fn select_moves(game_state: &GameState, square: Square) -> ChessResult<Vec<ChessMove>> {
    let piece = game_state
        .piece_at(square)
        .ok_or(ChessError::EmptySquare(square))?;

    if piece.color != game_state.side_to_move() {
        return Err(ChessError::NotSideToMove {
            square,
            color: piece.color,
            side_to_move: game_state.side_to_move(),
        });
    }

    Ok(generate_legal_moves(game_state, square))
}

/// Pick the move among `moves` landing on `to`.
///
/// With `promotion` set, only the variant promoting to that piece matches.
/// Without it, several matches (the four promotion variants) are reported as
/// [`ChessError::PromotionChoiceRequired`].
pub fn resolve_move(
    moves: &[ChessMove],
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<ChessMove> {
    let mut candidates = moves
        .iter()
        .filter(|mv| mv.from == from && mv.to == to)
        .filter(|mv| promotion.is_none() || mv.promotion == promotion);

    let requested = ChessMove { from, to, promotion };
    let first = *candidates.next().ok_or(ChessError::IllegalMove(requested))?;
    if candidates.next().is_some() {
        return Err(ChessError::PromotionChoiceRequired { from, to });
    }
    Ok(first)
}

/// Select, resolve and apply a move for the side to move. Returns the move
/// that was applied.
pub fn play_move(
    game_state: &mut GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<ChessMove> {
    let moves = select_moves(game_state, from)?;
    let mv = resolve_move(&moves, from, to, promotion)?;
    debug!(%mv, side = %game_state.side_to_move(), "playing move");
    game_state.apply_move(mv);
    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::{play_move, resolve_move, select_moves};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::ChessMove;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn promotion_position() -> GameState {
        let mut game_state = GameState::new_empty();
        game_state.place_piece(sq("e1"), Piece::new(PieceKind::King, Color::White));
        game_state.place_piece(sq("g7"), Piece::new(PieceKind::Pawn, Color::White));
        game_state.place_piece(sq("a8"), Piece::new(PieceKind::King, Color::Black));
        game_state
    }

    #[test]
    fn selecting_an_empty_square_fails() {
        let game_state = GameState::new_game();
        assert_eq!(
            select_moves(&game_state, sq("e4")),
            Err(ChessError::EmptySquare(sq("e4")))
        );
    }

    #[test]
    fn selecting_the_opponents_piece_fails() {
        let game_state = GameState::new_game();
        assert_eq!(
            select_moves(&game_state, sq("e7")),
            Err(ChessError::NotSideToMove {
                square: sq("e7"),
                color: Color::Black,
                side_to_move: Color::White,
            })
        );
    }

    #[test]
    fn selecting_own_piece_returns_its_legal_moves() {
        let game_state = GameState::new_game();
        let moves = select_moves(&game_state, sq("b1")).expect("white knight is selectable");
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn promotion_destination_needs_a_choice() {
        let game_state = promotion_position();
        let moves = select_moves(&game_state, sq("g7")).expect("pawn is selectable");
        assert_eq!(moves.len(), 4);

        assert_eq!(
            resolve_move(&moves, sq("g7"), sq("g8"), None),
            Err(ChessError::PromotionChoiceRequired {
                from: sq("g7"),
                to: sq("g8"),
            })
        );
        assert_eq!(
            resolve_move(&moves, sq("g7"), sq("g8"), Some(PieceKind::Rook)),
            Ok(ChessMove::with_promotion(sq("g7"), sq("g8"), PieceKind::Rook))
        );
    }

    #[test]
    fn unreachable_destination_is_illegal() {
        let game_state = GameState::new_game();
        let moves = select_moves(&game_state, sq("e2")).expect("pawn is selectable");
        assert_eq!(
            resolve_move(&moves, sq("e2"), sq("e5"), None),
            Err(ChessError::IllegalMove(ChessMove::new(sq("e2"), sq("e5"))))
        );
    }

    #[test]
    fn play_move_applies_the_chosen_promotion() {
        let mut game_state = promotion_position();

        let played = play_move(&mut game_state, sq("g7"), sq("g8"), Some(PieceKind::Bishop))
            .expect("promotion should be legal");

        assert_eq!(played.promotion, Some(PieceKind::Bishop));
        assert!(game_state
            .piece_at(sq("g8"))
            .is_some_and(|p| p.is_kind(PieceKind::Bishop, Color::White)));
        assert_eq!(game_state.side_to_move(), Color::Black);
    }

    #[test]
    fn failed_play_leaves_the_position_untouched() {
        let mut game_state = GameState::new_game();
        let before = game_state.clone();

        assert!(play_move(&mut game_state, sq("e2"), sq("e5"), None).is_err());
        assert!(play_move(&mut game_state, sq("e7"), sq("e5"), None).is_err());

        assert_eq!(game_state, before);
    }
}
