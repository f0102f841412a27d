use tracing::{debug, trace, warn};

use crate::game_state::chess_rules::{promotion_row, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

/// Apply `mv` in place. No legality check is performed.
///
/// Side effects, in order: en passant capture, relocation of the moving
/// piece (capturing whatever stood on the destination), `has_moved`
/// bookkeeping, castling rook relocation, promotion, then `last_move` and the
/// turn flip.
pub fn apply_move(game_state: &mut GameState, mv: ChessMove) {
    trace!(%mv, side = %game_state.side_to_move, "applying move");

    let Some(mut piece) = game_state.piece_at(mv.from) else {
        warn!(%mv, "applying a move from an empty square");
        finish_turn(game_state, mv);
        return;
    };

    // A pawn moving diagonally onto an empty square is capturing en passant;
    // the captured pawn sits beside the origin, on the destination file.
    if piece.kind == PieceKind::Pawn
        && mv.from.col() != mv.to.col()
        && game_state.piece_at(mv.to).is_none()
    {
        if let Some(captured_square) = Square::new(i32::from(mv.from.row()), i32::from(mv.to.col())) {
            let captured = game_state.clear_square(captured_square);
            debug!(%mv, %captured_square, ?captured, "en passant capture");
        }
    }

    piece.has_moved = true;
    game_state.set(mv.from, None);
    game_state.set(mv.to, Some(piece));

    if piece.kind == PieceKind::King && mv.col_distance() == 2 {
        move_castling_rook(game_state, mv);
    }

    if piece.kind == PieceKind::Pawn && mv.to.row() == promotion_row(piece.color) {
        let kind = mv.promotion.unwrap_or(PieceKind::Queen);
        debug!(%mv, ?kind, "promotion");
        game_state.set(mv.to, Some(Piece::new(kind, piece.color)));
    }

    finish_turn(game_state, mv);
}

fn move_castling_rook(game_state: &mut GameState, mv: ChessMove) {
    let kingside = mv.to.col() > mv.from.col();
    let (rook_col, step) = if kingside {
        (KINGSIDE_ROOK_COL, -1)
    } else {
        (QUEENSIDE_ROOK_COL, 1)
    };
    let row = i32::from(mv.to.row());

    let (Some(rook_from), Some(rook_to)) = (
        Square::new(row, i32::from(rook_col)),
        mv.to.offset(0, step),
    ) else {
        return;
    };

    if let Some(mut rook) = game_state.clear_square(rook_from) {
        rook.has_moved = true;
        game_state.set(rook_to, Some(rook));
        debug!(%mv, %rook_from, %rook_to, "castling rook relocated");
    } else {
        warn!(%mv, %rook_from, "castling without a rook on the corner");
    }
}

#[inline]
fn finish_turn(game_state: &mut GameState, mv: ChessMove) {
    game_state.last_move = Some(mv);
    game_state.side_to_move = game_state.side_to_move.opposite();
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::ChessMove;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn mv(from: &str, to: &str) -> ChessMove {
        ChessMove::new(sq(from), sq(to))
    }

    fn kings_only() -> GameState {
        let mut game_state = GameState::new_empty();
        game_state.place_piece(sq("e1"), Piece::new(PieceKind::King, Color::White));
        game_state.place_piece(sq("e8"), Piece::new(PieceKind::King, Color::Black));
        game_state
    }

    #[test]
    fn quiet_move_relocates_piece_and_flips_turn() {
        let mut game_state = GameState::new_game();
        let push = mv("e2", "e4");

        apply_move(&mut game_state, push);

        assert_eq!(game_state.piece_at(sq("e2")), None);
        let pawn = game_state.piece_at(sq("e4")).expect("pawn should have moved");
        assert_eq!(pawn.kind, PieceKind::Pawn);
        assert!(pawn.has_moved);
        assert_eq!(game_state.side_to_move(), Color::Black);
        assert_eq!(game_state.last_move(), Some(push));
    }

    #[test]
    fn capture_overwrites_the_destination() {
        let mut game_state = kings_only();
        game_state.place_piece(sq("d4"), Piece::new(PieceKind::Rook, Color::White));
        game_state.place_piece(sq("d7"), Piece::new(PieceKind::Knight, Color::Black));

        apply_move(&mut game_state, mv("d4", "d7"));

        let rook = game_state.piece_at(sq("d7")).expect("rook should stand on d7");
        assert!(rook.is_kind(PieceKind::Rook, Color::White));
        assert_eq!(game_state.pieces().count(), 3);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut game_state = kings_only();
        game_state.place_piece(sq("e5"), Piece::new(PieceKind::Pawn, Color::White));
        game_state.place_piece(sq("d7"), Piece::new(PieceKind::Pawn, Color::Black));
        game_state.set_side_to_move(Color::Black);

        apply_move(&mut game_state, mv("d7", "d5"));
        apply_move(&mut game_state, mv("e5", "d6"));

        assert_eq!(game_state.piece_at(sq("d5")), None);
        assert!(game_state
            .piece_at(sq("d6"))
            .is_some_and(|p| p.is_kind(PieceKind::Pawn, Color::White)));
        assert_eq!(game_state.pieces().count(), 3);
    }

    #[test]
    fn kingside_castling_moves_the_rook_next_to_the_king() {
        let mut game_state = kings_only();
        game_state.place_piece(sq("h1"), Piece::new(PieceKind::Rook, Color::White));

        apply_move(&mut game_state, mv("e1", "g1"));

        assert!(game_state
            .piece_at(sq("g1"))
            .is_some_and(|p| p.is_kind(PieceKind::King, Color::White)));
        let rook = game_state.piece_at(sq("f1")).expect("rook should land on f1");
        assert!(rook.is_kind(PieceKind::Rook, Color::White));
        assert!(rook.has_moved);
        assert_eq!(game_state.piece_at(sq("h1")), None);
    }

    #[test]
    fn queenside_castling_moves_the_rook_next_to_the_king() {
        let mut game_state = kings_only();
        game_state.place_piece(sq("a8"), Piece::new(PieceKind::Rook, Color::Black));
        game_state.set_side_to_move(Color::Black);

        apply_move(&mut game_state, mv("e8", "c8"));

        assert!(game_state
            .piece_at(sq("d8"))
            .is_some_and(|p| p.is_kind(PieceKind::Rook, Color::Black) && p.has_moved));
        assert_eq!(game_state.piece_at(sq("a8")), None);
        assert_eq!(game_state.side_to_move(), Color::White);
    }

    #[test]
    fn promotion_honours_the_requested_piece() {
        let mut game_state = kings_only();
        game_state.place_piece(sq("a7"), Piece::new(PieceKind::Pawn, Color::White));

        apply_move(
            &mut game_state,
            ChessMove::with_promotion(sq("a7"), sq("a8"), PieceKind::Knight),
        );

        assert!(game_state
            .piece_at(sq("a8"))
            .is_some_and(|p| p.is_kind(PieceKind::Knight, Color::White)));
    }

    #[test]
    fn promotion_without_a_choice_defaults_to_queen() {
        let mut game_state = kings_only();
        game_state.place_piece(sq("h2"), Piece::new(PieceKind::Pawn, Color::Black));
        game_state.set_side_to_move(Color::Black);

        apply_move(&mut game_state, mv("h2", "h1"));

        assert!(game_state
            .piece_at(sq("h1"))
            .is_some_and(|p| p.is_kind(PieceKind::Queen, Color::Black)));
    }

    #[test]
    fn move_from_an_empty_square_still_hands_over_the_turn() {
        let mut game_state = kings_only();
        let before: Vec<_> = game_state.pieces().collect();

        apply_move(&mut game_state, mv("a3", "a4"));

        assert_eq!(game_state.pieces().collect::<Vec<_>>(), before);
        assert_eq!(game_state.side_to_move(), Color::Black);
    }
}
