//! FEN-to-GameState parser.
//!
//! The position model keeps per-piece `has_moved` flags and the last move
//! instead of castling rights and an en passant square, so both are
//! reconstructed here:
//!
//! - a king or corner rook counts as unmoved only when a castling right
//!   names it; other pieces are unmoved when they stand on their starting
//!   square;
//! - an en passant target becomes the double pawn push that produced it.
//!
//! The halfmove clock and fullmove number are optional. When present they
//! are validated and then dropped.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    home_row, pawn_direction, pawn_start_row, BACK_RANK_LAYOUT, KINGSIDE_ROOK_COL, KING_START_COL,
    QUEENSIDE_ROOK_COL,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, Default)]
struct CastlingRights {
    kingside: [bool; 2],
    queenside: [bool; 2],
}

impl CastlingRights {
    fn any(&self, color: Color) -> bool {
        self.kingside[color.index()] || self.queenside[color.index()]
    }
}

fn invalid(reason: impl Into<String>) -> ChessError {
    ChessError::InvalidFen {
        reason: reason.into(),
    }
}

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 4 && fields.len() != 6 {
        return Err(invalid(format!(
            "expected 4 or 6 fields, found {}",
            fields.len()
        )));
    }

    let mut game_state = GameState::new_empty();
    parse_board(fields[0], &mut game_state)?;
    check_king_counts(&game_state)?;

    game_state.set_side_to_move(parse_side_to_move(fields[1])?);

    let rights = parse_castling_rights(fields[2])?;
    mark_moved_pieces(&mut game_state, rights)?;

    game_state.last_move = parse_en_passant(fields[3], &game_state)?;

    if let [_, _, _, _, halfmove, fullmove] = &fields[..] {
        halfmove
            .parse::<u32>()
            .map_err(|_| invalid(format!("invalid halfmove clock {halfmove:?}")))?;
        fullmove
            .parse::<u32>()
            .map_err(|_| invalid(format!("invalid fullmove number {fullmove:?}")))?;
    }

    debug!(fen, side = %game_state.side_to_move(), "loaded FEN position");
    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != usize::from(BOARD_SIZE) {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    // The first rank listed is rank 8, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let kind = PieceKind::from_letter(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };

            let square = Square::new(row as i32, col as i32)
                .ok_or_else(|| invalid(format!("rank {rank_str:?} has too many files")))?;
            game_state.place_piece(square, Piece::new(kind, color));
            col += 1;
        }

        if col != usize::from(BOARD_SIZE) {
            return Err(invalid(format!("rank {rank_str:?} does not cover 8 files")));
        }
    }

    Ok(())
}

fn check_king_counts(game_state: &GameState) -> ChessResult<()> {
    for color in [Color::White, Color::Black] {
        let count = game_state
            .pieces()
            .filter(|(_, piece)| piece.is_kind(PieceKind::King, color))
            .count();
        if count != 1 {
            return Err(ChessError::KingCount { color, count });
        }
    }
    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side to move {side_part:?}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::default();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.kingside[Color::White.index()] = true,
            'Q' => rights.queenside[Color::White.index()] = true,
            'k' => rights.kingside[Color::Black.index()] = true,
            'q' => rights.queenside[Color::Black.index()] = true,
            _ => return Err(invalid(format!("invalid castling character '{ch}'"))),
        }
    }

    Ok(rights)
}

/// Set `has_moved` on every piece that could not still be on its starting
/// square unmoved, as far as the castling rights tell.
fn mark_moved_pieces(game_state: &mut GameState, rights: CastlingRights) -> ChessResult<()> {
    let placed: Vec<(Square, Piece)> = game_state.pieces().collect();

    for (square, mut piece) in placed {
        let color = piece.color;
        let on_home_row = square.row() == home_row(color);

        let unmoved = match piece.kind {
            PieceKind::Pawn => square.row() == pawn_start_row(color),
            PieceKind::King => {
                on_home_row && square.col() == KING_START_COL && rights.any(color)
            }
            PieceKind::Rook => {
                on_home_row
                    && ((square.col() == KINGSIDE_ROOK_COL && rights.kingside[color.index()])
                        || (square.col() == QUEENSIDE_ROOK_COL
                            && rights.queenside[color.index()]))
            }
            kind => on_home_row && BACK_RANK_LAYOUT[usize::from(square.col())] == kind,
        };

        piece.has_moved = !unmoved;
        game_state.place_piece(square, piece);
    }

    for color in [Color::White, Color::Black] {
        let row = i32::from(home_row(color));
        let sides = [
            (rights.kingside[color.index()], KINGSIDE_ROOK_COL),
            (rights.queenside[color.index()], QUEENSIDE_ROOK_COL),
        ];
        for (granted, rook_col) in sides {
            if !granted {
                continue;
            }
            let in_place = |col: u8, kind: PieceKind| {
                Square::new(row, i32::from(col))
                    .and_then(|square| game_state.piece_at(square))
                    .is_some_and(|piece| piece.is_kind(kind, color) && !piece.has_moved)
            };
            if !in_place(KING_START_COL, PieceKind::King) || !in_place(rook_col, PieceKind::Rook) {
                return Err(invalid(format!(
                    "{color} castling right without king and rook on their starting squares"
                )));
            }
        }
    }

    Ok(())
}

/// Turn an en passant target square into the double push that created it.
fn parse_en_passant(en_passant_part: &str, game_state: &GameState) -> ChessResult<Option<ChessMove>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let pusher = game_state.side_to_move().opposite();
    let direction = pawn_direction(pusher);

    let pushed_from = target.offset(-direction, 0);
    let pushed_to = target.offset(direction, 0);
    let (Some(from), Some(to)) = (pushed_from, pushed_to) else {
        return Err(invalid(format!("en passant square {target} is on an edge rank")));
    };

    let consistent = from.row() == pawn_start_row(pusher)
        && game_state.piece_at(from).is_none()
        && game_state.piece_at(target).is_none()
        && game_state
            .piece_at(to)
            .is_some_and(|piece| piece.is_kind(PieceKind::Pawn, pusher));
    if !consistent {
        return Err(invalid(format!(
            "en passant square {target} does not follow a {pusher} double pawn push"
        )));
    }

    Ok(Some(ChessMove::new(from, to)))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::move_generation::legal_moves_king::can_castle;
    use crate::moves::move_descriptions::ChessMove;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::render_game_state::render_game_state;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn starting_fen_matches_new_game() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(parsed, GameState::new_game());
        assert_eq!(
            render_game_state(&parsed),
            render_game_state(&GameState::new_game())
        );
    }

    #[test]
    fn clock_fields_are_optional() {
        let parsed = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -")
            .expect("four-field FEN should parse");
        assert_eq!(parsed, GameState::new_game());
    }

    #[test]
    fn side_to_move_is_read() {
        let parsed = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert_eq!(parsed.side_to_move(), Color::Black);
    }

    #[test]
    fn en_passant_target_becomes_the_last_move() {
        let parsed = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");
        assert_eq!(parsed.last_move(), Some(ChessMove::new(sq("d7"), sq("d5"))));

        let moves: Vec<String> = generate_legal_moves(&parsed, sq("e5"))
            .iter()
            .map(ChessMove::to_string)
            .collect();
        assert_eq!(moves, vec!["e5e6", "e5d6"]);
    }

    #[test]
    fn castling_rights_decide_which_rooks_are_unmoved() {
        let parsed = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("FEN should parse");

        assert!(can_castle(&parsed, sq("e1"), true));
        assert!(!can_castle(&parsed, sq("e1"), false));
        assert!(!can_castle(&parsed, sq("e8"), true));
        assert!(can_castle(&parsed, sq("e8"), false));
    }

    #[test]
    fn no_castling_rights_marks_kings_moved() {
        let parsed = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert_eq!(parsed.piece_at(sq("e1")).map(|p| p.has_moved), Some(true));
        assert!(!can_castle(&parsed, sq("e1"), true));
        assert!(!can_castle(&parsed, sq("e8"), false));
    }

    #[test]
    fn pieces_off_their_start_squares_are_marked_moved() {
        let parsed = parse_fen("4k3/8/8/8/4P3/5N2/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(parsed.piece_at(sq("e4")).map(|p| p.has_moved), Some(true));
        assert_eq!(parsed.piece_at(sq("f3")).map(|p| p.has_moved), Some(true));
        assert!(parsed
            .piece_at(sq("f3"))
            .is_some_and(|p| p.is_kind(PieceKind::Knight, Color::White)));
    }

    #[test]
    fn malformed_fens_are_rejected() {
        let bad = [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkx - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e3 0 1",
            "4k3/8/8/8/8/8/8/4K3 w K - 0 1",
        ];
        for fen in bad {
            assert!(parse_fen(fen).is_err(), "{fen:?} should be rejected");
        }
    }

    #[test]
    fn king_count_is_validated() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessError::KingCount {
                color: Color::Black,
                count: 0,
            })
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"),
            Err(ChessError::KingCount {
                color: Color::White,
                count: 2,
            })
        );
    }
}
