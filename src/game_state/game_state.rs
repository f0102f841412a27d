//! Mutable board position.
//!
//! `GameState` is the central model for the engine: an 8x8 grid of optional
//! pieces, the side to move and the single most recent move (needed for en
//! passant). The grid is a flat array of `Copy` pieces, so a clone is a plain
//! memory copy; the legality filter clones once per candidate move.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::{home_row, pawn_start_row, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked, king_square};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::fen_parser::parse_fen;

type Grid = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) last_move: Option<ChessMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl GameState {
    /// An empty board with White to move. Intended for building custom
    /// positions with [`GameState::place_piece`].
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            board: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            side_to_move: Color::White,
            last_move: None,
        }
    }

    #[inline]
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        game_state.setup_initial_position();
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Reset to the standard 32-piece starting position with White to move.
    pub fn setup_initial_position(&mut self) {
        self.board = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];

        for color in [Color::White, Color::Black] {
            let officers = usize::from(home_row(color));
            let pawns = usize::from(pawn_start_row(color));
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                self.board[officers][col] = Some(Piece::new(*kind, color));
                self.board[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }

        self.side_to_move = Color::White;
        self.last_move = None;
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[usize::from(square.row())][usize::from(square.col())]
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn last_move(&self) -> Option<ChessMove> {
        self.last_move
    }

    /// Put `piece` on `square`, replacing whatever stood there. Setup helper;
    /// it does not touch the side to move or the last move.
    #[inline]
    pub fn place_piece(&mut self, square: Square, piece: Piece) {
        self.set(square, Some(piece));
    }

    #[inline]
    pub fn clear_square(&mut self, square: Square) -> Option<Piece> {
        let previous = self.piece_at(square);
        self.set(square, None);
        previous
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Apply `mv` without any legality check and hand the turn over.
    ///
    /// Callers must pass a move produced by the legal move generator for the
    /// current position; anything else silently corrupts the game.
    #[inline]
    pub fn apply_move(&mut self, mv: ChessMove) {
        apply_move(self, mv);
    }

    /// Location of `color`'s king, if any.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        king_square(self, color)
    }

    /// # Panics
    ///
    /// Panics when `color` has no king on the board.
    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    /// Whether the opponent of `defender` attacks `square`.
    #[inline]
    pub fn is_square_attacked(&self, square: Square, defender: Color) -> bool {
        is_square_attacked(self, square, defender)
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.board[usize::from(square.row())][usize::from(square.col())] = piece;
    }
}
