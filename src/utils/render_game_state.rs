//! Terminal-oriented Unicode board renderer.
//!
//! Used by the interactive CLI and by tests that want a readable diff of a
//! position.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output, rank 8 at the
/// top and White's pieces as outlined glyphs.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE {
        let rank_label = char::from(b'8' - row);
        out.push(rank_label);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let piece = Square::new(i32::from(row), i32::from(col))
                .and_then(|square| game_state.piece_at(square));
            match piece {
                Some(piece) => out.push(piece_to_unicode(piece.color, piece.kind)),
                None => out.push('·'),
            }

            if col + 1 < BOARD_SIZE {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn renders_the_starting_position() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[2], "7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟ 7");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[7], "2 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙ 2");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[9], "  a b c d e f g h");
    }

    #[test]
    fn renders_an_empty_board() {
        let rendered = render_game_state(&GameState::new_empty());
        assert_eq!(rendered.matches('·').count(), 64);
    }
}
