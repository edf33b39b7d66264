//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the placement store for the
//! command shell, tests, and diagnostics in text environments.

use crate::game_state::chess_types::{square_at, Color, PieceKind};
use crate::game_state::game_state::PlacementBoard;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &PlacementBoard) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0u8..8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0u8..8 {
            match board.piece_on_square(square_at(file, rank)) {
                Some((color, kind)) => out.push(piece_to_unicode(color, kind)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
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
    use super::*;

    #[test]
    fn rendered_board_places_kings_on_their_squares() {
        let mut board = PlacementBoard::new_empty();
        board.add_piece(Color::White, PieceKind::King, square_at(4, 0));
        board.add_piece(Color::Black, PieceKind::King, square_at(2, 7));

        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(lines[1].starts_with("8 · · ♚"));
        assert!(lines[8].contains('♔'));
    }
}
