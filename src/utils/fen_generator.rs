//! FEN snapshot encoding for the placement phase.
//!
//! Emits the piece-placement field from the board store (ranks 8 to 1, files
//! a to h, run-length-encoded empties) with fixed trailing fields, since the
//! drop phase has no side-to-move or clock semantics of its own. If a king is
//! structurally missing and its fallback square is empty, one is synthesized
//! into the encoded output only; the board store is never touched.

use crate::game_state::chess_rules::{fallback_king_square, PLACEMENT_FEN_TAIL};
use crate::game_state::chess_types::{square_at, Color, PieceKind, Square};
use crate::game_state::game_state::PlacementBoard;

pub fn generate_placement_fen(board: &PlacementBoard) -> String {
    format!("{} {}", generate_board_field(board), PLACEMENT_FEN_TAIL)
}

fn generate_board_field(board: &PlacementBoard) -> String {
    let synthesized = synthesized_kings(board);
    let mut out = String::new();

    for rank in (0u8..8).rev() {
        let mut empty_count = 0u8;

        for file in 0u8..8 {
            let square = square_at(file, rank);
            if let Some(ch) = piece_fen_char_on_square(board, &synthesized, square) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(ch);
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

/// Fallback king squares to render, per color, when the store has no king of
/// that color and the fallback square is empty.
fn synthesized_kings(board: &PlacementBoard) -> [Option<Square>; 2] {
    let mut synthesized = [None, None];

    for color in [Color::White, Color::Black] {
        if board.king_square(color).is_some() {
            continue;
        }
        let fallback = fallback_king_square(color);
        if board.is_empty(fallback) {
            synthesized[color.index()] = Some(fallback);
        }
    }

    synthesized
}

fn piece_fen_char_on_square(
    board: &PlacementBoard,
    synthesized: &[Option<Square>; 2],
    square: Square,
) -> Option<char> {
    if let Some((color, kind)) = board.piece_on_square(square) {
        return Some(piece_to_fen_char(color, kind));
    }

    for color in [Color::White, Color::Black] {
        if synthesized[color.index()] == Some(square) {
            return Some(piece_to_fen_char(color, PieceKind::King));
        }
    }

    None
}

fn piece_to_fen_char(color: Color, kind: PieceKind) -> char {
    match color {
        Color::White => kind.letter().to_ascii_uppercase(),
        Color::Black => kind.letter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_synthesizes_both_fallback_kings() {
        let board = PlacementBoard::new_empty();
        assert_eq!(
            generate_placement_fen(&board),
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1"
        );
    }

    #[test]
    fn kings_and_drops_encode_with_run_length_empties() {
        let mut board = PlacementBoard::new_empty();
        board.add_piece(Color::White, PieceKind::King, square_at(4, 0)); // e1
        board.add_piece(Color::Black, PieceKind::King, square_at(4, 7)); // e8
        board.add_piece(Color::White, PieceKind::Pawn, square_at(4, 1)); // e2
        board.add_piece(Color::Black, PieceKind::Pawn, square_at(4, 6)); // e7
        board.add_piece(Color::White, PieceKind::Knight, square_at(1, 2)); // b3

        assert_eq!(
            generate_placement_fen(&board),
            "4k3/4p3/8/8/8/1N6/4P3/4K3 w - - 0 1"
        );
    }

    #[test]
    fn synthesis_skips_an_occupied_fallback_square() {
        let mut board = PlacementBoard::new_empty();
        board.add_piece(Color::Black, PieceKind::King, square_at(4, 7));
        board.add_piece(Color::White, PieceKind::Rook, square_at(4, 0)); // e1 taken

        // No white king appears: e1 holds the rook and nothing is substituted.
        assert_eq!(
            generate_placement_fen(&board),
            "4k3/8/8/8/8/8/8/4R3 w - - 0 1"
        );
    }

    #[test]
    fn synthesis_never_mutates_the_store() {
        let board = PlacementBoard::new_empty();
        let snapshot = board.clone();
        let _ = generate_placement_fen(&board);
        assert_eq!(board, snapshot);
        assert_eq!(board.king_square(Color::White), None);
    }
}
