//! Advisory next-piece recommendation.
//!
//! Never blocks anything: the suggestion is a hint for front-ends, and the
//! pipeline still validates whatever the user actually drops.

use crate::game_state::chess_rules::max_count;
use crate::game_state::chess_types::{Color, PieceCategory, PieceKind};
use crate::game_state::game_state::PlacementBoard;

/// Pawn when the turn demands a pawn; otherwise the first of knight, bishop,
/// rook, queen still below its cap. Pawn is the last-resort fallback when all
/// four are saturated (degenerate under correct counts, but must not fail).
pub fn suggest_piece(category: PieceCategory, color: Color, board: &PlacementBoard) -> PieceKind {
    if category == PieceCategory::Pawn {
        return PieceKind::Pawn;
    }

    for kind in [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ] {
        if board.count(color, kind) < max_count(kind) {
            return kind;
        }
    }

    PieceKind::Pawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::square_at;

    #[test]
    fn pawn_turns_suggest_pawns() {
        let board = PlacementBoard::new_empty();
        assert_eq!(
            suggest_piece(PieceCategory::Pawn, Color::White, &board),
            PieceKind::Pawn
        );
    }

    #[test]
    fn piece_turns_walk_the_priority_order() {
        let mut board = PlacementBoard::new_empty();
        assert_eq!(
            suggest_piece(PieceCategory::Piece, Color::White, &board),
            PieceKind::Knight
        );

        board.add_piece(Color::White, PieceKind::Knight, square_at(1, 0));
        board.add_piece(Color::White, PieceKind::Knight, square_at(6, 0));
        assert_eq!(
            suggest_piece(PieceCategory::Piece, Color::White, &board),
            PieceKind::Bishop
        );

        board.add_piece(Color::White, PieceKind::Bishop, square_at(2, 0));
        board.add_piece(Color::White, PieceKind::Bishop, square_at(5, 0));
        assert_eq!(
            suggest_piece(PieceCategory::Piece, Color::White, &board),
            PieceKind::Rook
        );

        // The other color's saturation is irrelevant.
        assert_eq!(
            suggest_piece(PieceCategory::Piece, Color::Black, &board),
            PieceKind::Knight
        );
    }

    #[test]
    fn saturated_piece_set_falls_back_to_pawn() {
        let mut board = PlacementBoard::new_empty();
        board.add_piece(Color::White, PieceKind::Knight, square_at(1, 0));
        board.add_piece(Color::White, PieceKind::Knight, square_at(6, 0));
        board.add_piece(Color::White, PieceKind::Bishop, square_at(2, 0));
        board.add_piece(Color::White, PieceKind::Bishop, square_at(5, 0));
        board.add_piece(Color::White, PieceKind::Rook, square_at(0, 0));
        board.add_piece(Color::White, PieceKind::Rook, square_at(7, 0));
        board.add_piece(Color::White, PieceKind::Queen, square_at(3, 0));

        assert_eq!(
            suggest_piece(PieceCategory::Piece, Color::White, &board),
            PieceKind::Pawn
        );
    }
}
