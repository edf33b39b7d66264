//! Authoritative board state for the placement phase.
//!
//! `PlacementBoard` is the single square-to-piece mapping the orchestrator
//! owns. It stores piece bitboards plus occupancy caches; the mutators keep
//! the caches coherent and uphold the one-piece-per-square invariant. Rule
//! checkers only ever receive `&PlacementBoard` views.

use crate::game_state::chess_types::{square_mask, Color, PieceKind, Shade, Square, FILE_MASKS};

/// Bitboard position store for the drop phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementBoard {
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,
}

impl Default for PlacementBoard {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
        }
    }
}

impl PlacementBoard {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Write a piece onto an empty square and refresh the occupancy caches.
    ///
    /// The target must be empty; callers validate occupancy before commit.
    pub fn add_piece(&mut self, color: Color, kind: PieceKind, square: Square) {
        let mask = square_mask(square);
        debug_assert_eq!(self.occupancy_all & mask, 0, "square already occupied");

        self.pieces[color.index()][kind.index()] |= mask;
        self.occupancy_by_color[color.index()] |= mask;
        self.occupancy_all |= mask;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupancy_all & square_mask(square) == 0
    }

    pub fn piece_on_square(&self, square: Square) -> Option<(Color, PieceKind)> {
        let mask = square_mask(square);
        if self.occupancy_all & mask == 0 {
            return None;
        }

        for color in [Color::White, Color::Black] {
            if self.occupancy_by_color[color.index()] & mask == 0 {
                continue;
            }
            for kind in [
                PieceKind::Pawn,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
                PieceKind::King,
            ] {
                if self.pieces[color.index()][kind.index()] & mask != 0 {
                    return Some((color, kind));
                }
            }
        }

        None
    }

    /// Number of pieces of one kind a color currently owns.
    #[inline]
    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        self.pieces[color.index()][kind.index()].count_ones()
    }

    /// Number of bishops the color has on squares of the given shade.
    pub fn bishop_count_on_shade(&self, color: Color, shade: Shade) -> u32 {
        let bishops = self.pieces[color.index()][PieceKind::Bishop.index()];
        let mut remaining = bishops;
        let mut count = 0;
        while remaining != 0 {
            let square = remaining.trailing_zeros() as Square;
            if Shade::of(square) == shade {
                count += 1;
            }
            remaining &= remaining - 1;
        }
        count
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.pieces[color.index()][PieceKind::King.index()];
        if kings == 0 {
            None
        } else {
            Some(kings.trailing_zeros() as Square)
        }
    }

    /// True if the color owns at least one pawn on the given file.
    #[inline]
    pub fn file_has_pawn(&self, color: Color, file: u8) -> bool {
        self.pieces[color.index()][PieceKind::Pawn.index()] & FILE_MASKS[file as usize] != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::square_at;

    #[test]
    fn add_piece_updates_all_caches() {
        let mut board = PlacementBoard::new_empty();
        let e4 = square_at(4, 3);
        board.add_piece(Color::White, PieceKind::Knight, e4);

        assert!(!board.is_empty(e4));
        assert_eq!(
            board.piece_on_square(e4),
            Some((Color::White, PieceKind::Knight))
        );
        assert_eq!(board.occupancy_by_color[Color::White.index()], 1u64 << e4);
        assert_eq!(board.occupancy_by_color[Color::Black.index()], 0);
        assert_eq!(board.occupancy_all, 1u64 << e4);
        assert_eq!(board.count(Color::White, PieceKind::Knight), 1);
    }

    #[test]
    fn king_square_reports_each_side() {
        let mut board = PlacementBoard::new_empty();
        assert_eq!(board.king_square(Color::White), None);

        board.add_piece(Color::White, PieceKind::King, square_at(4, 0));
        board.add_piece(Color::Black, PieceKind::King, square_at(2, 7));

        assert_eq!(board.king_square(Color::White), Some(square_at(4, 0)));
        assert_eq!(board.king_square(Color::Black), Some(square_at(2, 7)));
    }

    #[test]
    fn bishop_shade_counting_separates_light_and_dark() {
        let mut board = PlacementBoard::new_empty();
        board.add_piece(Color::White, PieceKind::Bishop, square_at(2, 0)); // c1, dark
        board.add_piece(Color::White, PieceKind::Bishop, square_at(5, 0)); // f1, light
        board.add_piece(Color::Black, PieceKind::Bishop, square_at(2, 7)); // c8, light

        assert_eq!(board.bishop_count_on_shade(Color::White, Shade::Dark), 1);
        assert_eq!(board.bishop_count_on_shade(Color::White, Shade::Light), 1);
        assert_eq!(board.bishop_count_on_shade(Color::Black, Shade::Light), 1);
        assert_eq!(board.bishop_count_on_shade(Color::Black, Shade::Dark), 0);
    }

    #[test]
    fn file_has_pawn_is_per_color() {
        let mut board = PlacementBoard::new_empty();
        board.add_piece(Color::White, PieceKind::Pawn, square_at(0, 1));

        assert!(board.file_has_pawn(Color::White, 0));
        assert!(!board.file_has_pawn(Color::Black, 0));
        assert!(!board.file_has_pawn(Color::White, 1));
    }
}
