//! Canonical placement-rule constants.
//!
//! Static rule literals for the drop phase: per-color piece caps, pawn rank
//! bands, king home ranks for the random setup, and the fallback squares used
//! when a structurally incomplete board must be handed to the check oracle.

use crate::game_state::chess_types::{square_at, Color, PieceKind, Square, RANK_MASKS};

/// Per-color maximum for each piece kind. Kings are listed for completeness
/// but never pass through the drop path.
#[inline]
pub const fn max_count(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn => 8,
        PieceKind::Knight => 2,
        PieceKind::Bishop => 2,
        PieceKind::Rook => 2,
        PieceKind::Queen => 1,
        PieceKind::King => 1,
    }
}

/// Rank band a pawn of the given color may be dropped on: white ranks 2-5,
/// black ranks 4-7 (at least three ranks short of the queening rank).
#[inline]
pub const fn pawn_band(color: Color) -> u64 {
    match color {
        Color::White => RANK_MASKS[1] | RANK_MASKS[2] | RANK_MASKS[3] | RANK_MASKS[4],
        Color::Black => RANK_MASKS[3] | RANK_MASKS[4] | RANK_MASKS[5] | RANK_MASKS[6],
    }
}

/// Zero-based home ranks the random initializer draws a king rank from.
#[inline]
pub const fn king_home_ranks(color: Color) -> (u8, u8) {
    match color {
        Color::White => (0, 1),
        Color::Black => (6, 7),
    }
}

/// Substitute square handed to the check oracle / FEN encoder when a king is
/// structurally missing (e1 for white, e8 for black). Never written to the
/// authoritative board.
#[inline]
pub const fn fallback_king_square(color: Color) -> Square {
    match color {
        Color::White => square_at(4, 0),
        Color::Black => square_at(4, 7),
    }
}

/// Fixed non-placement FEN fields during the drop phase. The emitted string
/// is a positional snapshot, not a move-legal game state.
pub const PLACEMENT_FEN_TAIL: &str = "w - - 0 1";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::square_rank;

    #[test]
    fn pawn_bands_span_four_ranks_each() {
        assert_eq!(pawn_band(Color::White).count_ones(), 32);
        assert_eq!(pawn_band(Color::Black).count_ones(), 32);
    }

    #[test]
    fn pawn_bands_exclude_back_ranks_and_near_queening_ranks() {
        for color in [Color::White, Color::Black] {
            let band = pawn_band(color);
            assert_eq!(band & RANK_MASKS[0], 0);
            assert_eq!(band & RANK_MASKS[7], 0);
        }
        // White may not reach rank 6 or 7; black may not reach rank 2 or 3.
        assert_eq!(pawn_band(Color::White) & (RANK_MASKS[5] | RANK_MASKS[6]), 0);
        assert_eq!(pawn_band(Color::Black) & (RANK_MASKS[1] | RANK_MASKS[2]), 0);
    }

    #[test]
    fn fallback_kings_sit_on_home_e_files() {
        assert_eq!(fallback_king_square(Color::White), 4);
        assert_eq!(fallback_king_square(Color::Black), 60);
        assert_eq!(square_rank(fallback_king_square(Color::White)), 0);
        assert_eq!(square_rank(fallback_king_square(Color::Black)), 7);
    }
}
