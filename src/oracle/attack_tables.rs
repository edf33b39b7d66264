//! Attack bitboard generation for the built-in check oracle.
//!
//! Precomputed leaper tables (king, knight, pawn) and occupancy-aware slider
//! tracing, consolidated into one module because the placement core only
//! consumes them from check detection and the king safe-zone computation.

pub const KING_ATTACKS: [u64; 64] = generate_leaper_attacks(&KING_DELTAS);
pub const KNIGHT_ATTACKS: [u64; 64] = generate_leaper_attacks(&KNIGHT_DELTAS);
pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_leaper_attacks(&WHITE_PAWN_DELTAS);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_leaper_attacks(&BLACK_PAWN_DELTAS);

const KING_DELTAS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const WHITE_PAWN_DELTAS: [(i32, i32); 2] = [(-1, 1), (1, 1)];
const BLACK_PAWN_DELTAS: [(i32, i32); 2] = [(-1, -1), (1, -1)];

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}

#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub const fn white_pawn_attacks(square: u8) -> u64 {
    WHITE_PAWN_ATTACKS[square as usize]
}

#[inline]
pub const fn black_pawn_attacks(square: u8) -> u64 {
    BLACK_PAWN_ATTACKS[square as usize]
}

/// The 3x3 king neighborhood: the king's own square plus every adjacent
/// square, clipped to the board edges. Corner and edge kings yield fewer
/// than nine squares.
#[inline]
pub const fn king_zone(square: u8) -> u64 {
    KING_ATTACKS[square as usize] | (1u64 << square)
}

pub fn bishop_attacks(square: u8, occupancy: u64) -> u64 {
    let sq = square as i32;
    let mut attacks = 0u64;

    attacks |= trace_ray(sq, 1, 1, occupancy);
    attacks |= trace_ray(sq, -1, 1, occupancy);
    attacks |= trace_ray(sq, 1, -1, occupancy);
    attacks |= trace_ray(sq, -1, -1, occupancy);

    attacks
}

pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    let sq = square as i32;
    let mut attacks = 0u64;

    attacks |= trace_ray(sq, 1, 0, occupancy);
    attacks |= trace_ray(sq, -1, 0, occupancy);
    attacks |= trace_ray(sq, 0, 1, occupancy);
    attacks |= trace_ray(sq, 0, -1, occupancy);

    attacks
}

const fn generate_leaper_attacks<const N: usize>(deltas: &[(i32, i32); N]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        let mut i = 0usize;
        while i < N {
            attacks |= set_if_valid(file + deltas[i].0, rank + deltas[i].1);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}

fn trace_ray(square: i32, file_step: i32, rank_step: i32, occupancy: u64) -> u64 {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let target = (rank * 8 + file) as usize;
        let bit = 1u64 << target;
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        assert_eq!(king_attacks(0).count_ones(), 3);
    }

    #[test]
    fn king_zone_includes_own_square_and_clips_at_edges() {
        // a1 corner: own square plus three neighbors.
        assert_eq!(king_zone(0).count_ones(), 4);
        // e1 edge: own square plus five neighbors.
        assert_eq!(king_zone(4).count_ones(), 6);
        // d4 interior: the full nine squares.
        assert_eq!(king_zone(27).count_ones(), 9);
        assert_ne!(king_zone(27) & (1u64 << 27), 0);
    }

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        assert_eq!(knight_attacks(27).count_ones(), 8);
    }

    #[test]
    fn pawn_attacks_point_toward_the_queening_rank() {
        let e2 = 12u8;
        assert_eq!(white_pawn_attacks(e2), (1u64 << 19) | (1u64 << 21));
        let e7 = 52u8;
        assert_eq!(black_pawn_attacks(e7), (1u64 << 43) | (1u64 << 45));
    }

    #[test]
    fn slider_blocker_stops_ray() {
        let c1 = 2u8;
        let blocker_on_e3 = 1u64 << 20;
        let attacks = bishop_attacks(c1, blocker_on_e3);

        assert_ne!(attacks & (1u64 << 20), 0);
        assert_eq!(attacks & (1u64 << 29), 0);

        let a1 = 0u8;
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(a1, blocker_on_a4);
        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);
    }
}
