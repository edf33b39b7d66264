//! Check detection behind an injected capability.
//!
//! The placement core never hard-wires a rules library: the check-avoidance
//! gate talks to a `CheckOracle` trait object, so tests can substitute a stub
//! and embedders can route to their own engine. `AttackTableOracle` is the
//! built-in implementation over the precomputed attack tables.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::PlacementBoard;
use crate::oracle::attack_tables::{
    bishop_attacks, black_pawn_attacks, king_attacks, knight_attacks, rook_attacks,
    white_pawn_attacks,
};

/// External rules capability: is `side_to_move` currently in check?
///
/// Implementations may assume a structurally valid board with one king per
/// side; the check-avoidance gate guarantees this on the boards it hands in.
pub trait CheckOracle {
    fn in_check(&self, board: &PlacementBoard, side_to_move: Color) -> bool;
}

/// Default oracle built on the crate's own attack tables.
pub struct AttackTableOracle;

impl CheckOracle for AttackTableOracle {
    fn in_check(&self, board: &PlacementBoard, side_to_move: Color) -> bool {
        let Some(king_sq) = board.king_square(side_to_move) else {
            return false;
        };
        is_square_attacked(board, king_sq, side_to_move.opposite())
    }
}

/// Stub oracle that never reports check. Used by tests and by front-ends
/// running the permissive rule set.
pub struct NeverInCheckOracle;

impl CheckOracle for NeverInCheckOracle {
    fn in_check(&self, _board: &PlacementBoard, _side_to_move: Color) -> bool {
        false
    }
}

pub fn is_square_attacked(board: &PlacementBoard, square: Square, attacker_color: Color) -> bool {
    let target_mask = 1u64 << square;

    let attacker_pawns = board.pieces[attacker_color.index()][PieceKind::Pawn.index()];
    let mut pawns = attacker_pawns;
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;
        let attacks = match attacker_color {
            Color::White => white_pawn_attacks(from),
            Color::Black => black_pawn_attacks(from),
        };
        if attacks & target_mask != 0 {
            return true;
        }
        pawns &= pawns - 1;
    }

    let attacker_knights = board.pieces[attacker_color.index()][PieceKind::Knight.index()];
    if knight_attacks(square) & attacker_knights != 0 {
        return true;
    }

    let attacker_kings = board.pieces[attacker_color.index()][PieceKind::King.index()];
    if king_attacks(square) & attacker_kings != 0 {
        return true;
    }

    let bishops_queens = board.pieces[attacker_color.index()][PieceKind::Bishop.index()]
        | board.pieces[attacker_color.index()][PieceKind::Queen.index()];
    if bishop_attacks(square, board.occupancy_all) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = board.pieces[attacker_color.index()][PieceKind::Rook.index()]
        | board.pieces[attacker_color.index()][PieceKind::Queen.index()];
    if rook_attacks(square, board.occupancy_all) & rooks_queens != 0 {
        return true;
    }

    false
}
