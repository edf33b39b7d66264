//! Turn sequencing for the drop phase.
//!
//! Maps the move counter to the side to move and the required drop category.
//! Both are pure functions of the counter, recomputed on demand; the only
//! mutable state is the counter itself and the one-way phase flag.

use crate::game_state::chess_types::{Color, PieceCategory};

/// Lifecycle of the subsystem: drops are only legal during `Placement`;
/// `Standard` is terminal from this subsystem's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementPhase {
    Placement,
    Standard,
}

/// Move counter plus phase. The counter starts at 1, increments by exactly
/// one per accepted drop, and only `reset` winds it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceState {
    pub move_count: u32,
    pub phase: PlacementPhase,
}

impl SequenceState {
    #[inline]
    pub fn new() -> Self {
        Self {
            move_count: 1,
            phase: PlacementPhase::Placement,
        }
    }

    /// Advance to the next drop. No-op once the standard phase has begun.
    #[inline]
    pub fn advance(&mut self) {
        if self.phase == PlacementPhase::Placement {
            self.move_count += 1;
        }
    }

    #[inline]
    pub fn requirement(&self) -> (Color, PieceCategory) {
        (
            color_to_move(self.move_count),
            required_category(self.move_count),
        )
    }
}

impl Default for SequenceState {
    fn default() -> Self {
        Self::new()
    }
}

/// White moves on odd counts, black on even.
#[inline]
pub const fn color_to_move(move_count: u32) -> Color {
    if move_count % 2 == 1 {
        Color::White
    } else {
        Color::Black
    }
}

/// The repeating four-beat cycle: white pawn, black pawn, white piece,
/// black piece.
#[inline]
pub const fn required_category(move_count: u32) -> PieceCategory {
    match (move_count - 1) % 4 {
        0 | 1 => PieceCategory::Pawn,
        _ => PieceCategory::Piece,
    }
}
