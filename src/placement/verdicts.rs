//! Rejection taxonomy and acceptance payload for drop attempts.
//!
//! `DropRejection` is the single error type the placement subsystem returns.
//! Every variant is a recoverable, user-facing failure mode: the caller picks
//! a different square or piece and tries again. Pawn-rule rejections carry
//! the full list of currently legal pawn squares as a diagnostic aid.

use std::fmt;

use crate::game_state::chess_types::{Color, PieceCategory, PieceKind, Shade, Square};
use crate::utils::algebraic::{square_to_algebraic, squares_to_algebraic_list};

/// Stable reason-code discriminant for callers that match on categories
/// rather than payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionCode {
    InvalidSquareFormat,
    SquareOccupied,
    WrongMoveType,
    PieceCountExceeded,
    KingSafeZoneViolation,
    PawnRankOutOfBand,
    PawnFileStackingDisallowed,
    BishopColorDuplicate,
    CheckViolation,
    PlacementOver,
}

/// Why a drop attempt was refused. Each variant carries the context needed
/// for a precise user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropRejection {
    /// The square text did not parse as a board coordinate.
    InvalidSquareFormat(String),

    /// The target square already holds a piece.
    SquareOccupied(Square),

    /// The offered piece does not match the category the turn cycle demands
    /// (or was a king, which is never dropped).
    WrongMoveType {
        required: PieceCategory,
        offered: PieceKind,
    },

    /// The color already owns the maximum number of this piece kind.
    PieceCountExceeded(PieceKind),

    /// The target square lies inside the opposing king's safe zone.
    KingSafeZoneViolation(Square),

    /// The pawn's rank is outside the color's band. Carries every currently
    /// legal pawn square for that color.
    PawnRankOutOfBand {
        square: Square,
        legal_squares: Vec<Square>,
    },

    /// A second pawn on an occupied file while some pawn-less file still has
    /// room in its band. Carries every currently legal pawn square.
    PawnFileStackingDisallowed {
        square: Square,
        legal_squares: Vec<Square>,
    },

    /// A same-shade bishop of this color already exists.
    BishopColorDuplicate(Shade),

    /// The drop would leave the opposing side in check.
    CheckViolation,

    /// The placement phase has ended; this subsystem no longer accepts drops.
    PlacementOver,
}

impl DropRejection {
    pub fn code(&self) -> RejectionCode {
        match self {
            DropRejection::InvalidSquareFormat(_) => RejectionCode::InvalidSquareFormat,
            DropRejection::SquareOccupied(_) => RejectionCode::SquareOccupied,
            DropRejection::WrongMoveType { .. } => RejectionCode::WrongMoveType,
            DropRejection::PieceCountExceeded(_) => RejectionCode::PieceCountExceeded,
            DropRejection::KingSafeZoneViolation(_) => RejectionCode::KingSafeZoneViolation,
            DropRejection::PawnRankOutOfBand { .. } => RejectionCode::PawnRankOutOfBand,
            DropRejection::PawnFileStackingDisallowed { .. } => {
                RejectionCode::PawnFileStackingDisallowed
            }
            DropRejection::BishopColorDuplicate(_) => RejectionCode::BishopColorDuplicate,
            DropRejection::CheckViolation => RejectionCode::CheckViolation,
            DropRejection::PlacementOver => RejectionCode::PlacementOver,
        }
    }

    /// Legal-square diagnostic list, populated for pawn-rule rejections only.
    pub fn legal_squares(&self) -> Option<&[Square]> {
        match self {
            DropRejection::PawnRankOutOfBand { legal_squares, .. }
            | DropRejection::PawnFileStackingDisallowed { legal_squares, .. } => {
                Some(legal_squares)
            }
            _ => None,
        }
    }
}

impl fmt::Display for DropRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropRejection::InvalidSquareFormat(text) => {
                write!(f, "'{text}' is not a valid square (expected e.g. 'e4')")
            }
            DropRejection::SquareOccupied(square) => {
                write!(f, "{} is already occupied", square_to_algebraic(*square))
            }
            DropRejection::WrongMoveType { required, offered } => {
                let wanted = match required {
                    PieceCategory::Pawn => "a pawn",
                    PieceCategory::Piece => "a non-pawn piece",
                };
                write!(f, "this turn requires {wanted}, not {offered:?}")
            }
            DropRejection::PieceCountExceeded(kind) => {
                write!(f, "no {kind:?} left to place for this color")
            }
            DropRejection::KingSafeZoneViolation(square) => {
                write!(
                    f,
                    "{} lies inside the opposing king's safe zone",
                    square_to_algebraic(*square)
                )
            }
            DropRejection::PawnRankOutOfBand {
                square,
                legal_squares,
            } => {
                write!(
                    f,
                    "{} is outside the pawn rank band; legal pawn squares: {}",
                    square_to_algebraic(*square),
                    squares_to_algebraic_list(legal_squares)
                )
            }
            DropRejection::PawnFileStackingDisallowed {
                square,
                legal_squares,
            } => {
                write!(
                    f,
                    "{} would stack a second pawn on its file while open files remain; \
                     legal pawn squares: {}",
                    square_to_algebraic(*square),
                    squares_to_algebraic_list(legal_squares)
                )
            }
            DropRejection::BishopColorDuplicate(shade) => {
                write!(f, "a bishop already stands on a {shade:?} square")
            }
            DropRejection::CheckViolation => {
                write!(f, "this drop would leave the opposing side in check")
            }
            DropRejection::PlacementOver => {
                write!(f, "the placement phase has ended")
            }
        }
    }
}

impl std::error::Error for DropRejection {}

/// Everything a front-end needs after an accepted drop, so no follow-up
/// queries are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReceipt {
    pub square: Square,
    pub color: Color,
    pub kind: PieceKind,
    /// FEN snapshot after the commit.
    pub fen: String,
    /// Who drops next and what category they must drop.
    pub next_color: Color,
    pub next_category: PieceCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        let rejection = DropRejection::PieceCountExceeded(PieceKind::Queen);
        assert_eq!(rejection.code(), RejectionCode::PieceCountExceeded);
        assert_eq!(
            DropRejection::CheckViolation.code(),
            RejectionCode::CheckViolation
        );
    }

    #[test]
    fn only_pawn_rejections_carry_legal_squares() {
        let pawn = DropRejection::PawnRankOutOfBand {
            square: 48,
            legal_squares: vec![8, 9],
        };
        assert_eq!(pawn.legal_squares(), Some(&[8u8, 9u8][..]));
        assert_eq!(DropRejection::SquareOccupied(0).legal_squares(), None);
    }

    #[test]
    fn messages_name_the_offending_square() {
        let message = DropRejection::KingSafeZoneViolation(11).to_string();
        assert!(message.contains("d2"), "message was: {message}");

        let message = DropRejection::PawnRankOutOfBand {
            square: 48,
            legal_squares: vec![8],
        }
        .to_string();
        assert!(message.contains("a7"), "message was: {message}");
        assert!(message.contains("a2"), "message was: {message}");
    }
}
