//! Pawn rank-band and file-stacking rules.
//!
//! The most intricate checker in the pipeline. A pawn must land inside its
//! color's rank band, and a second pawn may only stack onto a file that
//! already holds one once no pawn-less file has an empty band square left.
//! Acceptance and the legal-square diagnostic share one predicate
//! (`pawn_square_is_legal`), so the two can never diverge.

use crate::game_state::chess_rules::pawn_band;
use crate::game_state::chess_types::{square_file, square_mask, Color, PieceKind, Square, FILE_MASKS};
use crate::game_state::game_state::PlacementBoard;
use crate::placement::rule_pipeline::{DropRequest, PlacementRule, RuleContext};
use crate::placement::verdicts::DropRejection;

pub struct PawnPlacementValidator;

impl PlacementRule for PawnPlacementValidator {
    fn name(&self) -> &'static str {
        "pawn_placement_validator"
    }

    fn check(&self, ctx: &RuleContext<'_>, request: &DropRequest) -> Result<(), DropRejection> {
        if request.kind != PieceKind::Pawn {
            return Ok(());
        }

        let band = pawn_band(request.color);
        if band & square_mask(request.square) == 0 {
            return Err(DropRejection::PawnRankOutOfBand {
                square: request.square,
                legal_squares: legal_pawn_squares(ctx.board, request.color),
            });
        }

        if !ctx
            .board
            .file_has_pawn(request.color, square_file(request.square))
        {
            return Ok(());
        }

        // Stacking: only once every pawn-less file is out of band room.
        if any_pawnless_file_has_room(ctx.board, request.color) {
            return Err(DropRejection::PawnFileStackingDisallowed {
                square: request.square,
                legal_squares: legal_pawn_squares(ctx.board, request.color),
            });
        }

        Ok(())
    }
}

/// The single acceptance predicate: an empty band square whose file is
/// pawn-less for the color, or any empty band square once no pawn-less file
/// has room. Out-of-band squares fail here before stacking is consulted.
pub fn pawn_square_is_legal(board: &PlacementBoard, color: Color, square: Square) -> bool {
    let mask = square_mask(square);
    if pawn_band(color) & mask == 0 {
        return false;
    }
    if board.occupancy_all & mask != 0 {
        return false;
    }
    if !board.file_has_pawn(color, square_file(square)) {
        return true;
    }
    !any_pawnless_file_has_room(board, color)
}

/// Every currently legal pawn square for the color, in ascending square
/// order (a1 toward h8). Used for the diagnostic payload of pawn rejections.
pub fn legal_pawn_squares(board: &PlacementBoard, color: Color) -> Vec<Square> {
    (0u8..64)
        .filter(|&square| pawn_square_is_legal(board, color, square))
        .collect()
}

fn any_pawnless_file_has_room(board: &PlacementBoard, color: Color) -> bool {
    let band = pawn_band(color);
    (0u8..8).any(|file| {
        !board.file_has_pawn(color, file)
            && FILE_MASKS[file as usize] & band & !board.occupancy_all != 0
    })
}
