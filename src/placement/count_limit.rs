//! Per-color piece count cap.

use crate::game_state::chess_rules::max_count;
use crate::game_state::chess_types::PieceKind;
use crate::placement::rule_pipeline::{DropRequest, PlacementRule, RuleContext};
use crate::placement::verdicts::DropRejection;

/// Rejects a drop once the color already owns the maximum number of the
/// offered kind. Kings never reach this rule; the orchestrator turns them
/// away at the category screen.
pub struct PieceCountLimiter;

impl PlacementRule for PieceCountLimiter {
    fn name(&self) -> &'static str {
        "piece_count_limiter"
    }

    fn check(&self, ctx: &RuleContext<'_>, request: &DropRequest) -> Result<(), DropRejection> {
        debug_assert_ne!(request.kind, PieceKind::King, "kings are never dropped");

        if ctx.board.count(request.color, request.kind) >= max_count(request.kind) {
            return Err(DropRejection::PieceCountExceeded(request.kind));
        }

        Ok(())
    }
}
