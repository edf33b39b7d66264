//! Opposing-king safe-zone exclusion.

use crate::game_state::chess_types::square_mask;
use crate::placement::rule_pipeline::{DropRequest, PlacementRule, RuleContext};
use crate::placement::verdicts::DropRejection;

/// Rejects drops inside the *opponent's* 3x3 king neighborhood. A color's own
/// king zone imposes no restriction on its own drops. The zone masks are
/// computed once at reset and stay frozen, since kings never move during
/// placement.
pub struct KingSafeZoneGuard;

impl PlacementRule for KingSafeZoneGuard {
    fn name(&self) -> &'static str {
        "king_safe_zone_guard"
    }

    fn check(&self, ctx: &RuleContext<'_>, request: &DropRequest) -> Result<(), DropRejection> {
        let opponent_zone = ctx.safe_zones[request.color.opposite().index()];
        if opponent_zone & square_mask(request.square) != 0 {
            return Err(DropRejection::KingSafeZoneViolation(request.square));
        }

        Ok(())
    }
}
