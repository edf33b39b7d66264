//! The ordered legality rule pipeline.
//!
//! Each placement rule is a named object behind one small trait, and the
//! pipeline is an explicit sequence applied in fixed precedence, so the
//! precedence order is a visible, testable artifact rather than implicit
//! call order. One parameterized pipeline serves both the full rule set and
//! the permissive variant; there are never two code paths.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::PlacementBoard;
use crate::oracle::check_oracle::CheckOracle;
use crate::placement::bishop_color::BishopColorValidator;
use crate::placement::check_avoidance::CheckAvoidanceGate;
use crate::placement::count_limit::PieceCountLimiter;
use crate::placement::king_safe_zone::KingSafeZoneGuard;
use crate::placement::pawn_placement::PawnPlacementValidator;
use crate::placement::verdicts::DropRejection;

/// A drop attempt after syntax, occupancy, and turn-order screening: the
/// color is already the forced side to move.
#[derive(Debug, Clone, Copy)]
pub struct DropRequest {
    pub square: Square,
    pub color: Color,
    pub kind: PieceKind,
}

/// Read-only views a rule may consult. Rules return verdicts and never
/// mutate anything.
pub struct RuleContext<'a> {
    pub board: &'a PlacementBoard,
    /// Frozen 3x3 zone masks around each king, indexed by the king's color.
    pub safe_zones: &'a [u64; 2],
    pub oracle: &'a dyn CheckOracle,
}

pub trait PlacementRule {
    fn name(&self) -> &'static str;

    fn check(&self, ctx: &RuleContext<'_>, request: &DropRequest) -> Result<(), DropRejection>;
}

/// Which rule set the orchestrator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesMode {
    /// Every placement rule, in the canonical precedence order.
    Full,
    /// Turn order, occupancy, and piece caps only; zone, pawn, bishop, and
    /// check gating are skipped. Useful for casual fronts and sandboxing.
    Permissive,
}

/// Build the rule sequence for a mode. Order is the canonical precedence:
/// count limit, king safe zone, pawn rules, bishop shade, check avoidance.
pub fn build_rule_pipeline(mode: RulesMode) -> Vec<Box<dyn PlacementRule>> {
    match mode {
        RulesMode::Full => vec![
            Box::new(PieceCountLimiter),
            Box::new(KingSafeZoneGuard),
            Box::new(PawnPlacementValidator),
            Box::new(BishopColorValidator),
            Box::new(CheckAvoidanceGate),
        ],
        RulesMode::Permissive => vec![Box::new(PieceCountLimiter)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pipeline_preserves_canonical_precedence() {
        let names: Vec<&str> = build_rule_pipeline(RulesMode::Full)
            .iter()
            .map(|rule| rule.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "piece_count_limiter",
                "king_safe_zone_guard",
                "pawn_placement_validator",
                "bishop_color_validator",
                "check_avoidance_gate",
            ]
        );
    }

    #[test]
    fn permissive_pipeline_keeps_only_the_count_cap() {
        let names: Vec<&str> = build_rule_pipeline(RulesMode::Permissive)
            .iter()
            .map(|rule| rule.name())
            .collect();
        assert_eq!(names, vec!["piece_count_limiter"]);
    }
}
