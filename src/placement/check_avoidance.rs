//! Adapter between the rule pipeline and the injected check oracle.

use crate::game_state::chess_rules::fallback_king_square;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::placement::rule_pipeline::{DropRequest, PlacementRule, RuleContext};
use crate::placement::verdicts::DropRejection;

/// Builds the hypothetical position (current board plus the proposed piece)
/// and asks the oracle whether the *opponent* of the placing color would
/// stand in check. The oracle requires one king per side; a structurally
/// missing king post-initialization is an internal invariant breach, so it
/// is asserted and patched on the oracle's input copy only, never exposed as
/// a placement rejection.
pub struct CheckAvoidanceGate;

impl PlacementRule for CheckAvoidanceGate {
    fn name(&self) -> &'static str {
        "check_avoidance_gate"
    }

    fn check(&self, ctx: &RuleContext<'_>, request: &DropRequest) -> Result<(), DropRejection> {
        let mut hypothetical = ctx.board.clone();
        hypothetical.add_piece(request.color, request.kind, request.square);

        for color in [Color::White, Color::Black] {
            if hypothetical.king_square(color).is_some() {
                continue;
            }
            debug_assert!(
                false,
                "{color:?} king missing at oracle call; reset or commit is broken"
            );
            eprintln!("drop_chess: {color:?} king missing at oracle call; substituting fallback");
            let fallback = fallback_king_square(color);
            if hypothetical.is_empty(fallback) {
                hypothetical.add_piece(color, PieceKind::King, fallback);
            }
        }

        if ctx
            .oracle
            .in_check(&hypothetical, request.color.opposite())
        {
            return Err(DropRejection::CheckViolation);
        }

        Ok(())
    }
}
