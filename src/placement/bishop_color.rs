//! One bishop per square shade per color.

use crate::game_state::chess_types::{PieceKind, Shade};
use crate::placement::rule_pipeline::{DropRequest, PlacementRule, RuleContext};
use crate::placement::verdicts::DropRejection;

/// Each color may hold at most one bishop on light squares and one on dark
/// squares, independent of file.
pub struct BishopColorValidator;

impl PlacementRule for BishopColorValidator {
    fn name(&self) -> &'static str {
        "bishop_color_validator"
    }

    fn check(&self, ctx: &RuleContext<'_>, request: &DropRequest) -> Result<(), DropRejection> {
        if request.kind != PieceKind::Bishop {
            return Ok(());
        }

        let shade = Shade::of(request.square);
        if ctx.board.bishop_count_on_shade(request.color, shade) >= 1 {
            return Err(DropRejection::BishopColorDuplicate(shade));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{square_at, Color, Square};
    use crate::game_state::game_state::PlacementBoard;
    use crate::oracle::check_oracle::NeverInCheckOracle;
    use crate::placement::verdicts::RejectionCode;

    fn check(board: &PlacementBoard, color: Color, square: Square) -> Result<(), DropRejection> {
        let ctx = RuleContext {
            board,
            safe_zones: &[0, 0],
            oracle: &NeverInCheckOracle,
        };
        BishopColorValidator.check(
            &ctx,
            &DropRequest {
                square,
                color,
                kind: PieceKind::Bishop,
            },
        )
    }

    #[test]
    fn second_bishop_on_the_same_shade_is_refused() {
        let mut board = PlacementBoard::new_empty();
        board.add_piece(Color::White, PieceKind::Bishop, square_at(2, 0)); // c1, dark

        // f1 is light: fine.
        check(&board, Color::White, square_at(5, 0)).expect("opposite shade should pass");

        board.add_piece(Color::White, PieceKind::Bishop, square_at(5, 0));

        // g2 is light: duplicate.
        let rejection =
            check(&board, Color::White, square_at(6, 1)).expect_err("light shade is taken");
        assert_eq!(rejection.code(), RejectionCode::BishopColorDuplicate);
    }

    #[test]
    fn shade_caps_are_per_color() {
        let mut board = PlacementBoard::new_empty();
        board.add_piece(Color::White, PieceKind::Bishop, square_at(2, 0)); // c1, dark

        // Black may still use a dark square.
        check(&board, Color::Black, square_at(5, 7)).expect("f8 is dark but belongs to black");
    }

    #[test]
    fn non_bishops_pass_through() {
        let mut board = PlacementBoard::new_empty();
        board.add_piece(Color::White, PieceKind::Bishop, square_at(2, 0));

        let ctx = RuleContext {
            board: &board,
            safe_zones: &[0, 0],
            oracle: &NeverInCheckOracle,
        };
        BishopColorValidator
            .check(
                &ctx,
                &DropRequest {
                    square: square_at(4, 0),
                    color: Color::White,
                    kind: PieceKind::Knight,
                },
            )
            .expect("the rule only constrains bishops");
    }
}
