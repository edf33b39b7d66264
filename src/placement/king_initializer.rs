//! Random king setup at the start of the drop phase.
//!
//! Draws each king's file uniformly from a-h and its rank uniformly from the
//! color's two home ranks (white 1-2, black 7-8). The rank ranges never
//! intersect, so no collision check is needed. The random source is injected
//! so tests can seed a `StdRng` and reproduce exact king squares.

use rand::Rng;

use crate::game_state::chess_rules::king_home_ranks;
use crate::game_state::chess_types::{square_at, square_rank, Color, PieceKind, Square};
use crate::game_state::game_state::PlacementBoard;
use crate::placement::sequencer::SequenceState;

/// Produce a board holding only the two kings and a fresh sequence state at
/// move count 1.
pub fn initialize_kings(rng: &mut impl Rng) -> (PlacementBoard, SequenceState) {
    let white = draw_king_square(rng, Color::White);
    let black = draw_king_square(rng, Color::Black);
    initialize_kings_at(white, black)
}

/// Deterministic setup for replays and tests: place the kings on the given
/// home-rank squares.
pub fn initialize_kings_at(white: Square, black: Square) -> (PlacementBoard, SequenceState) {
    debug_assert!(
        home_rank_holds(Color::White, white),
        "white king must start on rank 1 or 2"
    );
    debug_assert!(
        home_rank_holds(Color::Black, black),
        "black king must start on rank 7 or 8"
    );

    let mut board = PlacementBoard::new_empty();
    board.add_piece(Color::White, PieceKind::King, white);
    board.add_piece(Color::Black, PieceKind::King, black);

    (board, SequenceState::new())
}

fn draw_king_square(rng: &mut impl Rng, color: Color) -> Square {
    let file = rng.random_range(0..8u8);
    let (low, high) = king_home_ranks(color);
    let rank = rng.random_range(low..=high);
    square_at(file, rank)
}

fn home_rank_holds(color: Color, square: Square) -> bool {
    let (low, high) = king_home_ranks(color);
    (low..=high).contains(&square_rank(square))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::placement::sequencer::PlacementPhase;

    #[test]
    fn seeded_draws_are_reproducible() {
        let (board_a, _) = initialize_kings(&mut StdRng::seed_from_u64(42));
        let (board_b, _) = initialize_kings(&mut StdRng::seed_from_u64(42));
        assert_eq!(board_a, board_b);
    }

    #[test]
    fn kings_always_land_on_their_home_ranks() {
        for seed in 0..200u64 {
            let (board, state) = initialize_kings(&mut StdRng::seed_from_u64(seed));

            let white = board.king_square(Color::White).expect("white king placed");
            let black = board.king_square(Color::Black).expect("black king placed");
            assert!(square_rank(white) <= 1, "seed {seed}: white off home ranks");
            assert!(square_rank(black) >= 6, "seed {seed}: black off home ranks");

            // Only the two kings exist.
            assert_eq!(board.occupancy_all.count_ones(), 2);
            assert_eq!(state.move_count, 1);
            assert_eq!(state.phase, PlacementPhase::Placement);
        }
    }

    #[test]
    fn forced_setup_places_the_requested_squares() {
        let (board, _) = initialize_kings_at(square_at(4, 0), square_at(4, 7));
        assert_eq!(board.king_square(Color::White), Some(square_at(4, 0)));
        assert_eq!(board.king_square(Color::Black), Some(square_at(4, 7)));
    }
}
