//! The placement state machine.
//!
//! `PlacementOrchestrator` exclusively owns the board store and the sequence
//! state, runs every drop attempt through the fixed validation pipeline, and
//! commits accepted drops transactionally: piece written, counter advanced,
//! FEN re-encoded, or nothing at all. Callers only ever see read snapshots.
//!
//! Pipeline precedence for `place_attempt`, short-circuiting at the first
//! failure: phase guard, square syntax, occupancy, turn/category (the
//! caller's color argument is overridden by the sequencer), then the named
//! rule sequence (count limit, king safe zone, pawn rules, bishop shade,
//! check avoidance).

use rand::Rng;

use crate::game_state::chess_types::{Color, PieceCategory, PieceKind, Square};
use crate::game_state::game_state::PlacementBoard;
use crate::oracle::attack_tables::king_zone;
use crate::oracle::check_oracle::{AttackTableOracle, CheckOracle};
use crate::placement::king_initializer::{initialize_kings, initialize_kings_at};
use crate::placement::rule_pipeline::{
    build_rule_pipeline, DropRequest, PlacementRule, RuleContext, RulesMode,
};
use crate::placement::sequencer::{
    color_to_move, required_category, PlacementPhase, SequenceState,
};
use crate::placement::suggestion::suggest_piece;
use crate::placement::verdicts::{DropRejection, PlacementReceipt};
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::fen_generator::generate_placement_fen;

pub struct PlacementOrchestrator {
    board: PlacementBoard,
    sequence: SequenceState,
    /// Frozen 3x3 zone around each king, indexed by the king's color.
    safe_zones: [u64; 2],
    current_fen: String,
    mode: RulesMode,
    rules: Vec<Box<dyn PlacementRule>>,
    oracle: Box<dyn CheckOracle>,
}

impl PlacementOrchestrator {
    pub fn new(oracle: Box<dyn CheckOracle>, mode: RulesMode, rng: &mut impl Rng) -> Self {
        let (board, sequence) = initialize_kings(rng);
        let mut orchestrator = Self {
            board: PlacementBoard::new_empty(),
            sequence,
            safe_zones: [0, 0],
            current_fen: String::new(),
            mode,
            rules: build_rule_pipeline(mode),
            oracle,
        };
        orchestrator.install(board, sequence);
        orchestrator
    }

    /// Full rule set with the built-in attack-table oracle.
    pub fn with_default_oracle(rng: &mut impl Rng) -> Self {
        Self::new(Box::new(AttackTableOracle), RulesMode::Full, rng)
    }

    /// Attempt one drop. Either fully commits (piece written, counter
    /// advanced, FEN regenerated) or rejects with no observable state change.
    ///
    /// The `_requested_color` argument is part of the external interface but
    /// is display-side input only; the side to move is always forced from the
    /// move counter.
    pub fn place_attempt(
        &mut self,
        square_text: &str,
        kind: PieceKind,
        _requested_color: Color,
    ) -> Result<PlacementReceipt, DropRejection> {
        if self.sequence.phase == PlacementPhase::Standard {
            return Err(DropRejection::PlacementOver);
        }

        let square = algebraic_to_square(square_text)
            .map_err(|_| DropRejection::InvalidSquareFormat(square_text.to_owned()))?;

        if !self.board.is_empty(square) {
            return Err(DropRejection::SquareOccupied(square));
        }

        let color = color_to_move(self.sequence.move_count);
        let required = required_category(self.sequence.move_count);
        if kind == PieceKind::King || kind.category() != required {
            return Err(DropRejection::WrongMoveType {
                required,
                offered: kind,
            });
        }

        let request = DropRequest { square, color, kind };
        let ctx = RuleContext {
            board: &self.board,
            safe_zones: &self.safe_zones,
            oracle: self.oracle.as_ref(),
        };
        for rule in &self.rules {
            rule.check(&ctx, &request)?;
        }

        self.board.add_piece(color, kind, square);
        self.sequence.advance();
        self.current_fen = generate_placement_fen(&self.board);

        let (next_color, next_category) = self.sequence.requirement();
        Ok(PlacementReceipt {
            square,
            color,
            kind,
            fen: self.current_fen.clone(),
            next_color,
            next_category,
        })
    }

    /// Discard all placement state and start over with freshly drawn kings.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        let (board, sequence) = initialize_kings(rng);
        self.install(board, sequence);
    }

    /// Deterministic reset for replays and tests.
    pub fn reset_with_kings(&mut self, white_king: Square, black_king: Square) {
        let (board, sequence) = initialize_kings_at(white_king, black_king);
        self.install(board, sequence);
    }

    fn install(&mut self, board: PlacementBoard, sequence: SequenceState) {
        self.safe_zones = [
            board.king_square(Color::White).map_or(0, king_zone),
            board.king_square(Color::Black).map_or(0, king_zone),
        ];
        self.current_fen = generate_placement_fen(&board);
        self.board = board;
        self.sequence = sequence;
    }

    /// End the drop phase and hand the final snapshot to the standard-chess
    /// collaborator. One-way: the first call returns the frozen FEN, repeats
    /// return `None`, and further drop attempts are rejected.
    pub fn transition_to_standard(&mut self) -> Option<String> {
        if self.sequence.phase == PlacementPhase::Standard {
            return None;
        }
        self.sequence.phase = PlacementPhase::Standard;
        Some(self.current_fen.clone())
    }

    #[inline]
    pub fn current_requirement(&self) -> (Color, PieceCategory) {
        self.sequence.requirement()
    }

    #[inline]
    pub fn get_fen(&self) -> &str {
        &self.current_fen
    }

    #[inline]
    pub fn board(&self) -> &PlacementBoard {
        &self.board
    }

    #[inline]
    pub fn sequence(&self) -> &SequenceState {
        &self.sequence
    }

    #[inline]
    pub fn mode(&self) -> RulesMode {
        self.mode
    }

    /// Switch rule sets. Rebuilds the pipeline; board and sequence state are
    /// untouched.
    pub fn set_mode(&mut self, mode: RulesMode) {
        self.mode = mode;
        self.rules = build_rule_pipeline(mode);
    }

    /// Advisory recommendation for the current requirement.
    pub fn suggest(&self) -> PieceKind {
        let (color, category) = self.sequence.requirement();
        suggest_piece(category, color, &self.board)
    }
}
