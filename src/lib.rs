//! Crate root module declarations for the Drop Chess placement engine.
//!
//! This file exposes all top-level subsystems (board state, the placement
//! legality pipeline, the check oracle, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod placement {
    pub mod bishop_color;
    pub mod check_avoidance;
    pub mod count_limit;
    pub mod king_initializer;
    pub mod king_safe_zone;
    pub mod orchestrator;
    pub mod pawn_placement;
    pub mod rule_pipeline;
    pub mod sequencer;
    pub mod suggestion;
    pub mod verdicts;
}

pub mod oracle {
    pub mod attack_tables;
    pub mod check_oracle;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod render_board;
}

pub mod cli {
    pub mod shell;
}
