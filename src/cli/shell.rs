//! Line-oriented placement front-end.
//!
//! Parses shell commands from stdin, routes drop attempts and phase control
//! through the orchestrator, and prints verdicts, board views, and FEN
//! snapshots. This is the reference display/input collaborator; the engine
//! itself never does I/O.

use std::io::{self, BufRead, Write};

use rand::{rngs::StdRng, SeedableRng};

use crate::game_state::chess_types::{Color, PieceCategory, PieceKind};
use crate::placement::orchestrator::PlacementOrchestrator;
use crate::placement::rule_pipeline::RulesMode;
use crate::utils::render_board::render_board;

const HELP_TEXT: &str = "commands:\n\
    \x20 drop <square> <piece>   attempt a drop, e.g. 'drop e2 p' or 'drop g1 n'\n\
    \x20 suggest                 recommend a piece for the current turn\n\
    \x20 requirement             show whose turn it is and what to drop\n\
    \x20 board                   render the current board\n\
    \x20 fen                     print the current FEN snapshot\n\
    \x20 mode <full|permissive>  switch the rule set\n\
    \x20 reset [seed]            restart the placement phase\n\
    \x20 start                   end placement and hand off the final FEN\n\
    \x20 quit                    exit";

pub fn run_stdio_loop(seed: Option<u64>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut shell = ShellState::new(seed);

    writeln!(stdout, "drop_chess placement shell ('help' for commands)")?;
    writeln!(stdout, "{}", shell.requirement_line())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = shell.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ShellState {
    orchestrator: PlacementOrchestrator,
}

impl ShellState {
    pub fn new(seed: Option<u64>) -> Self {
        let orchestrator = match seed {
            Some(seed) => {
                PlacementOrchestrator::with_default_oracle(&mut StdRng::seed_from_u64(seed))
            }
            None => PlacementOrchestrator::with_default_oracle(&mut rand::rng()),
        };
        Self { orchestrator }
    }

    /// Handle one command line. Returns true when the shell should exit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(false);
        };

        match command {
            "drop" => {
                let (Some(square), Some(piece)) = (tokens.next(), tokens.next()) else {
                    writeln!(out, "usage: drop <square> <piece>")?;
                    return Ok(false);
                };
                let Some(kind) = parse_piece(piece) else {
                    writeln!(out, "unknown piece '{piece}' (use p, n, b, r, q)")?;
                    return Ok(false);
                };
                let (color, _) = self.orchestrator.current_requirement();
                match self.orchestrator.place_attempt(square, kind, color) {
                    Ok(receipt) => {
                        writeln!(
                            out,
                            "placed {:?} {:?} on {square}",
                            receipt.color, receipt.kind
                        )?;
                        writeln!(out, "fen: {}", receipt.fen)?;
                        writeln!(
                            out,
                            "next: {} drops {}",
                            color_name(receipt.next_color),
                            category_name(receipt.next_category)
                        )?;
                    }
                    Err(rejection) => {
                        writeln!(out, "rejected: {rejection}")?;
                    }
                }
            }
            "suggest" => {
                writeln!(out, "suggestion: {:?}", self.orchestrator.suggest())?;
            }
            "requirement" => {
                writeln!(out, "{}", self.requirement_line())?;
            }
            "board" => {
                writeln!(out, "{}", render_board(self.orchestrator.board()))?;
            }
            "fen" => {
                writeln!(out, "{}", self.orchestrator.get_fen())?;
            }
            "mode" => match tokens.next() {
                Some("full") => {
                    self.orchestrator.set_mode(RulesMode::Full);
                    writeln!(out, "rule set: full")?;
                }
                Some("permissive") => {
                    self.orchestrator.set_mode(RulesMode::Permissive);
                    writeln!(out, "rule set: permissive")?;
                }
                _ => {
                    writeln!(out, "usage: mode <full|permissive>")?;
                }
            },
            "reset" => {
                match tokens.next().map(str::parse::<u64>) {
                    Some(Ok(seed)) => {
                        self.orchestrator.reset(&mut StdRng::seed_from_u64(seed));
                    }
                    Some(Err(_)) => {
                        writeln!(out, "usage: reset [seed]")?;
                        return Ok(false);
                    }
                    None => {
                        self.orchestrator.reset(&mut rand::rng());
                    }
                }
                writeln!(out, "placement restarted")?;
                writeln!(out, "{}", self.requirement_line())?;
            }
            "start" => match self.orchestrator.transition_to_standard() {
                Some(fen) => {
                    writeln!(out, "placement complete, standard play begins")?;
                    writeln!(out, "final fen: {fen}")?;
                }
                None => {
                    writeln!(out, "standard play has already begun")?;
                }
            },
            "help" => {
                writeln!(out, "{HELP_TEXT}")?;
            }
            "quit" | "exit" => {
                return Ok(true);
            }
            other => {
                writeln!(out, "unknown command '{other}' ('help' for commands)")?;
            }
        }

        Ok(false)
    }

    fn requirement_line(&self) -> String {
        let (color, category) = self.orchestrator.current_requirement();
        format!(
            "to move: {} ({} required)",
            color_name(color),
            category_name(category)
        )
    }
}

fn parse_piece(token: &str) -> Option<PieceKind> {
    let mut chars = token.chars();
    let letter = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match PieceKind::from_letter(letter) {
        // Kings are placed at reset, not dropped.
        Some(PieceKind::King) | None => None,
        kind => kind,
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

fn category_name(category: PieceCategory) -> &'static str {
    match category {
        PieceCategory::Pawn => "pawn",
        PieceCategory::Piece => "piece",
    }
}
