//! Interactive console front end.
//!
//! This module owns the turn loop: it renders the board, reads candidate
//! moves from stdin, validates them through the rule core, applies legal
//! ones, and announces the winner when the evaluator reports a terminal
//! outcome. Malformed input never reaches the core; the parser turns it
//! into a retry prompt.
//!
//! ## Commands
//!
//! - `<fromRow> <fromCol> <toRow> <toCol>` - attempt a move
//! - `m <row> <col>` - list the legal moves for the piece on a square
//! - `n` - start a new game
//! - `help` - show the rules
//! - `q` - quit without a winner

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::board::{Cell, Square};
use crate::constants::{BOARD_SIZE, GEESE_START};
use crate::game::{
    GameState, Outcome, apply_move, check_move, evaluate_outcome, legal_moves_from, new_game,
};

const RULES: &str = "\
Fox and Geese is played on the dark squares of an 8x8 board.
- Geese move one square diagonally forward (down the board).
- The Fox moves one square diagonally in any direction.
- The Fox captures a Goose by jumping over it onto the empty square beyond.
- The Fox wins once 7 Geese have been captured.
- The Geese win by leaving the Fox no legal move on its turn.";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move { from: Square, to: Square },
    Hint(Square),
    NewGame,
    Rules,
    Quit,
}

/// Console game session. Owns the single game state for its lifetime.
pub struct Console {
    state: GameState,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self { state: new_game() }
    }

    /// Run the turn loop until the game ends or the player quits.
    ///
    /// Reads stdin line by line. Only I/O failures are errors; illegal
    /// moves and malformed input loop back to a fresh prompt.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut notice = String::new();

        self.render(&mut stdout, &notice)?;
        for line in stdin.lock().lines() {
            let line = line?;
            let Some(command) = parse_command(&line) else {
                notice = "Invalid input, expected: fromRow fromCol toRow toCol".to_string();
                self.render(&mut stdout, &notice)?;
                continue;
            };

            match command {
                Command::Quit => {
                    writeln!(stdout, "Game ended by player")?;
                    return Ok(());
                }
                Command::NewGame => {
                    self.state = new_game();
                    notice = "New game".to_string();
                }
                Command::Rules => {
                    notice = RULES.to_string();
                }
                Command::Hint(sq) => {
                    notice = describe_moves(&self.state, sq);
                }
                Command::Move { from, to } => {
                    match check_move(&self.state, self.state.to_move, from, to) {
                        Err(err) => notice = format!("Invalid move: {err}"),
                        Ok(kind) => {
                            apply_move(&mut self.state, from, to, kind);
                            let mut outcome = evaluate_outcome(&self.state);
                            if outcome == Outcome::Ongoing {
                                // The trap condition can only fire once the
                                // turn has actually passed to the fox, so
                                // evaluate again after switching sides.
                                self.state.to_move = self.state.to_move.other();
                                outcome = evaluate_outcome(&self.state);
                            }
                            match outcome {
                                Outcome::Ongoing => notice.clear(),
                                outcome => {
                                    self.state.over = true;
                                    self.render(&mut stdout, "")?;
                                    writeln!(stdout, "{}", announce(outcome))?;
                                    return Ok(());
                                }
                            }
                        }
                    }
                }
            }
            self.render(&mut stdout, &notice)?;
        }
        Ok(())
    }

    /// Draw the board frame, status lines, and prompt.
    fn render(&self, out: &mut impl Write, notice: &str) -> Result<()> {
        // Clear the screen between frames.
        write!(out, "\x1b[2J\x1b[H")?;

        writeln!(out, "\n  Fox and Geese\n")?;
        writeln!(out, "    0 1 2 3 4 5 6 7")?;
        writeln!(out, "  -------------------")?;
        for row in 0..BOARD_SIZE {
            write!(out, "{row} | ")?;
            for col in 0..BOARD_SIZE {
                if (row + col) % 2 == 1 {
                    write!(out, "  ")?;
                } else {
                    let ch = match self.state.board.get((row, col)) {
                        Some(Cell::Goose) => 'G',
                        Some(Cell::Fox) => 'F',
                        _ => '.',
                    };
                    write!(out, "{ch} ")?;
                }
            }
            writeln!(out, "|")?;
        }
        writeln!(out, "  -------------------\n")?;

        writeln!(
            out,
            "Geese remaining: {} (captured: {})",
            self.state.geese,
            GEESE_START - self.state.geese
        )?;
        if let Some(last) = self.state.last {
            writeln!(out, "Last move: {last}")?;
        }
        writeln!(out, "Current turn: {}", self.state.to_move.name())?;
        if !notice.is_empty() {
            writeln!(out, "{notice}")?;
        }
        writeln!(
            out,
            "Enter move (fromRow fromCol toRow toCol), m <r> <c> for hints, n for new game, q to quit"
        )?;
        write!(out, "Your move: ")?;
        out.flush()?;
        Ok(())
    }
}

/// Parse one input line. Returns `None` for anything malformed.
fn parse_command(line: &str) -> Option<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [] => None,
        ["q"] | ["Q"] | ["quit"] => Some(Command::Quit),
        ["n"] | ["new"] => Some(Command::NewGame),
        ["help"] | ["?"] | ["rules"] => Some(Command::Rules),
        ["m", row, col] => {
            let sq = (row.parse().ok()?, col.parse().ok()?);
            Some(Command::Hint(sq))
        }
        [fr, fc, tr, tc] => {
            let from = (fr.parse().ok()?, fc.parse().ok()?);
            let to = (tr.parse().ok()?, tc.parse().ok()?);
            Some(Command::Move { from, to })
        }
        _ => None,
    }
}

/// Human-readable list of legal moves from a square.
fn describe_moves(state: &GameState, sq: Square) -> String {
    let moves = legal_moves_from(state, sq);
    if moves.is_empty() {
        return format!("No legal moves from {} {}", sq.0, sq.1);
    }
    let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    format!("Legal moves: {}", listed.join(", "))
}

fn announce(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::FoxWins => "Fox wins! Too many geese have been captured!",
        Outcome::GeeseWin => "Geese win! Fox is trapped!",
        Outcome::Ongoing => "",
    }
}
