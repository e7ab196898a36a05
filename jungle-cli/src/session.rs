//! Interactive play loop.
//!
//! Reads one command per line and answers on the output stream. The loop never
//! stops on a rejected command; only `quit` or end of input ends it.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use jungle_core::notation::{parse_coord, parse_move_pair};
use jungle_core::{Coord, History, IllegalMove, Move, NotationError};

use crate::config::ShellConfig;
use crate::render::{render_board, render_status};

const HELP: &str = "\
commands:
  (x,y)->(x,y)   move a piece (also `x,y x,y`)
  select x,y     show where your piece on x,y may go
  undo           take back the last move
  reset          start a new game
  export         print the moves played so far
  help           show this text
  quit           leave";

/// One parsed input line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Play(Move),
    Select(Coord),
    Undo,
    Reset,
    Export,
    Help,
    Quit,
}

impl Command {
    /// Parse a trimmed, non-empty line.
    pub fn parse(line: &str) -> Result<Command, NotationError> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match word.to_ascii_lowercase().as_str() {
            "undo" | "u" => Ok(Command::Undo),
            "reset" | "new" => Ok(Command::Reset),
            "export" => Ok(Command::Export),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "select" | "s" => parse_coord(rest).map(Command::Select),
            _ => parse_move_pair(line).map(Command::Play),
        }
    }
}

/// A game driven by text commands.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
    history: History,
    targets: BTreeSet<Coord>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self::with_history(input, output, config, History::new())
    }

    /// Continue an existing game.
    pub fn with_history(input: R, output: W, config: ShellConfig, history: History) -> Self {
        Self {
            input,
            output,
            config,
            history,
            targets: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.show_board()?;
        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match Command::parse(trimmed) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(err) => {
                    debug!(input = trimmed, %err, "unparsed command");
                    writeln!(self.output, "error: {} (type `help`)", err)?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Apply one command and print its result.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Play(mov) => {
                self.targets.clear();
                match self.history.play_move(mov) {
                    Ok(()) => self.show_board()?,
                    Err(err) => writeln!(self.output, "error: {}", err)?,
                }
            }
            Command::Select(coord) => self.select(coord)?,
            Command::Undo => {
                self.targets.clear();
                match self.history.undo() {
                    Ok(()) => self.show_board()?,
                    Err(err) => writeln!(self.output, "error: {}", err)?,
                }
            }
            Command::Reset => {
                self.targets.clear();
                self.history.reset();
                self.show_board()?;
            }
            Command::Export => {
                let moves = self.history.export();
                if moves.is_empty() {
                    writeln!(self.output, "no moves played")?;
                } else {
                    writeln!(self.output, "{}", moves)?;
                }
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn select(&mut self, coord: Coord) -> Result<()> {
        let state = self.history.current();
        let Some(piece) = state.board().piece_at(coord) else {
            writeln!(self.output, "error: {}", IllegalMove::EmptySquare(coord))?;
            return Ok(());
        };
        let refusal = if state.is_won() {
            Some(IllegalMove::GameOver)
        } else if piece.owner() != state.current_player() {
            Some(IllegalMove::NotYourPiece(coord))
        } else {
            None
        };
        if let Some(err) = refusal {
            writeln!(self.output, "error: {}", err)?;
            return Ok(());
        }

        self.targets = state.legal_destinations(coord);
        let owner = self.config.name(piece.owner()).to_string();
        if self.targets.is_empty() {
            writeln!(self.output, "{}'s {} on {} cannot move", owner, piece.name(), coord)?;
        } else {
            let list: Vec<String> = self.targets.iter().map(Coord::to_string).collect();
            writeln!(self.output, "{}'s {} on {} may go to {}", owner, piece.name(), coord, list.join(" "))?;
        }

        if !self.config.show_targets {
            self.targets.clear();
        }
        self.show_board()?;
        self.targets.clear();
        Ok(())
    }

    fn show_board(&mut self) -> Result<()> {
        let state = self.history.current();
        let board = render_board(state.board(), &self.targets, &self.config);
        write!(self.output, "{}", board)?;
        writeln!(self.output, "{}", render_status(state, &self.config))?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        let player = self.history.current().current_player();
        write!(self.output, "{}> ", self.config.name(player))?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jungle_core::{Board, GameState, Piece, Player};
    use std::io::Cursor;

    fn c(x: u8, y: u8) -> Coord {
        Coord::new(x, y)
    }

    fn run(script: &str) -> (History, String) {
        run_with(script, ShellConfig::default())
    }

    fn run_with(script: &str, config: ShellConfig) -> (History, String) {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(script.as_bytes()), &mut output, config);
        session.run().unwrap();
        let history = session.history().clone();
        (history, String::from_utf8(output).unwrap())
    }

    // ========== Command parsing ==========

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("undo").unwrap(), Command::Undo);
        assert_eq!(Command::parse("RESET").unwrap(), Command::Reset);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
        assert_eq!(Command::parse("select 0,2").unwrap(), Command::Select(c(0, 2)));
        assert_eq!(Command::parse("s (6,6)").unwrap(), Command::Select(c(6, 6)));
        assert_eq!(
            Command::parse("(0,2)->(0,3)").unwrap(),
            Command::Play(Move::new(c(0, 2), c(0, 3)))
        );
        assert_eq!(
            Command::parse("0,2 0,3").unwrap(),
            Command::Play(Move::new(c(0, 2), c(0, 3)))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Command::parse("fly away").is_err());
        assert!(Command::parse("select").is_err());
        assert!(Command::parse("select 9,9").is_err());
    }

    // ========== Session loop ==========

    #[test]
    fn test_moves_are_played() {
        let (history, output) = run("(0,2)->(0,3)\n6,6 6,5\nquit\n");
        assert_eq!(history.turn_count(), 2);
        assert!(output.contains("Red (R) to move"));
        assert!(output.contains("Yellow (Y) to move"));
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let (history, output) = run("(6,6)->(6,5)\nbogus\nundo\n(0,2)->(0,3)\n");
        assert_eq!(history.turn_count(), 1);
        assert!(output.contains("error: the piece on (6,6) belongs to the other player"));
        assert!(output.contains("error: expected"));
        assert!(output.contains("error: nothing to undo"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (history, _) = run("(0,2)->(0,3)");
        assert_eq!(history.turn_count(), 1);
    }

    #[test]
    fn test_quit_ignores_the_rest() {
        let (history, _) = run("quit\n(0,2)->(0,3)\n");
        assert_eq!(history.turn_count(), 0);
    }

    #[test]
    fn test_undo_and_reset() {
        let (history, _) = run("(0,2)->(0,3)\n(6,6)->(6,5)\nundo\n");
        assert_eq!(history.turn_count(), 1);

        let (history, _) = run("(0,2)->(0,3)\n(6,6)->(6,5)\nreset\n");
        assert_eq!(history, History::new());
    }

    #[test]
    fn test_export() {
        let (_, output) = run("export\n(0,2)->(0,3)\nexport\n");
        assert!(output.contains("no moves played"));
        assert!(output.contains("Red> (0,2)->(0,3)\n"));
    }

    #[test]
    fn test_select_highlights_targets() {
        let (history, output) = run("select 0,2\n");
        assert_eq!(history.turn_count(), 0);
        assert!(output.contains("Yellow's rat on (0,2) may go to (0,1) (0,3) (1,2)"));
        assert!(output.contains(" 2  Y1  **  Y5"));
        assert!(output.contains(" 3  **  ~~  ~~"));
    }

    #[test]
    fn test_select_respects_show_targets() {
        let config = ShellConfig {
            show_targets: false,
            ..ShellConfig::default()
        };
        let (_, output) = run_with("select 0,2\n", config);
        assert!(output.contains("may go to"));
        assert!(!output.contains("**"));
    }

    #[test]
    fn test_select_only_own_pieces() {
        let (_, output) = run("select 6,6\n(0,2)->(0,3)\nselect 0,3\nselect 6,6\n");
        assert!(output.contains("error: the piece on (6,6) belongs to the other player"));
        assert!(output.contains("error: the piece on (0,3) belongs to the other player"));
        assert!(output.contains("Red's rat on (6,6) may go to"));
        assert!(!output.contains("Yellow's rat on (0,3)"));
    }

    #[test]
    fn test_select_after_win_is_refused() {
        let board = Board::empty()
            .with_piece(c(3, 7), Piece::new(Player::One, 2))
            .with_piece(c(0, 0), Piece::new(Player::Two, 5));
        let history = History::from_state(GameState::from_board(board, Player::One));
        let mut output = Vec::new();
        let script = "(3,7)->(3,8)\nselect 0,0\n";
        let mut session = Session::with_history(
            Cursor::new(script.as_bytes()),
            &mut output,
            ShellConfig::default(),
            history,
        );
        session.run().unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Yellow wins"));
        assert!(output.contains("error: the game is already won"));
        assert!(!output.contains("may go to"));
    }

    #[test]
    fn test_select_empty_square_and_blocked_piece() {
        let (_, output) = run("select 3,3\nselect 3,0\nselect 0,0\n");
        assert!(output.contains("error: there is no piece on (3,3)"));
        assert!(output.contains("error: there is no piece on (3,0)"));
        assert!(output.contains("Yellow's lion on (0,0) may go to (0,1) (1,0)"));
    }

    #[test]
    fn test_refused_move_keeps_position() {
        let script = "\
            (0,2)->(0,3)\n(6,6)->(6,5)\n(0,3)->(0,4)\n(6,5)->(6,4)\n\
            (0,4)->(0,5)\n(6,4)->(6,3)\n(0,5)->(1,5)\n(6,3)->(6,2)\n\
            (1,5)->(1,6)\n(6,2)->(6,1)\n(1,6)->(1,7)\n";
        let (history, output) = run(script);
        // The rat (1) is refused by the cat (2) on (1,7)
        assert_eq!(history.turn_count(), 10);
        assert!(output.contains("error: (1,6)->(1,7) is not allowed: the defender is stronger"));
    }

    #[test]
    fn test_custom_names_in_prompt() {
        let config = ShellConfig {
            player_names: ["North".to_string(), "South".to_string()],
            ..ShellConfig::default()
        };
        let (_, output) = run_with("(0,2)->(0,3)\n", config);
        assert!(output.contains("North> "));
        assert!(output.contains("South> "));
    }
}
