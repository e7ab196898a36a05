//! Jungle terminal shell.
//!
//! - `jungle play` (default) - interactive game on stdin/stdout
//! - `jungle replay "<moves>"` - replay a recorded game and show the result
//! - `jungle board` - print the starting position and a glyph key

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use jungle_core::{Board, History};

mod config;
mod render;
mod session;

use config::ShellConfig;
use render::{legend, render_board, render_status};
use session::Session;

#[derive(Parser)]
#[command(name = "jungle")]
#[command(about = "Play Jungle (Dou Shou Qi) in the terminal", version)]
struct Cli {
    /// TOML file with display settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log rejected moves and other detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Do not mark legal targets after `select`
    #[arg(long, global = true)]
    no_targets: bool,

    /// Hide the axis labels
    #[arg(long, global = true)]
    no_coordinates: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game, one command per line
    Play {
        /// Start from a recorded move list instead of the opening position
        #[arg(long)]
        moves: Option<String>,
    },

    /// Replay a space-separated move list and print the final position
    Replay {
        /// Moves in `(x,y)->(x,y)` notation
        moves: String,
    },

    /// Print the starting position with a glyph key
    Board,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "jungle=debug" } else { "jungle=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = shell_config(&cli)?;

    match cli.command.unwrap_or(Commands::Play { moves: None }) {
        Commands::Play { moves } => play(config, moves.as_deref()),
        Commands::Replay { moves } => replay(&config, &moves),
        Commands::Board => show_initial(&config),
    }
}

/// Config file first, then command-line overrides.
fn shell_config(cli: &Cli) -> Result<ShellConfig> {
    let mut config = ShellConfig::load(cli.config.as_deref())?;
    if cli.no_targets {
        config.show_targets = false;
    }
    if cli.no_coordinates {
        config.coordinates = false;
    }
    Ok(config)
}

fn play(config: ShellConfig, moves: Option<&str>) -> Result<()> {
    let input = io::stdin().lock();
    let output = io::stdout();
    let mut session = match moves {
        Some(moves) => {
            let history = History::replay(moves).context("could not replay starting moves")?;
            Session::with_history(input, output, config, history)
        }
        None => Session::new(input, output, config),
    };
    tracing::info!(turns = session.history().turn_count(), "starting game");
    session.run()?;

    println!();
    let final_moves = session.history().export();
    if !final_moves.is_empty() {
        println!("{}", final_moves);
    }
    Ok(())
}

fn replay(config: &ShellConfig, moves: &str) -> Result<()> {
    let history = History::replay(moves).context("replay failed")?;
    let state = history.current();

    let mut out = io::stdout().lock();
    write!(out, "{}", render_board(state.board(), &BTreeSet::new(), config))?;
    writeln!(out, "{}", render_status(state, config))?;
    writeln!(out, "{} moves", history.turn_count())?;
    Ok(())
}

fn show_initial(config: &ShellConfig) -> Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", render_board(&Board::initial(), &BTreeSet::new(), config))?;
    writeln!(out)?;
    write!(out, "{}", legend(config))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from(["jungle", "--no-targets", "board"]);
        let config = shell_config(&cli).unwrap();
        assert!(!config.show_targets);
        assert!(config.coordinates);
        assert!(matches!(cli.command, Some(Commands::Board)));
    }

    #[test]
    fn test_replay_takes_moves() {
        let cli = Cli::parse_from(["jungle", "replay", "(0,2)->(0,3) (6,6)->(6,5)"]);
        match cli.command {
            Some(Commands::Replay { moves }) => assert_eq!(moves, "(0,2)->(0,3) (6,6)->(6,5)"),
            _ => panic!("expected replay"),
        }
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["jungle", "--config", "/nonexistent/jungle.toml"]);
        assert!(shell_config(&cli).is_err());
    }
}
