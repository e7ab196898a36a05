//! Error types.
//!
//! All of these are expected, recoverable rejections: the request is refused
//! and nothing changes.

use thiserror::Error;

use crate::{Coord, Move, Violation};

/// A move `play`/`apply_move` refused.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum IllegalMove {
    #[error("the game is already won")]
    GameOver,
    #[error("there is no piece on {0}")]
    EmptySquare(Coord),
    #[error("the piece on {0} belongs to the other player")]
    NotYourPiece(Coord),
    #[error("{mov} is not allowed: {reason}")]
    Forbidden { mov: Move, reason: Violation },
}

/// `undo` with only the initial state left.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("nothing to undo")]
pub struct NothingToUndo;

/// A piece strength outside 1-8.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("strength {0} is outside 1..=8")]
pub struct InvalidStrength(pub u8);

/// Malformed move text.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum NotationError {
    #[error("expected `(x,y)->(x,y)`, got {0:?}")]
    MissingArrow(String),
    #[error("expected `(x,y)` or `x,y`, got {0:?}")]
    BadCoordinate(String),
    #[error("({x},{y}) is off the 7x9 board")]
    OffBoard { x: u8, y: u8 },
}

/// A recorded game that could not be replayed.
///
/// `index` is the 1-based position of the offending move.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ReplayError {
    #[error("move {index}: {source}")]
    Notation { index: usize, source: NotationError },
    #[error("move {index}: {source}")]
    Illegal { index: usize, source: IllegalMove },
}
