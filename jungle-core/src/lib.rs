//! Jungle (Dou Shou Qi) rules engine with an immutable game-state history.
//!
//! # Board Layout (7 × 9)
//!
//! ```text
//!          x: 0  1  2  3  4  5  6
//!   y = 0     .  .  #  @  #  .  .    Player One's den and traps
//!   y = 1     .  .  .  #  .  .  .
//!   y = 2     .  .  .  .  .  .  .
//!   y = 3     .  ~  ~  .  ~  ~  .
//!   y = 4     .  ~  ~  .  ~  ~  .    two 2×3 rivers
//!   y = 5     .  ~  ~  .  ~  ~  .
//!   y = 6     .  .  .  .  .  .  .
//!   y = 7     .  .  .  #  .  .  .
//!   y = 8     .  .  #  @  #  .  .    Player Two's den and traps
//!
//!   .  ground   #  trap   @  den   ~  water
//! ```
//!
//! Cells are stored row-major: `index = y * 7 + x`.
//!
//! # Pieces
//!
//! Each player owns eight animals ranked by strength:
//!
//! ```text
//!   1 rat   2 cat   3 dog   4 wolf   5 leopard   6 tiger   7 lion   8 elephant
//! ```
//!
//! A piece may capture an enemy of equal or lower strength, except that the
//! rat captures the elephant and the elephant cannot capture the rat. Any
//! piece captures a defender standing on a trap.
//!
//! # Layers
//!
//! - [`terrain`] classifies squares.
//! - [`board`] stores pieces, [`rules`] decides move legality.
//! - [`state`] applies moves to produce new snapshots.
//! - [`history`] stacks snapshots for undo and replay.

pub mod board;
pub mod error;
pub mod history;
pub mod notation;
pub mod piece;
pub mod rules;
pub mod state;
pub mod terrain;

#[cfg(feature = "wasm")]
pub mod wasm;

use serde::{Deserialize, Serialize};

pub use board::Board;
pub use error::{IllegalMove, InvalidStrength, NothingToUndo, NotationError, ReplayError};
pub use history::History;
pub use piece::Piece;
pub use rules::{is_legal, Violation};
pub use state::GameState;
pub use terrain::{classify, Terrain};

/// Board width (columns, `x`).
pub const WIDTH: u8 = 7;
/// Board height (rows, `y`).
pub const HEIGHT: u8 = 9;
/// Number of squares on the board.
pub const CELLS: usize = WIDTH as usize * HEIGHT as usize;

/// Player identifier.
///
/// `One` moves first and defends the den on row 0; `Two` defends row 8.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index 0 or 1, usable for per-player arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The row holding this player's den.
    #[inline]
    pub fn home_row(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => HEIGHT - 1,
        }
    }

    /// This player's den square. The owner may never step onto it.
    #[inline]
    pub fn den(self) -> Coord {
        Coord::new(3, self.home_row())
    }

    /// Both players, in turn order.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::One, Player::Two].into_iter()
    }
}

/// Square on the 7×9 board.
///
/// Always on the board: construction rejects off-board pairs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Create a coordinate, panicking if it is off the board.
    ///
    /// Meant for literals and constants; use [`Coord::try_new`] for input.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Coord {
        assert!(x < WIDTH && y < HEIGHT, "coordinate off the board");
        Coord { x, y }
    }

    /// Create a coordinate if `(x, y)` is on the board.
    #[inline]
    pub const fn try_new(x: u8, y: u8) -> Option<Coord> {
        if x < WIDTH && y < HEIGHT {
            Some(Coord { x, y })
        } else {
            None
        }
    }

    /// Create a coordinate from a row-major cell index.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Coord> {
        if idx < CELLS {
            Some(Coord {
                x: (idx % WIDTH as usize) as u8,
                y: (idx / WIDTH as usize) as u8,
            })
        } else {
            None
        }
    }

    /// Column (0-6).
    #[inline]
    pub fn x(self) -> u8 {
        self.x
    }

    /// Row (0-8).
    #[inline]
    pub fn y(self) -> u8 {
        self.y
    }

    /// Row-major cell index (0-62).
    #[inline]
    pub fn index(self) -> usize {
        self.y as usize * WIDTH as usize + self.x as usize
    }

    /// Manhattan distance to another square.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u8 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Terrain of this square.
    #[inline]
    pub fn terrain(self) -> Terrain {
        terrain::classify(self)
    }

    /// Iterate over all 63 squares, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELLS).filter_map(Coord::from_index)
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = NotationError;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Coord::try_new(x, y).ok_or(NotationError::OffBoard { x, y })
    }
}

impl From<Coord> for (u8, u8) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A move of the piece on `from` to `to`.
///
/// Formats as `(x,y)->(x,y)`; see [`notation`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[inline]
    pub fn new(from: Coord, to: Coord) -> Move {
        Move { from, to }
    }
}
