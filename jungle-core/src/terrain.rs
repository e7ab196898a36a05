//! Terrain classification.
//!
//! Terrain is a pure function of the square and never changes during play.

use serde::{Deserialize, Serialize};

use crate::{Coord, Player, HEIGHT};

/// Kind of square.
///
/// Traps and dens belong to the player whose half of the board they sit in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Ground,
    Trap(Player),
    Den(Player),
    Water,
}

impl Terrain {
    #[inline]
    pub fn is_water(self) -> bool {
        self == Terrain::Water
    }

    #[inline]
    pub fn is_trap(self) -> bool {
        matches!(self, Terrain::Trap(_))
    }

    #[inline]
    pub fn is_den(self) -> bool {
        matches!(self, Terrain::Den(_))
    }

    /// Owner of a trap or den, `None` for ground and water.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Terrain::Trap(p) | Terrain::Den(p) => Some(p),
            Terrain::Ground | Terrain::Water => None,
        }
    }
}

/// Classify a square.
///
/// ```text
/// Den:   x = 3, y ∈ {0, 8}
/// Trap:  x ∈ {2, 4}, y ∈ {0, 8}   or   x = 3, y ∈ {1, 7}
/// Water: x ∈ {1, 2, 4, 5}, y ∈ {3, 4, 5}
/// ```
pub fn classify(coord: Coord) -> Terrain {
    let (x, y) = (coord.x(), coord.y());
    let half = if y < HEIGHT / 2 { Player::One } else { Player::Two };

    if x == 3 && matches!(y, 0 | 8) {
        Terrain::Den(half)
    } else if (matches!(x, 2 | 4) && matches!(y, 0 | 8)) || (x == 3 && matches!(y, 1 | 7)) {
        Terrain::Trap(half)
    } else if matches!(x, 1 | 2 | 4 | 5) && matches!(y, 3 | 4 | 5) {
        Terrain::Water
    } else {
        Terrain::Ground
    }
}
