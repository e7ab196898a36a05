//! Animal pieces.

use serde::{Deserialize, Serialize};

use crate::{InvalidStrength, Player};

/// The weakest animal. Swims, blocks leaps, and captures the elephant.
pub const RAT: u8 = 1;
/// Leaps over water.
pub const TIGER: u8 = 6;
/// Leaps over water.
pub const LION: u8 = 7;
/// The strongest animal, but falls to the rat.
pub const ELEPHANT: u8 = 8;

const NAMES: [&str; 8] = ["rat", "cat", "dog", "wolf", "leopard", "tiger", "lion", "elephant"];

/// An animal: owner plus strength (1-8).
///
/// Pieces are immutable values; moving one copies it to another square.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Player, u8)", into = "(Player, u8)")]
pub struct Piece {
    owner: Player,
    strength: u8,
}

impl Piece {
    /// Create a piece, panicking if `strength` is outside 1-8.
    #[inline]
    pub const fn new(owner: Player, strength: u8) -> Piece {
        assert!(strength >= RAT && strength <= ELEPHANT, "strength out of range");
        Piece { owner, strength }
    }

    /// Create a piece if `strength` is within 1-8.
    #[inline]
    pub const fn try_new(owner: Player, strength: u8) -> Option<Piece> {
        if strength >= RAT && strength <= ELEPHANT {
            Some(Piece { owner, strength })
        } else {
            None
        }
    }

    #[inline]
    pub fn owner(self) -> Player {
        self.owner
    }

    #[inline]
    pub fn strength(self) -> u8 {
        self.strength
    }

    /// Only the rat may enter water.
    #[inline]
    pub fn is_swimmer(self) -> bool {
        self.strength == RAT
    }

    /// Tiger and lion leap across rivers.
    #[inline]
    pub fn can_leap(self) -> bool {
        matches!(self.strength, TIGER | LION)
    }

    /// Strict strength comparison, ignoring the rat/elephant exception.
    #[inline]
    pub fn is_stronger_than(self, other: Piece) -> bool {
        self.strength > other.strength
    }

    /// The one inverted pair: a rat attacking an elephant.
    #[inline]
    pub fn is_rat_against_elephant(self, defender: Piece) -> bool {
        self.strength == RAT && defender.strength == ELEPHANT
    }

    /// The other half of the inversion: an elephant attacking a rat.
    #[inline]
    pub fn is_elephant_against_rat(self, defender: Piece) -> bool {
        self.strength == ELEPHANT && defender.strength == RAT
    }

    /// Animal name for display.
    pub fn name(self) -> &'static str {
        NAMES[(self.strength - 1) as usize]
    }
}

impl TryFrom<(Player, u8)> for Piece {
    type Error = InvalidStrength;

    fn try_from((owner, strength): (Player, u8)) -> Result<Self, Self::Error> {
        Piece::try_new(owner, strength).ok_or(InvalidStrength(strength))
    }
}

impl From<Piece> for (Player, u8) {
    fn from(piece: Piece) -> Self {
        (piece.owner, piece.strength)
    }
}
