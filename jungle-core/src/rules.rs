//! Move legality.
//!
//! A move is tested against seven clauses, in this order:
//!
//! 1. Orthogonal single step.
//! 2. Otherwise, a tiger or lion may leap straight across water, provided every
//!    square jumped is water and no rat sits on the path.
//! 3. Only the rat may end its move in water.
//! 4. A stronger defender cannot be captured, unless a rat attacks an elephant
//!    or the defender stands on a trap. The elephant cannot capture the rat,
//!    except on a trap.
//! 5. Nobody enters their own den.
//! 6. Nobody captures their own piece.
//! 7. No capture across the water line: origin and destination must both be
//!    water or both be land.
//!
//! The rat/elephant inversion (4) and the trap exception (4) are separate
//! checks and never stand in for each other.

use thiserror::Error;

use crate::{Board, Coord, Piece, Terrain};

/// The first clause a move fails.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Error)]
pub enum Violation {
    #[error("there is no piece to move")]
    NoPiece,
    #[error("the destination is out of reach")]
    OutOfReach,
    #[error("only the rat may enter water")]
    NoSwimming,
    #[error("the defender is stronger")]
    Outranked,
    #[error("a player may not enter their own den")]
    OwnDen,
    #[error("a piece may not capture its own side")]
    FriendlyCapture,
    #[error("a capture may not cross the water line")]
    WaterLineCapture,
}

/// Decide whether the piece on `from` may move to `to`.
///
/// Pure predicate over the board; turn order and game-over are the caller's
/// concern (see [`crate::GameState::apply_move`]).
#[inline]
pub fn is_legal(board: &Board, from: Coord, to: Coord) -> bool {
    check(board, from, to).is_ok()
}

/// Like [`is_legal`], but reports which clause rejected the move.
pub fn check(board: &Board, from: Coord, to: Coord) -> Result<(), Violation> {
    let mover = board.piece_at(from).ok_or(Violation::NoPiece)?;
    let defender = board.piece_at(to);
    let from_terrain = from.terrain();
    let to_terrain = to.terrain();

    let reachable = from.manhattan(to) == 1 || (mover.can_leap() && is_clear_leap(board, from, to));
    if !reachable {
        return Err(Violation::OutOfReach);
    }
    if to_terrain.is_water() && !mover.is_swimmer() {
        return Err(Violation::NoSwimming);
    }
    if let Some(defender) = defender {
        if is_outranked(mover, defender, to_terrain) {
            return Err(Violation::Outranked);
        }
    }
    if to == mover.owner().den() {
        return Err(Violation::OwnDen);
    }
    if let Some(defender) = defender {
        if defender.owner() == mover.owner() {
            return Err(Violation::FriendlyCapture);
        }
        if from_terrain.is_water() != to_terrain.is_water() {
            return Err(Violation::WaterLineCapture);
        }
    }
    Ok(())
}

/// Squares strictly between `from` and `to` on a shared row or column.
///
/// `None` when the two squares share neither.
pub fn leap_path(from: Coord, to: Coord) -> Option<impl Iterator<Item = Coord>> {
    let horizontal = if from.y() == to.y() {
        true
    } else if from.x() == to.x() {
        false
    } else {
        return None;
    };

    let (a, b) = if horizontal { (from.x(), to.x()) } else { (from.y(), to.y()) };
    let (lo, hi) = (a.min(b), a.max(b));
    Some((lo + 1..hi).map(move |i| {
        if horizontal {
            Coord::new(i, from.y())
        } else {
            Coord::new(from.x(), i)
        }
    }))
}

/// Every jumped square is water and no rat swims there.
fn is_clear_leap(board: &Board, from: Coord, to: Coord) -> bool {
    match leap_path(from, to) {
        Some(mut path) => path.all(|c| {
            c.terrain().is_water() && !board.piece_at(c).is_some_and(Piece::is_swimmer)
        }),
        None => false,
    }
}

/// The defender's strength protects it from this attacker.
fn is_outranked(attacker: Piece, defender: Piece, square: Terrain) -> bool {
    if square.is_trap() {
        return false;
    }
    if attacker.is_elephant_against_rat(defender) {
        return true;
    }
    if attacker.is_rat_against_elephant(defender) {
        return false;
    }
    defender.is_stronger_than(attacker)
}
