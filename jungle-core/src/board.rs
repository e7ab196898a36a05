//! Piece placement.
//!
//! A board is a fixed array of 63 optional pieces, so each square holds at
//! most one piece and each piece sits on exactly one square. The array is
//! `Copy` (126 bytes): every move produces a fresh board and earlier boards
//! are never touched.

use crate::{Coord, Piece, Player, CELLS, WIDTH};

/// Starting position: `(x, y, strength, owner)`.
const INITIAL_LAYOUT: [(u8, u8, u8, Player); 16] = [
    (0, 0, 7, Player::One),
    (6, 0, 6, Player::One),
    (1, 1, 3, Player::One),
    (5, 1, 2, Player::One),
    (0, 2, 1, Player::One),
    (2, 2, 5, Player::One),
    (4, 2, 4, Player::One),
    (6, 2, 8, Player::One),
    (6, 8, 7, Player::Two),
    (0, 8, 6, Player::Two),
    (5, 7, 3, Player::Two),
    (1, 7, 2, Player::Two),
    (6, 6, 1, Player::Two),
    (4, 6, 5, Player::Two),
    (2, 6, 4, Player::Two),
    (0, 6, 8, Player::Two),
];

/// Mapping from square to optional piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

impl Board {
    /// Create a board with no pieces.
    #[inline]
    pub const fn empty() -> Board {
        Board { cells: [None; CELLS] }
    }

    /// Create the starting position, eight animals per player.
    pub fn initial() -> Board {
        let mut board = Board::empty();
        for (x, y, strength, owner) in INITIAL_LAYOUT {
            board.set(Coord::new(x, y), Some(Piece::new(owner, strength)));
        }
        board
    }

    /// Piece on a square, if any.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.cells[coord.index()]
    }

    /// Check if a square is empty.
    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.cells[coord.index()].is_none()
    }

    /// Put a piece on (or clear) a square, returning what was there.
    ///
    /// Does NOT validate; meant for building positions.
    #[inline]
    pub fn set(&mut self, coord: Coord, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[coord.index()], piece)
    }

    /// Builder form of [`Board::set`].
    #[inline]
    pub fn with_piece(mut self, coord: Coord, piece: Piece) -> Board {
        self.set(coord, Some(piece));
        self
    }

    /// Relocate the piece on `from` to `to`, overwriting whatever was there.
    ///
    /// Returns a new board; `self` is unchanged. Legality is not checked
    /// here, see [`crate::rules::is_legal`].
    #[inline]
    pub fn with_move(&self, from: Coord, to: Coord) -> Board {
        let mut next = *self;
        let mover = next.set(from, None);
        next.set(to, mover);
        next
    }

    /// Number of pieces a player has on the board.
    pub fn count_pieces(&self, owner: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|piece| piece.owner() == owner)
            .count()
    }

    /// Iterate over occupied squares, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| Some((Coord::from_index(idx)?, (*cell)?)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.chunks(WIDTH as usize) {
            write!(f, "   ")?;
            for cell in row {
                match cell {
                    Some(p) => write!(f, " {}{}", ['a', 'b'][p.owner().index()], p.strength())?,
                    None => write!(f, " ..")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        for coord in Coord::all() {
            assert!(board.is_empty(coord));
        }
        assert_eq!(board.count_pieces(Player::One), 0);
        assert_eq!(board.count_pieces(Player::Two), 0);
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();
        assert_eq!(board.count_pieces(Player::One), 8);
        assert_eq!(board.count_pieces(Player::Two), 8);

        assert_eq!(board.piece_at(Coord::new(0, 2)), Some(Piece::new(Player::One, 1)));
        assert_eq!(board.piece_at(Coord::new(6, 2)), Some(Piece::new(Player::One, 8)));
        assert_eq!(board.piece_at(Coord::new(6, 6)), Some(Piece::new(Player::Two, 1)));
        assert_eq!(board.piece_at(Coord::new(0, 6)), Some(Piece::new(Player::Two, 8)));
        assert!(board.is_empty(Coord::new(3, 0)));
        assert!(board.is_empty(Coord::new(3, 4)));
    }

    #[test]
    fn test_initial_each_strength_once_per_player() {
        let board = Board::initial();
        for player in Player::all() {
            let mut strengths: Vec<u8> = board
                .pieces()
                .filter(|(_, p)| p.owner() == player)
                .map(|(_, p)| p.strength())
                .collect();
            strengths.sort_unstable();
            assert_eq!(strengths, (1..=8).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn test_initial_is_point_symmetric() {
        let board = Board::initial();
        for (coord, piece) in board.pieces() {
            let mirror = Coord::new(6 - coord.x(), 8 - coord.y());
            let other = board.piece_at(mirror).unwrap();
            assert_eq!(other.strength(), piece.strength());
            assert_eq!(other.owner(), piece.owner().opponent());
        }
    }

    #[test]
    fn test_with_move_relocates() {
        let board = Board::initial();
        let from = Coord::new(0, 2);
        let to = Coord::new(0, 3);
        let next = board.with_move(from, to);

        assert!(next.is_empty(from));
        assert_eq!(next.piece_at(to), board.piece_at(from));
        // Original untouched
        assert_eq!(board.piece_at(from), Some(Piece::new(Player::One, 1)));
        assert!(board.is_empty(to));
    }

    #[test]
    fn test_with_move_overwrites_target() {
        let a = Coord::new(2, 2);
        let b = Coord::new(2, 3);
        let board = Board::empty()
            .with_piece(a, Piece::new(Player::One, 5))
            .with_piece(b, Piece::new(Player::Two, 2));
        let next = board.with_move(a, b);

        assert_eq!(next.piece_at(b), Some(Piece::new(Player::One, 5)));
        assert_eq!(next.count_pieces(Player::Two), 0);
        assert_eq!(next.count_pieces(Player::One), 1);
    }

    #[test]
    fn test_set_returns_previous() {
        let mut board = Board::empty();
        let c = Coord::new(4, 4);
        assert_eq!(board.set(c, Some(Piece::new(Player::One, 1))), None);
        assert_eq!(board.set(c, None), Some(Piece::new(Player::One, 1)));
        assert!(board.is_empty(c));
    }

    #[test]
    fn test_pieces_iterates_row_major() {
        let board = Board::initial();
        let coords: Vec<Coord> = board.pieces().map(|(c, _)| c).collect();
        assert_eq!(coords.len(), 16);
        assert!(coords.windows(2).all(|w| w[0].index() < w[1].index()));
    }
}
