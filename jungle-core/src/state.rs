//! Immutable game snapshots.

use std::collections::BTreeSet;

use crate::{rules, Board, Coord, IllegalMove, Move, Player};

/// One snapshot: board, player to move, and whether the game is over.
///
/// Snapshots are never mutated; [`GameState::apply_move`] returns a new one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    board: Board,
    current_player: Player,
    won: bool,
}

impl GameState {
    /// The starting position with Player One to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::initial(),
            current_player: Player::One,
            won: false,
        }
    }

    /// An in-progress state over an arbitrary board.
    ///
    /// Meant for setting up positions; `won` starts false whatever the board.
    pub fn from_board(board: Board, current_player: Player) -> GameState {
        GameState {
            board,
            current_player,
            won: false,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// The player who made the winning move, if the game is over.
    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.won.then(|| self.current_player.opponent())
    }

    /// Pieces on the board per player, indexed by [`Player::index`].
    pub fn piece_counts(&self) -> [usize; 2] {
        [
            self.board.count_pieces(Player::One),
            self.board.count_pieces(Player::Two),
        ]
    }

    /// Apply a move for the current player, producing the next snapshot.
    ///
    /// The game is won when the mover lands on a den (only the opponent's
    /// is reachable) or when either side has no pieces left.
    pub fn apply_move(&self, from: Coord, to: Coord) -> Result<GameState, IllegalMove> {
        if self.won {
            return Err(IllegalMove::GameOver);
        }
        let mover = self.board.piece_at(from).ok_or(IllegalMove::EmptySquare(from))?;
        if mover.owner() != self.current_player {
            return Err(IllegalMove::NotYourPiece(from));
        }
        rules::check(&self.board, from, to).map_err(|reason| IllegalMove::Forbidden {
            mov: Move::new(from, to),
            reason,
        })?;

        let board = self.board.with_move(from, to);
        let entered_den = to == self.current_player.opponent().den();
        let eliminated = Player::all().any(|p| board.count_pieces(p) == 0);

        Ok(GameState {
            board,
            current_player: self.current_player.opponent(),
            won: entered_den || eliminated,
        })
    }

    /// Every square the piece on `from` may legally move to.
    ///
    /// Pure board query: ignores whose turn it is and whether the game is won.
    pub fn legal_destinations(&self, from: Coord) -> BTreeSet<Coord> {
        Coord::all()
            .filter(|&to| rules::is_legal(&self.board, from, to))
            .collect()
    }

    /// Every legal move for the current player; empty once the game is won.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.won {
            return Vec::new();
        }
        self.board
            .pieces()
            .filter(|(_, piece)| piece.owner() == self.current_player)
            .flat_map(|(from, _)| {
                self.legal_destinations(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
