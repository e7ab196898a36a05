//! Stack of snapshots backing undo, reset, and replay.

use tracing::{debug, info, trace};

use crate::notation::format_moves;
use crate::{Coord, GameState, IllegalMove, Move, NothingToUndo, ReplayError};

/// Every snapshot of the current game, oldest first.
///
/// The initial state can never be popped, so there is always a current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    initial: GameState,
    /// `later[i]` is the state after `moves[i]`.
    later: Vec<GameState>,
    moves: Vec<Move>,
}

impl History {
    /// A fresh game from the starting position.
    pub fn new() -> History {
        History::from_state(GameState::new())
    }

    /// A game starting from an arbitrary snapshot.
    pub fn from_state(initial: GameState) -> History {
        History {
            initial,
            later: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// The latest snapshot.
    #[inline]
    pub fn current(&self) -> &GameState {
        self.later.last().unwrap_or(&self.initial)
    }

    /// Play a move from the current state.
    ///
    /// On failure the history is unchanged.
    pub fn play(&mut self, from: Coord, to: Coord) -> Result<(), IllegalMove> {
        let next = match self.current().apply_move(from, to) {
            Ok(next) => next,
            Err(err) => {
                debug!(%from, %to, %err, "move rejected");
                return Err(err);
            }
        };

        let mov = Move::new(from, to);
        if let Some(winner) = next.winner() {
            info!(%mov, ?winner, turn = self.turn_count() + 1, "game won");
        } else {
            trace!(%mov, turn = self.turn_count() + 1, "move played");
        }
        self.later.push(next);
        self.moves.push(mov);
        Ok(())
    }

    /// Play a [`Move`] value.
    #[inline]
    pub fn play_move(&mut self, mov: Move) -> Result<(), IllegalMove> {
        self.play(mov.from, mov.to)
    }

    /// Return to the previous snapshot.
    pub fn undo(&mut self) -> Result<(), NothingToUndo> {
        match (self.later.pop(), self.moves.pop()) {
            (Some(_), Some(mov)) => {
                trace!(%mov, "move undone");
                Ok(())
            }
            _ => {
                debug!("nothing to undo");
                Err(NothingToUndo)
            }
        }
    }

    /// Start over from a freshly built starting position.
    pub fn reset(&mut self) {
        debug!(turns = self.turn_count(), "history reset");
        *self = History::new();
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.later.is_empty()
    }

    /// Number of moves played since the initial state.
    #[inline]
    pub fn turn_count(&self) -> usize {
        self.moves.len()
    }

    /// Pieces left per player in the current state.
    #[inline]
    pub fn animal_counts(&self) -> [usize; 2] {
        self.current().piece_counts()
    }

    /// Moves leading from the initial state to the current one.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// All snapshots, oldest first. Never empty.
    pub fn states(&self) -> impl Iterator<Item = &GameState> + '_ {
        std::iter::once(&self.initial).chain(self.later.iter())
    }

    /// Number of snapshots, including the initial one.
    #[inline]
    pub fn len(&self) -> usize {
        self.later.len() + 1
    }

    /// Always false: the initial state is never removed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The played moves in notation, space separated.
    pub fn export(&self) -> String {
        format_moves(&self.moves)
    }

    /// Build a new game by playing a space-separated move list from the start.
    pub fn replay(notation: &str) -> Result<History, ReplayError> {
        let mut history = History::new();
        for (i, token) in notation.split_whitespace().enumerate() {
            let index = i + 1;
            let mov: Move = token
                .parse()
                .map_err(|source| ReplayError::Notation { index, source })?;
            history
                .play_move(mov)
                .map_err(|source| ReplayError::Illegal { index, source })?;
        }
        Ok(history)
    }
}

impl Default for History {
    fn default() -> Self {
        History::new()
    }
}
