//! WASM bindings for jungle-core
//!
//! Provides a JavaScript-friendly API over [`History`] so a browser shell can
//! drive the game without holding any rules of its own.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{Coord, History, Piece, Terrain};

/// WASM-friendly wrapper around History
#[wasm_bindgen]
pub struct WasmGame {
    inner: History,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a new game
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame { inner: History::new() }
    }

    /// Replay a move list in `(x,y)->(x,y)` notation. Returns null if any move fails.
    #[wasm_bindgen(js_name = fromMoves)]
    pub fn from_moves(notation: &str) -> Option<WasmGame> {
        History::replay(notation).ok().map(|inner| WasmGame { inner })
    }

    /// Play a move. Returns true if it was legal and applied.
    pub fn play(&mut self, from_x: u8, from_y: u8, to_x: u8, to_y: u8) -> bool {
        match (Coord::try_new(from_x, from_y), Coord::try_new(to_x, to_y)) {
            (Some(from), Some(to)) => self.inner.play(from, to).is_ok(),
            _ => false,
        }
    }

    /// Undo the last move. Returns false if only the initial state remains.
    pub fn undo(&mut self) -> bool {
        self.inner.undo().is_ok()
    }

    /// Start over
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Player to move (0 or 1)
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.inner.current().current_player() as u8
    }

    /// Whether the game is over
    #[wasm_bindgen(js_name = isWon)]
    pub fn is_won(&self) -> bool {
        self.inner.current().is_won()
    }

    /// Winner (0 or 1), or undefined while the game is on
    pub fn winner(&self) -> Option<u8> {
        self.inner.current().winner().map(|p| p as u8)
    }

    /// Number of moves played
    #[wasm_bindgen(js_name = turnCount)]
    pub fn turn_count(&self) -> usize {
        self.inner.turn_count()
    }

    /// Legal targets for the piece at (x, y) as a flat array [x, y, x, y, ...]
    #[wasm_bindgen(js_name = legalTargets)]
    pub fn legal_targets(&self, x: u8, y: u8) -> Vec<u8> {
        let Some(from) = Coord::try_new(x, y) else {
            return vec![];
        };
        self.inner
            .current()
            .legal_destinations(from)
            .into_iter()
            .flat_map(|c| [c.x(), c.y()])
            .collect()
    }

    /// All 63 squares as an array of { x, y, terrain, piece }
    pub fn cells(&self) -> Result<JsValue, JsValue> {
        let board = self.inner.current().board();
        let cells: Vec<WasmCell> = Coord::all()
            .map(|coord| WasmCell {
                x: coord.x(),
                y: coord.y(),
                terrain: coord.terrain(),
                piece: board.piece_at(coord),
            })
            .collect();
        serde_wasm_bindgen::to_value(&cells).map_err(JsValue::from)
    }

    /// Played moves in `(x,y)->(x,y)` notation, space separated
    #[wasm_bindgen(js_name = exportMoves)]
    pub fn export_moves(&self) -> String {
        self.inner.export()
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable square for JavaScript
#[derive(Serialize)]
struct WasmCell {
    x: u8,
    y: u8,
    terrain: Terrain,
    piece: Option<Piece>,
}
