//! WebAssembly bindings for the move referee.
//!
//! This crate exposes the game controller to a JavaScript presentation layer.
//! The page forwards clicks and the undo button, then polls the board, turn,
//! and selection to redraw.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Game } from 'referee-wasm';
//!
//! await init();
//!
//! const game = new Game();
//! game.onSquareActivated(6, 4); // "selected"
//! game.onSquareActivated(4, 4); // "moved"
//! console.log(game.turn());     // "black"
//!
//! const board = game.boardSnapshot(); // 8x8 of {kind, color} or null
//! game.undo();
//! ```

use referee_core::{format_layout, Color, Square};
use referee_engine::{Activation, SavedGame};
use wasm_bindgen::prelude::*;

/// A game that can be driven from JavaScript.
#[wasm_bindgen]
pub struct Game {
    inner: referee_engine::Game,
}

fn square(row: u8, col: u8) -> Result<Square, JsError> {
    Square::try_new(row, col)
        .ok_or_else(|| JsError::new(&format!("Square off the board: ({}, {})", row, col)))
}

fn color_name(color: Color) -> String {
    match color {
        Color::White => "white".to_string(),
        Color::Black => "black".to_string(),
    }
}

#[wasm_bindgen]
impl Game {
    /// Creates a new game with the standard starting setup.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Game {
            inner: referee_engine::Game::new(),
        }
    }

    /// Creates a game from a layout string.
    ///
    /// Returns an error if the layout is invalid.
    #[wasm_bindgen(js_name = fromLayout)]
    pub fn from_layout(layout: &str) -> Result<Game, JsError> {
        let inner =
            referee_engine::Game::from_layout(layout).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Game { inner })
    }

    /// Restores a game saved with [`Game::to_json`].
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<Game, JsError> {
        let saved = SavedGame::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        let inner =
            referee_engine::Game::from_saved(saved).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Game { inner })
    }

    /// Saves the board, turn, and history as JSON.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsError> {
        self.inner
            .to_saved()
            .to_json()
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the current board as a layout string.
    #[wasm_bindgen(js_name = toLayout)]
    pub fn to_layout(&self) -> String {
        format_layout(self.inner.board(), self.inner.turn())
    }

    /// Feeds a click on `(row, col)` into the game.
    ///
    /// Returns one of: "selected", "ignored", "moved", or "rejected".
    #[wasm_bindgen(js_name = onSquareActivated)]
    pub fn on_square_activated(&mut self, row: u8, col: u8) -> Result<String, JsError> {
        let outcome = match self.inner.on_square_activated(square(row, col)?) {
            Activation::Selected(_) => "selected",
            Activation::Ignored => "ignored",
            Activation::Moved(_) => "moved",
            Activation::Rejected => "rejected",
        };
        Ok(outcome.to_string())
    }

    /// Takes back the last move. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.inner.undo().is_some()
    }

    /// Returns the board as an 8x8 array, row 0 first, of `{kind, color}`
    /// objects or null.
    #[wasm_bindgen(js_name = boardSnapshot)]
    pub fn board_snapshot(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.inner.board().rows())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the piece at `(row, col)` as a letter, uppercase for white.
    ///
    /// Returns null if the square is empty or off the board.
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, row: u8, col: u8) -> Option<String> {
        let sq = Square::try_new(row, col)?;
        let piece = self.inner.board().get(sq)?;
        Some(piece.to_char().to_string())
    }

    /// Returns the side to move ("white" or "black").
    pub fn turn(&self) -> String {
        color_name(self.inner.turn())
    }

    /// Returns the selected square as `[row, col]`, or undefined.
    pub fn selection(&self) -> Option<Vec<u8>> {
        self.inner.selection().map(|sq| vec![sq.row(), sq.col()])
    }

    /// Returns the squares the piece on `(row, col)` may move to, as
    /// `[row, col]` pairs.
    #[wasm_bindgen(js_name = legalDestinations)]
    pub fn legal_destinations(&self, row: u8, col: u8) -> Result<JsValue, JsError> {
        let targets = self.inner.legal_destinations(square(row, col)?);
        serde_wasm_bindgen::to_value(&targets).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the number of moves that can be undone.
    #[wasm_bindgen(js_name = plyCount)]
    pub fn ply_count(&self) -> usize {
        self.inner.ply_count()
    }

    /// Resets the game to its starting board.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialization function called when WASM module loads.
#[wasm_bindgen(start)]
pub fn init() {}
