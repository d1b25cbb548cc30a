//! Move legality oracle and reversible game controller.
//!
//! This crate provides:
//! - [`is_path_clear`] - obstruction checks along rows, columns, and diagonals
//! - [`RuleSet`] and [`StandardRules`] - per-piece movement rules
//! - [`MoveHistory`] - the stack of applied, invertible moves
//! - [`Game`] - selection, apply, undo, and turn alternation
//! - [`SavedGame`] - JSON save and load with history validation
//!
//! # Example
//!
//! ```
//! use referee_core::{Color, Square};
//! use referee_engine::{Activation, Game};
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! assert_eq!(game.on_square_activated(e2), Activation::Selected(e2));
//! assert!(matches!(game.on_square_activated(e4), Activation::Moved(_)));
//! assert_eq!(game.turn(), Color::Black);
//!
//! game.undo();
//! assert_eq!(game.turn(), Color::White);
//! ```

mod game;
mod history;
mod path;
pub mod rules;
mod save;

pub use game::{Activation, Game, GameError, Selection};
pub use history::MoveHistory;
pub use path::{is_aligned, is_path_clear};
pub use rules::{is_legal_move, RuleSet, StandardRules};
pub use save::{SavedGame, SaveError};
