//! Game state controller.
//!
//! The [`Game`] struct owns everything that changes during play:
//! - The current board and the side to move
//! - The move history used for undo
//! - The square currently selected by the input layer
//!
//! Input arrives one square at a time through [`Game::on_square_activated`];
//! the presentation layer reads the result back through the query methods.

use crate::history::MoveHistory;
use crate::rules::{RuleSet, StandardRules};
use referee_core::{parse_layout, Board, Color, LayoutError, MoveRecord, Piece, Square};
use thiserror::Error;
use tracing::{debug, trace};

/// A square chosen by the input layer, waiting for its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub piece: Piece,
}

/// What a single square activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// An own piece was picked up.
    Selected(Square),
    /// Nothing was selected and the square did not hold an own piece.
    Ignored,
    /// The selected piece moved.
    Moved(MoveRecord),
    /// The selected piece could not move there; the selection was dropped.
    Rejected,
}

/// Error type for programmatic moves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("the piece on {square} is {color}, but it is {turn}'s turn")]
    WrongTurn {
        square: Square,
        color: Color,
        turn: Color,
    },

    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },
}

/// A game in progress with undo support.
///
/// All mutation goes through `&mut self`, so one `Game` is one independent
/// game; nothing is shared between instances.
#[derive(Debug, Clone)]
pub struct Game<R = StandardRules> {
    rules: R,
    board: Board,
    turn: Color,
    history: MoveHistory,
    selection: Option<Selection>,
    start: Board,
    start_turn: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting setup.
    pub fn new() -> Self {
        Self::with_rules(StandardRules)
    }

    /// Creates a game from a custom board.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self::from_board_with_rules(StandardRules, board, turn)
    }

    /// Creates a game from a layout string such as
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"`.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let (board, turn) = parse_layout(layout)?;
        Ok(Self::from_board(board, turn))
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a new game using the rule set's initial board.
    pub fn with_rules(rules: R) -> Self {
        let board = rules.initial_board();
        let turn = rules.first_turn();
        Self::from_board_with_rules(rules, board, turn)
    }

    pub fn from_board_with_rules(rules: R, board: Board, turn: Color) -> Self {
        Self::from_parts(rules, board.clone(), turn, MoveHistory::new(), board, turn)
    }

    pub(crate) fn from_parts(
        rules: R,
        board: Board,
        turn: Color,
        history: MoveHistory,
        start: Board,
        start_turn: Color,
    ) -> Self {
        Game {
            rules,
            board,
            turn,
            history,
            selection: None,
            start,
            start_turn,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns an owned copy of the current board.
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the selected square, if a piece is waiting for a destination.
    pub fn selection(&self) -> Option<Square> {
        self.selection.map(|s| s.square)
    }

    pub fn selected_piece(&self) -> Option<Piece> {
        self.selection.map(|s| s.piece)
    }

    /// Returns the applied moves, oldest first.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Returns the number of moves applied and not undone.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the board the history starts from.
    pub fn start_board(&self) -> &Board {
        &self.start
    }

    pub fn start_turn(&self) -> Color {
        self.start_turn
    }

    /// Returns true if `turn` may move `from` to `to` right now.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.rules.is_legal(&self.board, self.turn, from, to)
    }

    /// Returns the squares the piece on `from` may move to.
    ///
    /// Empty if `from` is empty or holds an opponent's piece.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.rules.legal_destinations(&self.board, self.turn, from)
    }

    /// Feeds one click on `square` into the selection state machine.
    ///
    /// With nothing selected, a square holding a piece of the side to move
    /// becomes the selection and anything else is ignored. With a selection,
    /// the click is a move attempt: it is applied if legal, and the selection
    /// is cleared either way.
    pub fn on_square_activated(&mut self, square: Square) -> Activation {
        match self.selection.take() {
            None => match self.board.get(square) {
                Some(piece) if piece.color == self.turn => {
                    debug!(%square, %piece, "selected");
                    self.selection = Some(Selection { square, piece });
                    Activation::Selected(square)
                }
                _ => Activation::Ignored,
            },
            Some(selected) => match self.make_move(selected.square, square) {
                Ok(record) => Activation::Moved(record),
                Err(err) => {
                    trace!(%err, "move attempt rejected");
                    Activation::Rejected
                }
            },
        }
    }

    /// Applies a move directly, without going through selection.
    ///
    /// Any pending selection is cleared. On error nothing changes.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, GameError> {
        self.selection = None;

        let moved = self.board.get(from).ok_or(GameError::EmptySquare(from))?;
        if moved.color != self.turn {
            return Err(GameError::WrongTurn {
                square: from,
                color: moved.color,
                turn: self.turn,
            });
        }
        if !self.rules.is_legal(&self.board, self.turn, from, to) {
            return Err(GameError::IllegalMove { from, to });
        }

        let record = MoveRecord {
            from,
            to,
            moved,
            captured: self.board.get(to),
        };
        record.apply(&mut self.board);
        self.history.push(record);
        self.turn = self.turn.opposite();

        debug!(%record, turn = %self.turn, ply = self.history.len(), "applied move");
        Ok(record)
    }

    /// Takes back the most recent move.
    ///
    /// Returns the undone record, or `None` if there is nothing to undo.
    /// Clears any pending selection.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        self.selection = None;

        let record = self.history.pop()?;
        record.revert(&mut self.board);
        self.turn = self.turn.opposite();

        debug!(%record, turn = %self.turn, ply = self.history.len(), "undid move");
        Some(record)
    }

    /// Returns to the starting board, dropping all history.
    pub fn reset(&mut self) {
        self.board = self.start.clone();
        self.turn = self.start_turn;
        self.history.clear();
        self.selection = None;
        debug!("game reset");
    }

    /// Returns true if replaying the history from the starting board gives
    /// the current board and the side to move matches the number of moves.
    pub fn is_consistent(&self) -> bool {
        let expected_turn = if self.history.len() % 2 == 0 {
            self.start_turn
        } else {
            self.start_turn.opposite()
        };
        self.turn == expected_turn && self.history.replay(&self.start) == self.board
    }
}
