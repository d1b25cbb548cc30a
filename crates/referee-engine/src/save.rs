//! Saving and restoring games as JSON.
//!
//! A saved game is the board, the side to move, and the move history. The
//! starting position is not stored: loading walks the history backward from
//! the saved board, which both validates it and recovers where it began.

use crate::game::Game;
use crate::history::MoveHistory;
use crate::rules::RuleSet;
use referee_core::{Board, Color};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when loading a saved game.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("malformed saved game: {0}")]
    Json(#[from] serde_json::Error),

    #[error("history does not match the board at ply {ply}: {reason}")]
    InconsistentHistory { ply: usize, reason: String },
}

/// Serializable snapshot of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub board: Board,
    pub turn: Color,
    pub history: MoveHistory,
}

impl SavedGame {
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<R: RuleSet> Game<R> {
    /// Captures the board, turn, and history.
    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            board: self.board_snapshot(),
            turn: self.turn(),
            history: self.history().clone(),
        }
    }

    /// Restores a saved game using the default instance of `R`.
    pub fn from_saved(saved: SavedGame) -> Result<Self, SaveError>
    where
        R: Default,
    {
        Self::from_saved_with_rules(R::default(), saved)
    }

    /// Restores a saved game, checking that its history is sound.
    ///
    /// Every record is undone from the newest to the oldest. Each must find
    /// its piece on `to`, an empty `from`, and a mover of the right color.
    /// The rewound board then becomes the starting board, and the history is
    /// replayed forward to check every move against `rules`.
    pub fn from_saved_with_rules(rules: R, saved: SavedGame) -> Result<Self, SaveError> {
        let SavedGame {
            board,
            turn,
            history,
        } = saved;

        let mut start = board.clone();
        let mut start_turn = turn;
        for (idx, record) in history.iter().enumerate().rev() {
            let ply = idx + 1;
            start_turn = start_turn.opposite();
            if record.moved.color != start_turn {
                return Err(inconsistent(ply, format!("{} moved out of turn", record)));
            }
            if start.get(record.to) != Some(record.moved) {
                return Err(inconsistent(
                    ply,
                    format!("{} is not on {}", record.moved, record.to),
                ));
            }
            if !start.is_empty(record.from) {
                return Err(inconsistent(ply, format!("{} is not empty", record.from)));
            }
            record.revert(&mut start);
        }

        let mut replay = start.clone();
        let mut replay_turn = start_turn;
        for (idx, record) in history.iter().enumerate() {
            if !rules.is_legal(&replay, replay_turn, record.from, record.to) {
                return Err(inconsistent(idx + 1, format!("{} is illegal", record)));
            }
            record.apply(&mut replay);
            replay_turn = replay_turn.opposite();
        }

        Ok(Game::from_parts(
            rules, board, turn, history, start, start_turn,
        ))
    }
}

fn inconsistent(ply: usize, reason: String) -> SaveError {
    warn!(ply, %reason, "rejecting saved game");
    SaveError::InconsistentHistory { ply, reason }
}
