//! The stack of applied moves.

use referee_core::{Board, MoveRecord};
use serde::{Deserialize, Serialize};

/// Ordered log of applied moves, newest last.
///
/// Replaying the log from the starting board reconstructs the current board,
/// and popping an entry hands back exactly the delta needed to step back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    /// The most recently applied move.
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterates from the first move to the latest.
    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.records.iter()
    }

    /// Applies every record in order to a copy of `start`.
    pub fn replay(&self, start: &Board) -> Board {
        let mut board = start.clone();
        for record in &self.records {
            record.apply(&mut board);
        }
        board
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a MoveRecord;
    type IntoIter = std::slice::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
