//! Per-search evaluation cache
//!
//! Scoped to one top-level alpha-beta call and cleared at its start.
//! Leaking entries across searches against different boards would return
//! wrong scores silently, so clearing is a correctness requirement, not
//! an optimization.

use std::collections::HashMap;

use crate::board::{Pos, Stone};

/// Cache of previously computed evaluation scores.
///
/// Two keyspaces: whole-position scores keyed by the board's canonical
/// serialization, and single-move scores keyed by `(row, col, player)`.
#[derive(Debug, Default)]
pub struct EvalCache {
    positions: HashMap<String, i32>,
    moves: HashMap<(usize, usize, Stone), i32>,
}

impl EvalCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all entries. Called at the start of every top-level search.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.moves.clear();
    }

    pub fn position(&self, key: &str) -> Option<i32> {
        self.positions.get(key).copied()
    }

    pub fn insert_position(&mut self, key: String, score: i32) {
        self.positions.insert(key, score);
    }

    pub fn move_score(&self, pos: Pos, player: Stone) -> Option<i32> {
        self.moves.get(&(pos.row, pos.col, player)).copied()
    }

    pub fn insert_move_score(&mut self, pos: Pos, player: Stone, score: i32) {
        self.moves.insert((pos.row, pos.col, player), score);
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.moves.is_empty()
    }
}
