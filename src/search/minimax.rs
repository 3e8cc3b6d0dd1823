//! Plain fixed-depth minimax
//!
//! Exhaustive over every empty cell with no pruning, no candidate
//! filtering and no cache. Far too slow for full-size boards beyond
//! shallow depths; it exists as the correctness baseline the alpha-beta
//! searcher is validated against (both must agree on the root score).

use crate::board::{GameState, Pos, Stone};
use crate::eval::{evaluate_board, SEARCH};
use crate::rules::winner;

#[derive(Debug, Default)]
pub struct MinimaxSearcher;

impl MinimaxSearcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Best move for the side to move, searching `depth` plies.
    ///
    /// Scans every empty cell in raster order; ties keep the first
    /// maximum. Returns the move together with its minimax score,
    /// or `None` on a full board.
    pub fn best_move(&self, state: &mut GameState, depth: u8) -> Option<(Pos, i32)> {
        let me = state.to_move;
        let mut best: Option<(Pos, i32)> = None;

        for pos in state.board.empty_cells().collect::<Vec<_>>() {
            state.board.place_stone(pos, me);
            state.to_move = me.opponent();
            let score = self.search(state, me, depth.saturating_sub(1), false);
            state.board.remove_stone(pos);
            state.to_move = me;

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }

        best
    }

    /// Minimax recursion over a shared mutable board.
    ///
    /// Every trial move is undone (mark erased, side to move restored)
    /// before the next sibling is tried.
    fn search(&self, state: &mut GameState, me: Stone, depth: u8, maximizing: bool) -> i32 {
        if depth == 0 || winner(&state.board).is_some() || state.board.is_full() {
            return evaluate_board(&state.board, me, &SEARCH);
        }

        let mover = if maximizing { me } else { me.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in state.board.empty_cells().collect::<Vec<_>>() {
            state.board.place_stone(pos, mover);
            let prev = state.to_move;
            state.to_move = mover.opponent();

            let score = self.search(state, me, depth - 1, !maximizing);

            state.board.remove_stone(pos);
            state.to_move = prev;

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
