//! Greedy one-ply strategy: pick the best-scoring empty cell
//!
//! No lookahead at all; this is the weakest difficulty level and a useful
//! reference point for the search strategies.

use crate::board::{GameState, Pos};
use crate::eval::{score_move, SEARCH};

/// Best move by static evaluation over every empty cell.
///
/// Strict improvement keeps the first maximum in raster order, so the
/// result is deterministic. `None` only on a full board.
pub fn best_move(state: &GameState) -> Option<Pos> {
    let mut best: Option<(Pos, i32)> = None;
    for pos in state.board.empty_cells() {
        let score = score_move(&state.board, pos, state.to_move, &SEARCH);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos)
}
