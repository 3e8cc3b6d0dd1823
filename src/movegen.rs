//! Candidate move generation
//!
//! Search on a full 15x15 board is intractable beyond shallow depths, so
//! candidates are restricted to empty cells near existing stones. Ordering
//! by heuristic score is left to the caller via a scoring closure, since
//! the alpha-beta searcher scores through its evaluation cache while MCTS
//! scores directly.

use crate::board::{Board, Pos};

/// Chebyshev radius around existing stones considered for new moves
pub const NEIGHBOR_RADIUS: i32 = 3;

/// Collect candidate moves for the current position, unordered.
///
/// - Empty board: the 3x3 block around the center (clipped to bounds).
/// - Otherwise: every empty cell within [`NEIGHBOR_RADIUS`] of any stone,
///   deduplicated, in raster order.
/// - Fallback: all empty cells, should the neighborhood come up empty.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    let size = board.size();

    if board.is_board_empty() {
        let center = board.center();
        let mut moves = Vec::with_capacity(9);
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                let r = center.row as i32 + dr;
                let c = center.col as i32 + dc;
                if board.in_bounds(r, c) {
                    moves.push(Pos::new(r as usize, c as usize));
                }
            }
        }
        return moves;
    }

    let mut seen = vec![false; size * size];
    let mut moves = Vec::new();
    for (stone_pos, _) in board.occupied_cells() {
        for dr in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            for dc in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                let r = stone_pos.row as i32 + dr;
                let c = stone_pos.col as i32 + dc;
                if !board.in_bounds(r, c) {
                    continue;
                }
                let pos = Pos::new(r as usize, c as usize);
                let idx = pos.row * size + pos.col;
                if !seen[idx] && board.is_empty_at(pos) {
                    seen[idx] = true;
                    moves.push(pos);
                }
            }
        }
    }

    if moves.is_empty() {
        moves.extend(board.empty_cells());
    }

    // Raster order before any scoring, for deterministic tie-breaking
    moves.sort_unstable();
    moves
}

/// Candidate moves ordered by descending score.
///
/// Ties are broken by ascending row, then ascending column, so the
/// ordering is fully deterministic for a fixed board and scorer.
pub fn ordered_moves<F>(board: &Board, mut score: F) -> Vec<Pos>
where
    F: FnMut(Pos) -> i32,
{
    let mut scored: Vec<(Pos, i32)> = candidate_moves(board)
        .into_iter()
        .map(|pos| (pos, score(pos)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.into_iter().map(|(pos, _)| pos).collect()
}

/// Order an arbitrary move list by descending score with the same
/// deterministic tie-breaking as [`ordered_moves`].
pub fn order_by_score<F>(moves: &mut Vec<Pos>, mut score: F)
where
    F: FnMut(Pos) -> i32,
{
    let mut scored: Vec<(Pos, i32)> = moves.drain(..).map(|pos| (pos, score(pos))).collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    moves.extend(scored.into_iter().map(|(pos, _)| pos));
}
