//! Alpha-beta search with iterative deepening and evaluation cache
//!
//! The searcher mutates one shared board during recursion and restores it
//! around every trial move. Each top-level call:
//!
//! 1. clears the evaluation cache,
//! 2. answers an empty board with a randomized near-center opening,
//! 3. orders candidate moves by heuristic score,
//! 4. deepens iteratively from depth 2, promoting the best move of each
//!    completed depth to the front of the candidate list,
//! 5. short-circuits as soon as a move reaches the win score.
//!
//! Running out of time is not an error: the branch being searched returns
//! a neutral score and the best answer found so far stands.

use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, GameState, Pos, Stone};
use crate::eval::{evaluate_board, score_move, SEARCH};
use crate::movegen;
use crate::rules::winner;

use super::cache::EvalCache;

/// Score of a won position; scores at or above this short-circuit search
pub const WIN_SCORE: i32 = SEARCH.five;

/// Added per remaining ply so the search prefers faster wins, slower losses
const DEPTH_BONUS: i32 = 100;

/// Branching cap at internal nodes; the excess is pruned by move score
const MAX_BRANCH: usize = 15;

/// Hard ceiling on the requested search depth
pub const MAX_DEPTH: u8 = 4;

/// Default wall-clock budget per top-level call
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(9_000);

pub struct AlphaBetaSearcher {
    time_limit: Duration,
    max_depth: u8,
    rng: StdRng,
    cache: EvalCache,
    start: Instant,
    timed_out: bool,
}

impl AlphaBetaSearcher {
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Searcher with a fixed seed for the opening jitter, for
    /// reproducible games and tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            max_depth: MAX_DEPTH,
            rng,
            cache: EvalCache::new(),
            start: Instant::now(),
            timed_out: false,
        }
    }

    /// Override the wall-clock budget.
    pub fn set_time_limit(&mut self, limit: Duration) {
        self.time_limit = limit;
    }

    /// Best move for the side to move, with its score from the deepest
    /// completed iteration.
    ///
    /// `depth` is clamped to [`MAX_DEPTH`]. `None` only on a full board.
    pub fn best_move(&mut self, state: &mut GameState, depth: u8) -> Option<(Pos, i32)> {
        self.cache.clear();
        self.timed_out = false;
        self.start = Instant::now();
        let depth = depth.min(self.max_depth);
        let me = state.to_move;

        // Opening shortcut: break symmetry with a near-center move
        if state.board.is_board_empty() {
            let pos = self.opening_move(&state.board);
            debug!(
                "alpha-beta: empty board, opening at ({}, {})",
                pos.row, pos.col
            );
            return Some((pos, 0));
        }

        let mut candidates = movegen::candidate_moves(&state.board);
        movegen::order_by_score(&mut candidates, |p| {
            self.move_score_cached(&state.board, p, me)
        });

        let mut best: Option<(Pos, i32)> = None;

        for current_depth in 2..=depth {
            if self.timed_out {
                break;
            }

            let mut alpha = i32::MIN;
            let beta = i32::MAX;
            let mut depth_best: Option<(Pos, i32)> = None;

            for &pos in &candidates {
                state.board.place_stone(pos, me);
                let prev = state.to_move;
                state.to_move = me.opponent();

                let score = self.alpha_beta(state, me, current_depth - 1, alpha, beta, false);

                state.board.remove_stone(pos);
                state.to_move = prev;

                if depth_best.map_or(true, |(_, s)| score > s) {
                    depth_best = Some((pos, score));
                    alpha = alpha.max(score);
                }

                if self.timed_out {
                    debug!("alpha-beta: timeout at depth {}", current_depth);
                    break;
                }

                // Forced win found; no point searching deeper
                if score >= WIN_SCORE {
                    debug!("alpha-beta: winning move at depth {}", current_depth);
                    return Some((pos, score));
                }
            }

            if let (Some((pos, _)), false) = (depth_best, self.timed_out) {
                best = depth_best;
                // Move ordering from this depth improves pruning at the next
                if let Some(i) = candidates.iter().position(|&m| m == pos) {
                    if i > 0 {
                        let mv = candidates.remove(i);
                        candidates.insert(0, mv);
                    }
                }
            }
        }

        debug!(
            "alpha-beta: searched {} ms, best {:?}",
            self.start.elapsed().as_millis(),
            best
        );

        // Last-resort guards; unreachable in a non-terminal position
        best.or_else(|| candidates.first().map(|&p| (p, 0)))
            .or_else(|| state.board.empty_cells().next().map(|p| (p, 0)))
    }

    /// Alpha-beta recursion over the shared mutable board.
    fn alpha_beta(
        &mut self,
        state: &mut GameState,
        me: Stone,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        // Aborts this branch only; the caller keeps its best so far
        if self.start.elapsed() > self.time_limit {
            self.timed_out = true;
            return 0;
        }

        // Nodes are reached out of move order, so the terminal check
        // scans the whole board rather than a last move
        if let Some(w) = winner(&state.board) {
            return if w == me {
                WIN_SCORE + depth as i32 * DEPTH_BONUS
            } else {
                -WIN_SCORE - depth as i32 * DEPTH_BONUS
            };
        }

        if depth == 0 || state.board.is_full() {
            return self.evaluate_cached(&state.board, me);
        }

        let mover = if maximizing { me } else { me.opponent() };

        let mut moves: Vec<Pos> = state.board.empty_cells().collect();
        if moves.len() > MAX_BRANCH {
            movegen::order_by_score(&mut moves, |p| {
                self.move_score_cached(&state.board, p, mover)
            });
            moves.truncate(MAX_BRANCH);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in moves {
            state.board.place_stone(pos, mover);
            let prev = state.to_move;
            state.to_move = mover.opponent();

            let score = self.alpha_beta(state, me, depth - 1, alpha, beta, !maximizing);

            state.board.remove_stone(pos);
            state.to_move = prev;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha || self.timed_out {
                break;
            }
        }

        best
    }

    /// Whole-position evaluation, cached by board serialization.
    fn evaluate_cached(&mut self, board: &Board, me: Stone) -> i32 {
        let key = board.key();
        if let Some(score) = self.cache.position(&key) {
            return score;
        }
        let score = evaluate_board(board, me, &SEARCH);
        self.cache.insert_position(key, score);
        score
    }

    /// Single-move evaluation, cached by `(row, col, player)`.
    fn move_score_cached(&mut self, board: &Board, pos: Pos, player: Stone) -> i32 {
        if let Some(score) = self.cache.move_score(pos, player) {
            return score;
        }
        let score = score_move(board, pos, player, &SEARCH);
        self.cache.insert_move_score(pos, player, score);
        score
    }

    /// Randomized opening at most one cell away from the center.
    fn opening_move(&mut self, board: &Board) -> Pos {
        let center = board.center();
        let offset: i32 = self.rng.gen_range(-1..=1);
        let row = center.row as i32 + offset;
        let col = center.col as i32
            + if offset != 0 {
                0
            } else if self.rng.gen_bool(0.5) {
                1
            } else {
                -1
            };
        if board.in_bounds(row, col) {
            Pos::new(row as usize, col as usize)
        } else {
            center
        }
    }
}

impl Default for AlphaBetaSearcher {
    fn default() -> Self {
        Self::new()
    }
}
