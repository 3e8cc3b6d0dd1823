//! Position evaluation and heuristics

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_board, pattern_score, score_move};
pub use patterns::{ScoreTable, ROLLOUT, SEARCH};
