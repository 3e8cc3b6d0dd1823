//! Move-selection strategies
//!
//! Contains:
//! - Greedy one-ply heuristic picker
//! - Plain fixed-depth minimax (baseline reference)
//! - Alpha-beta with iterative deepening, evaluation cache and time budget
//! - Monte Carlo Tree Search with heuristic-guided rollouts

pub mod alphabeta;
pub mod cache;
pub mod heuristic;
pub mod mcts;
pub mod minimax;

pub use alphabeta::AlphaBetaSearcher;
pub use cache::EvalCache;
pub use mcts::MctsSearcher;
pub use minimax::MinimaxSearcher;
