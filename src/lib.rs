//! Gomoku move-selection engine
//!
//! A decision engine for Gomoku (five-in-a-row) on an NxN board, default
//! 15x15. Four interchangeable strategies of increasing strength sit
//! behind one dispatcher:
//! 1. Greedy heuristic: best statically-scored cell, no lookahead
//! 2. Minimax: exhaustive fixed-depth search, the correctness baseline
//! 3. Alpha-beta: pruned search with iterative deepening, an evaluation
//!    cache and a wall-clock budget
//! 4. MCTS: UCT tree search with heuristic-guided semi-random rollouts
//!
//! # Architecture
//!
//! - [`board`]: Grid, stones and game state
//! - [`rules`]: Move application, win and draw detection
//! - [`eval`]: Pattern-based position and move scoring
//! - [`movegen`]: Candidate generation near existing stones
//! - [`search`]: The four strategies
//! - [`engine`]: Strategy dispatch and move validation
//!
//! # Quick Start
//!
//! ```
//! use gomoku_ai::{Budget, Engine, GameState, Outcome, Pos, Strategy};
//!
//! let mut state = GameState::new(15);
//! let mut engine = Engine::with_seed(42);
//!
//! // Black opens, then the engine answers for White
//! engine.apply_move(&mut state, Pos::new(7, 7)).unwrap();
//! let reply = engine
//!     .select_move(&mut state, Strategy::AlphaBeta, Budget::Depth(2))
//!     .unwrap();
//! assert_eq!(engine.apply_move(&mut state, reply).unwrap(), Outcome::Continue);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, GameState, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use engine::{Budget, Engine, EngineError, Strategy};
pub use rules::Outcome;
