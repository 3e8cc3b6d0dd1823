//! Strategy dispatch and the move-request boundary
//!
//! The engine is the only surface a caller (console loop, tournament
//! runner) touches: `select_move` asks one of the four strategies for a
//! move, `apply_move` validates and applies it. Move validation happens
//! here, at the boundary; the searchers themselves only ever enumerate
//! empty cells.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::board::{GameState, Pos};
use crate::rules::{self, Outcome};
use crate::search::{heuristic, AlphaBetaSearcher, MctsSearcher, MinimaxSearcher};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("move ({row}, {col}) is out of bounds for a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    /// Never defaulted silently: a downgraded difficulty would corrupt
    /// tournament comparisons.
    #[error("unknown difficulty level {0}, expected 1 to 4")]
    UnknownLevel(u8),

    /// Same fail-fast stance for the search allowance: a depth handed
    /// to MCTS or a time handed to a tree searcher is a caller bug.
    #[error("{strategy} takes a {expected} budget")]
    BudgetMismatch {
        strategy: Strategy,
        expected: &'static str,
    },

    #[error("the game is already finished")]
    GameFinished,

    #[error("no legal move: the board is full")]
    NoLegalMove,
}

/// The four move-selection strategies, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Heuristic,
    Minimax,
    AlphaBeta,
    Mcts,
}

impl Strategy {
    /// The budget each strategy plays with when the caller has no
    /// opinion: shallow depths for the tree searchers, a wall-clock
    /// allowance for MCTS.
    #[must_use]
    pub fn default_budget(self) -> Budget {
        match self {
            Strategy::Heuristic => Budget::Depth(1),
            Strategy::Minimax => Budget::Depth(1),
            Strategy::AlphaBeta => Budget::Depth(2),
            Strategy::Mcts => Budget::Time(crate::search::mcts::DEFAULT_TIME_LIMIT),
        }
    }
}

impl TryFrom<u8> for Strategy {
    type Error = EngineError;

    /// Difficulty levels 1 to 4 map to the strategies in order of
    /// strength.
    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Strategy::Heuristic),
            2 => Ok(Strategy::Minimax),
            3 => Ok(Strategy::AlphaBeta),
            4 => Ok(Strategy::Mcts),
            other => Err(EngineError::UnknownLevel(other)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Heuristic => "heuristic",
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::Mcts => "mcts",
        };
        f.write_str(name)
    }
}

/// Search allowance: a ply count for the tree strategies, a time
/// allowance for MCTS. A mismatched variant is rejected, never
/// silently coerced to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Depth(u8),
    Time(Duration),
}

impl Budget {
    fn depth(self, strategy: Strategy) -> Result<u8, EngineError> {
        match self {
            Budget::Depth(depth) => Ok(depth),
            Budget::Time(_) => Err(EngineError::BudgetMismatch {
                strategy,
                expected: "depth",
            }),
        }
    }

    fn time(self, strategy: Strategy) -> Result<Duration, EngineError> {
        match self {
            Budget::Time(time) => Ok(time),
            Budget::Depth(_) => Err(EngineError::BudgetMismatch {
                strategy,
                expected: "time",
            }),
        }
    }
}

/// Owns the stateful searchers (RNG, evaluation cache) across moves of
/// a game. Not designed for concurrent calls against the same state.
pub struct Engine {
    alphabeta: AlphaBetaSearcher,
    mcts: MctsSearcher,
    minimax: MinimaxSearcher,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            alphabeta: AlphaBetaSearcher::new(),
            mcts: MctsSearcher::new(),
            minimax: MinimaxSearcher::new(),
        }
    }

    /// Engine whose randomized components (opening moves, rollouts)
    /// are seeded, for reproducible games.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            alphabeta: AlphaBetaSearcher::with_seed(seed),
            mcts: MctsSearcher::with_seed(seed ^ 0x9e37_79b9_7f4a_7c15),
            minimax: MinimaxSearcher::new(),
        }
    }

    /// Ask `strategy` for a move within `budget`.
    ///
    /// Tree strategies take [`Budget::Depth`], MCTS takes
    /// [`Budget::Time`]; a mismatched variant is an error. The state is
    /// restored exactly as it was, whichever searcher ran.
    pub fn select_move(
        &mut self,
        state: &mut GameState,
        strategy: Strategy,
        budget: Budget,
    ) -> Result<Pos, EngineError> {
        if state.finished {
            return Err(EngineError::GameFinished);
        }

        let chosen = match strategy {
            // The greedy picker has nothing to budget; any variant is fine
            Strategy::Heuristic => heuristic::best_move(state),
            Strategy::Minimax => {
                let depth = budget.depth(strategy)?;
                self.minimax.best_move(state, depth).map(|(pos, _)| pos)
            }
            Strategy::AlphaBeta => {
                let depth = budget.depth(strategy)?;
                self.alphabeta.best_move(state, depth).map(|(pos, _)| pos)
            }
            Strategy::Mcts => {
                let time = budget.time(strategy)?;
                self.mcts.best_move(state, time)
            }
        };

        chosen.ok_or(EngineError::NoLegalMove)
    }

    /// Validate and apply a move for the side to move.
    ///
    /// The single rules entry point for human and engine moves alike.
    pub fn apply_move(&self, state: &mut GameState, pos: Pos) -> Result<Outcome, EngineError> {
        if state.finished {
            return Err(EngineError::GameFinished);
        }
        let size = state.board.size();
        if pos.row >= size || pos.col >= size {
            return Err(EngineError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size,
            });
        }
        if !state.board.is_empty_at(pos) {
            return Err(EngineError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        Ok(rules::apply_move(state, pos))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Stone};

    #[test]
    fn test_levels_map_to_strategies() {
        assert_eq!(Strategy::try_from(1).unwrap(), Strategy::Heuristic);
        assert_eq!(Strategy::try_from(2).unwrap(), Strategy::Minimax);
        assert_eq!(Strategy::try_from(3).unwrap(), Strategy::AlphaBeta);
        assert_eq!(Strategy::try_from(4).unwrap(), Strategy::Mcts);
    }

    #[test]
    fn test_unknown_level_fails_fast() {
        assert!(matches!(
            Strategy::try_from(0),
            Err(EngineError::UnknownLevel(0))
        ));
        assert!(matches!(
            Strategy::try_from(5),
            Err(EngineError::UnknownLevel(5))
        ));
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        let mut state = GameState::new(9);
        let result = Engine::new().apply_move(&mut state, Pos::new(9, 0));
        assert!(matches!(result, Err(EngineError::OutOfBounds { .. })));
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let mut state = GameState::new(9);
        let engine = Engine::new();
        engine.apply_move(&mut state, Pos::new(4, 4)).unwrap();
        let result = engine.apply_move(&mut state, Pos::new(4, 4));
        assert!(matches!(result, Err(EngineError::Occupied { .. })));
    }

    #[test]
    fn test_apply_move_advances_turn() {
        let mut state = GameState::new(9);
        let engine = Engine::new();
        assert_eq!(state.to_move, Stone::Black);
        let outcome = engine.apply_move(&mut state, Pos::new(4, 4)).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(state.to_move, Stone::White);
    }

    #[test]
    fn test_select_move_on_finished_game() {
        let mut state = GameState::new(9);
        state.finished = true;
        let result =
            Engine::new().select_move(&mut state, Strategy::Heuristic, Budget::Depth(1));
        assert!(matches!(result, Err(EngineError::GameFinished)));
    }

    #[test]
    fn test_select_move_on_full_board() {
        let mut board = Board::new(3);
        for pos in board.positions().collect::<Vec<_>>() {
            board.place_stone(pos, Stone::Black);
        }
        let mut state = GameState::from_board(board, Stone::White);
        let result =
            Engine::new().select_move(&mut state, Strategy::Heuristic, Budget::Depth(1));
        assert!(matches!(result, Err(EngineError::NoLegalMove)));
    }

    #[test]
    fn test_mismatched_budget_is_rejected() {
        let mut engine = Engine::with_seed(11);
        let mut state = GameState::new(9);

        let result = engine.select_move(
            &mut state,
            Strategy::AlphaBeta,
            Budget::Time(Duration::from_millis(100)),
        );
        assert!(matches!(result, Err(EngineError::BudgetMismatch { .. })));

        let result = engine.select_move(&mut state, Strategy::Mcts, Budget::Depth(2));
        assert!(matches!(result, Err(EngineError::BudgetMismatch { .. })));

        // Nothing was played while rejecting
        assert!(state.board.is_board_empty());
    }

    #[test]
    fn test_full_game_reaches_terminal_outcome() {
        // Heuristic (X) against MCTS (O) on 9x9, played to the end:
        // every selected move must be legal and the game must finish
        // with a win or a draw within one move per cell.
        let mut engine = Engine::with_seed(11);
        let mut state = GameState::new(9);
        let cells = 9 * 9;

        for ply in 1..=cells {
            let (strategy, budget) = if state.to_move == Stone::Black {
                (Strategy::Heuristic, Budget::Depth(1))
            } else {
                (Strategy::Mcts, Budget::Time(Duration::from_millis(20)))
            };

            let mv = engine.select_move(&mut state, strategy, budget).unwrap();
            assert!(
                state.board.is_empty_at(mv),
                "ply {}: {} picked occupied cell {:?}",
                ply,
                strategy,
                mv
            );

            match engine.apply_move(&mut state, mv).unwrap() {
                Outcome::Continue => {}
                Outcome::Win | Outcome::Draw => {
                    assert!(state.finished);
                    return;
                }
            }
        }
        panic!("game did not terminate after {} plies", cells);
    }

    #[test]
    fn test_every_strategy_returns_a_legal_move() {
        let mut engine = Engine::with_seed(11);
        let cases = [
            (Strategy::Heuristic, Budget::Depth(1)),
            (Strategy::Minimax, Budget::Depth(1)),
            (Strategy::AlphaBeta, Budget::Depth(2)),
            (Strategy::Mcts, Budget::Time(Duration::from_millis(50))),
        ];

        for (strategy, budget) in cases {
            let mut board = Board::new(9);
            board.place_stone(Pos::new(4, 4), Stone::Black);
            let mut state = GameState::from_board(board, Stone::White);

            let mv = engine.select_move(&mut state, strategy, budget).unwrap();
            assert!(
                state.board.is_empty_at(mv),
                "{} picked occupied cell {:?}",
                strategy,
                mv
            );
        }
    }
}
