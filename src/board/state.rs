//! Game state: board, side to move, terminal flag

use super::{Board, Stone};

/// Complete state of a game in progress.
///
/// Mutated in place by the rules engine and by the backtracking searchers
/// (which must restore it exactly), or cloned wholesale when a snapshot has
/// to live independently (MCTS tree nodes).
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    /// Symbol of the player to move. Black moves first.
    pub to_move: Stone,
    /// Set once a win or draw has been detected by the rules engine.
    pub finished: bool,
}

impl GameState {
    /// Fresh game on an empty board of the given size, Black to move.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            to_move: Stone::Black,
            finished: false,
        }
    }

    /// State over a prepared board, for tests and position setup.
    #[must_use]
    pub fn from_board(board: Board, to_move: Stone) -> Self {
        Self {
            board,
            to_move,
            finished: false,
        }
    }

    /// Toggle the side to move
    #[inline]
    pub fn switch_player(&mut self) {
        self.to_move = self.to_move.opponent();
    }
}
