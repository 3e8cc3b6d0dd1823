//! Game rules: move application, win and draw detection

pub mod win;

pub use win::{has_five_at, side_has_five, winner};

use crate::board::{GameState, Pos};

/// Result of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The move completed five-in-a-row for the mover
    Win,
    /// The move filled the last empty cell without a win
    Draw,
    /// The game goes on; the side to move has been toggled
    Continue,
}

/// Apply a move for the side to move and advance the game.
///
/// Places the mark, checks for five-in-a-row through the placed stone,
/// then for a full board. Win takes priority when the winning move also
/// fills the board. On `Continue` the side to move is toggled; on `Win`
/// and `Draw` it is left on the mover and the state is marked finished.
///
/// The cell must be empty and in bounds; callers validate at the boundary.
pub fn apply_move(state: &mut GameState, pos: Pos) -> Outcome {
    state.board.place_stone(pos, state.to_move);

    if has_five_at(&state.board, pos) {
        state.finished = true;
        return Outcome::Win;
    }
    if state.board.is_full() {
        state.finished = true;
        return Outcome::Draw;
    }

    state.switch_player();
    Outcome::Continue
}
