//! Five-in-a-row detection
//!
//! Two forms are provided, matching how the searchers use them:
//! - [`has_five_at`]: fast check through one cell, for when the last move
//!   is known (move application, rollout steps)
//! - [`side_has_five`] / [`winner`]: exhaustive whole-board scans, for
//!   search nodes evaluated without last-move context

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors for line checking (4 axes; each is scanned both ways)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check for five-in-a-row through the given cell.
///
/// Counts contiguous same-mark cells outward in both directions on each
/// of the 4 axes. False on an empty cell. Does not mutate.
pub fn has_five_at(board: &Board, pos: Pos) -> bool {
    let stone = board.get(pos);
    if stone == Stone::Empty {
        return false;
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1;

        let mut r = pos.row as i32 + dr;
        let mut c = pos.col as i32 + dc;
        while board.in_bounds(r, c) && board.get(Pos::new(r as usize, c as usize)) == stone {
            count += 1;
            r += dr;
            c += dc;
        }

        r = pos.row as i32 - dr;
        c = pos.col as i32 - dc;
        while board.in_bounds(r, c) && board.get(Pos::new(r as usize, c as usize)) == stone {
            count += 1;
            r -= dr;
            c -= dc;
        }

        if count >= WIN_LENGTH as i32 {
            return true;
        }
    }
    false
}

/// Exhaustive scan: does the given side have a winning line anywhere?
///
/// This is the sentinel form used when no last-move coordinates are
/// available; it visits every stone of the side rather than assuming
/// the most recent move completed the line.
pub fn side_has_five(board: &Board, stone: Stone) -> bool {
    board
        .occupied_cells()
        .any(|(pos, owner)| owner == stone && has_five_at(board, pos))
}

/// Exhaustive scan over both sides, returning the winner if any.
///
/// Used as the terminal check inside recursive search, where nodes are
/// reached out of move order and either side may have completed a line.
pub fn winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| side_has_five(board, stone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameState;
    use crate::rules::{apply_move, Outcome};

    #[test]
    fn test_empty_board_no_win() {
        let board = Board::new(15);
        for pos in board.positions() {
            assert!(!has_five_at(&board, pos));
        }
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_five_horizontal() {
        let mut board = Board::new(15);
        for i in 0..5 {
            board.place_stone(Pos::new(7, 3 + i), Stone::Black);
        }
        // Every cell of the line sees the win
        for i in 0..5 {
            assert!(has_five_at(&board, Pos::new(7, 3 + i)));
        }
        assert_eq!(winner(&board), Some(Stone::Black));
    }

    #[test]
    fn test_five_vertical() {
        let mut board = Board::new(15);
        for i in 0..5 {
            board.place_stone(Pos::new(3 + i, 7), Stone::White);
        }
        assert!(has_five_at(&board, Pos::new(5, 7)));
        assert_eq!(winner(&board), Some(Stone::White));
    }

    #[test]
    fn test_five_diagonal_se() {
        let mut board = Board::new(15);
        for i in 0..5 {
            board.place_stone(Pos::new(2 + i, 2 + i), Stone::Black);
        }
        assert!(has_five_at(&board, Pos::new(4, 4)));
    }

    #[test]
    fn test_five_diagonal_sw() {
        let mut board = Board::new(15);
        for i in 0..5 {
            board.place_stone(Pos::new(2 + i, 10 - i), Stone::Black);
        }
        assert!(has_five_at(&board, Pos::new(4, 8)));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let mut board = Board::new(15);
        for i in 0..4 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }
        for i in 0..4 {
            assert!(!has_five_at(&board, Pos::new(7, i)));
        }
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_six_in_row_wins() {
        let mut board = Board::new(15);
        for i in 0..6 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }
        assert!(has_five_at(&board, Pos::new(7, 0)));
    }

    #[test]
    fn test_mixed_line_no_win() {
        let mut board = Board::new(15);
        for i in 0..5 {
            let stone = if i == 2 { Stone::White } else { Stone::Black };
            board.place_stone(Pos::new(7, i), stone);
        }
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new(15);
        for i in 0..5 {
            board.place_stone(Pos::new(14, 10 + i), Stone::White);
        }
        assert!(has_five_at(&board, Pos::new(14, 14)));
    }

    #[test]
    fn test_side_has_five_is_side_specific() {
        let mut board = Board::new(15);
        for i in 0..5 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }
        assert!(side_has_five(&board, Stone::Black));
        assert!(!side_has_five(&board, Stone::White));
    }

    #[test]
    fn test_winner_reports_only_the_side_with_five() {
        let mut board = Board::new(15);
        for i in 0..5 {
            board.place_stone(Pos::new(7, i), Stone::White);
        }
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert_eq!(winner(&board), Some(Stone::White));
        assert!(!side_has_five(&board, Stone::Black));
    }

    #[test]
    fn test_checks_do_not_mutate() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let before = board.key();
        let _ = has_five_at(&board, Pos::new(7, 7));
        let _ = winner(&board);
        let _ = board.is_full();
        assert_eq!(board.key(), before);
    }

    #[test]
    fn test_apply_continue_toggles_player() {
        let mut state = GameState::new(15);
        assert_eq!(apply_move(&mut state, Pos::new(7, 7)), Outcome::Continue);
        assert_eq!(state.to_move, Stone::White);
        assert!(!state.finished);
        assert_eq!(state.board.get(Pos::new(7, 7)), Stone::Black);
    }

    #[test]
    fn test_apply_detects_win() {
        // Concrete scenario: X on (7,7)..(7,10); (7,11) completes the five
        let mut board = Board::new(15);
        for col in 7..11 {
            board.place_stone(Pos::new(7, col), Stone::Black);
        }
        let mut state = GameState::from_board(board, Stone::Black);

        assert_eq!(apply_move(&mut state, Pos::new(7, 11)), Outcome::Win);
        assert!(state.finished);
        // The mover stays on move so the caller can identify the winner
        assert_eq!(state.to_move, Stone::Black);
    }

    /// Tiling with no 5-in-a-row anywhere: cell is Black iff
    /// `(col + 2*row) % 4 < 2`. Runs are capped at 2 on every axis.
    fn draw_stone(row: usize, col: usize) -> Stone {
        if (col + 2 * row) % 4 < 2 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    #[test]
    fn test_apply_detects_draw_on_full_board() {
        let mut board = Board::new(15);
        let last = Pos::new(14, 14);
        for pos in board.positions().collect::<Vec<_>>() {
            if pos != last {
                board.place_stone(pos, draw_stone(pos.row, pos.col));
            }
        }
        assert_eq!(winner(&board), None);

        let final_stone = draw_stone(last.row, last.col);
        let mut state = GameState::from_board(board, final_stone);
        assert_eq!(apply_move(&mut state, last), Outcome::Draw);
        assert!(state.finished);
    }

    #[test]
    fn test_win_takes_priority_over_full_board() {
        // 5x5 board, one empty cell left at (4,4); filling it completes
        // a horizontal five and fills the board. Win must be reported.
        let rows = ["XXOOX", "OOXXO", "XXOOX", "OOXXO", "XXXX."];
        let mut board = Board::new(5);
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    'X' => board.place_stone(Pos::new(r, c), Stone::Black),
                    'O' => board.place_stone(Pos::new(r, c), Stone::White),
                    _ => {}
                }
            }
        }
        assert_eq!(winner(&board), None);

        let mut state = GameState::from_board(board, Stone::Black);
        assert_eq!(apply_move(&mut state, Pos::new(4, 4)), Outcome::Win);
    }
}
