//! Pattern-based heuristic scorer
//!
//! Everything here is pure: a hypothetical stone is scored by treating the
//! target cell as occupied during the scan, so callers never have to place
//! and un-place marks just to ask "how good would this cell be".

use crate::board::{Board, Pos, Stone};

use super::patterns::ScoreTable;

/// Direction vectors for line scanning (4 axes, scanned both ways)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// How far to look along each half-line when classifying a run
const SCAN_STEPS: i32 = 4;

/// Score the runs through `pos` as if `stone` stood there.
///
/// For each axis the contiguous same-color cells are counted outward in
/// both directions, up to [`SCAN_STEPS`] each way, and each end is
/// classified open (next cell empty) or blocked (opponent or edge).
/// The per-axis scores from `table` are summed.
///
/// The actual content of `pos` is ignored, so this works both for
/// occupied cells (whole-board evaluation) and for candidate moves.
pub fn pattern_score(board: &Board, pos: Pos, stone: Stone, table: &ScoreTable) -> i32 {
    let mut score = 0;

    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1;
        let mut open_ends = 0;

        for sign in [1, -1] {
            for step in 1..=SCAN_STEPS {
                let r = pos.row as i32 + sign * step * dr;
                let c = pos.col as i32 + sign * step * dc;
                if !board.in_bounds(r, c) {
                    break;
                }
                match board.get(Pos::new(r as usize, c as usize)) {
                    s if s == stone => count += 1,
                    Stone::Empty => {
                        open_ends += 1;
                        break;
                    }
                    _ => break,
                }
            }
        }

        score += table.run_score(count, open_ends);
    }

    score
}

/// Full evaluation of a candidate move for the given mover.
///
/// Combines the attack score (mover places here), the defense score
/// (opponent would place here instead), and a centrality bonus. A cell
/// that completes a five for the mover additionally earns the win score;
/// one that would complete a five for the opponent earns half of it.
pub fn score_move(board: &Board, pos: Pos, stone: Stone, table: &ScoreTable) -> i32 {
    let center = board.center();
    let dist = pos.row.abs_diff(center.row) + pos.col.abs_diff(center.col);
    let mut score = (board.size() as i32 - dist as i32) * table.centrality_weight;

    let attack = pattern_score(board, pos, stone, table);
    let defense = pattern_score(board, pos, stone.opponent(), table);

    score += attack * table.attack_percent / 100;
    score += defense * table.defense_percent / 100;

    if attack >= table.five {
        score += table.five;
    }
    if defense >= table.five {
        score += table.five / 2;
    }

    score
}

/// Static whole-board evaluation from the given side's perspective.
///
/// Sums the pattern score of every occupied cell, positive for the
/// perspective side's stones and negative for the opponent's.
pub fn evaluate_board(board: &Board, perspective: Stone, table: &ScoreTable) -> i32 {
    let mut score = 0;
    for (pos, owner) in board.occupied_cells() {
        let s = pattern_score(board, pos, owner, table);
        if owner == perspective {
            score += s;
        } else {
            score -= s;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::patterns::{ROLLOUT, SEARCH};

    fn board_with(stones: &[(usize, usize, Stone)]) -> Board {
        let mut board = Board::new(15);
        for &(r, c, s) in stones {
            board.place_stone(Pos::new(r, c), s);
        }
        board
    }

    #[test]
    fn test_open_run_beats_blocked_run() {
        let open = board_with(&[
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
        ]);
        let blocked = board_with(&[
            (7, 4, Stone::White),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
        ]);

        let open_score = pattern_score(&open, Pos::new(7, 6), Stone::Black, &SEARCH);
        let blocked_score = pattern_score(&blocked, Pos::new(7, 6), Stone::Black, &SEARCH);
        assert!(
            open_score > blocked_score,
            "open three ({}) should outscore blocked three ({})",
            open_score,
            blocked_score
        );
    }

    #[test]
    fn test_longer_run_scores_higher() {
        let three = board_with(&[
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
        ]);
        let four = board_with(&[
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
        ]);

        let s3 = pattern_score(&three, Pos::new(7, 6), Stone::Black, &SEARCH);
        let s4 = pattern_score(&four, Pos::new(7, 6), Stone::Black, &SEARCH);
        assert!(s4 > s3);
    }

    #[test]
    fn test_hypothetical_five_scores_as_win() {
        // Four in a row; the empty extension cell would complete a five
        let board = board_with(&[
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
        ]);
        let score = pattern_score(&board, Pos::new(7, 8), Stone::Black, &SEARCH);
        assert!(score >= SEARCH.five);
    }

    #[test]
    fn test_score_move_prefers_winning_cell() {
        let board = board_with(&[
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
            (9, 9, Stone::White),
        ]);
        let win = score_move(&board, Pos::new(7, 8), Stone::Black, &SEARCH);
        let quiet = score_move(&board, Pos::new(11, 11), Stone::Black, &SEARCH);
        assert!(win > quiet);
        assert!(win >= SEARCH.five);
    }

    #[test]
    fn test_score_move_rewards_blocking() {
        // White to move, Black threatens a five at (7,8)
        let board = board_with(&[
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
        ]);
        let block = score_move(&board, Pos::new(7, 8), Stone::White, &SEARCH);
        let ignore = score_move(&board, Pos::new(0, 0), Stone::White, &SEARCH);
        assert!(block >= SEARCH.five / 2);
        assert!(block > ignore);
    }

    #[test]
    fn test_score_move_centrality() {
        let board = Board::new(15);
        let center = score_move(&board, Pos::new(7, 7), Stone::Black, &SEARCH);
        let corner = score_move(&board, Pos::new(0, 0), Stone::Black, &SEARCH);
        assert!(
            center > corner,
            "center ({}) should beat corner ({})",
            center,
            corner
        );
    }

    #[test]
    fn test_evaluate_board_sign_and_antisymmetry() {
        let board = board_with(&[
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
            (3, 3, Stone::White),
        ]);
        let black = evaluate_board(&board, Stone::Black, &SEARCH);
        let white = evaluate_board(&board, Stone::White, &SEARCH);
        assert!(black > 0, "side with the open three should be ahead");
        assert_eq!(black, -white);
    }

    #[test]
    fn test_evaluate_empty_board_is_zero() {
        let board = Board::new(15);
        assert_eq!(evaluate_board(&board, Stone::Black, &SEARCH), 0);
        assert_eq!(evaluate_board(&board, Stone::Black, &ROLLOUT), 0);
    }
}
