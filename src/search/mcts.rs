//! Monte Carlo Tree Search with heuristic-guided rollouts
//!
//! Four-phase loop bounded by a simulation ceiling and a wall-clock
//! budget. Selection walks down by UCT; expansion adds exactly one child
//! for the best-scoring untried move, which biases tree growth toward
//! promising lines; rollouts are semi-random, following the heuristic
//! 80% of the time; backpropagation credits every ancestor whose side
//! to move is not the simulated winner.
//!
//! Nodes live in an index arena. Each node owns a full `GameState`
//! snapshot, so tree traversal needs no undo discipline; only the
//! rollout mutates a scratch copy.

use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{GameState, Pos, Stone};
use crate::eval::{evaluate_board, score_move, ROLLOUT};
use crate::movegen;
use crate::rules::{has_five_at, winner};

/// Exploration constant in the UCT formula
pub const UCT_CONSTANT: f64 = 1.414;

/// Ceiling on simulations per decision, independent of the time budget
pub const MAX_SIMULATIONS: u32 = 10_000;

/// Default wall-clock budget per decision
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(2_000);

/// Rollouts stop after this many plies and fall back to static evaluation
const ROLLOUT_MAX_PLIES: u32 = 50;

/// Probability of a rollout ply following the top heuristic move
const GREEDY_ROLLOUT_CHANCE: f64 = 0.8;

/// Pool size for the non-greedy rollout plies
const ROLLOUT_TOP_CHOICES: usize = 3;

/// Weight of the near-center bonus added to UCT
const CENTER_BONUS_WEIGHT: f64 = 0.1;

/// Evaluation magnitudes below this settle a capped rollout as a draw
const DRAW_MARGIN: i32 = 100;

/// Outcome of one simulated playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Playout {
    Won(Stone),
    Draw,
}

/// One tree node in the index arena.
///
/// Owns its state snapshot; `parent` is an arena index, so there is no
/// ownership cycle to manage during backpropagation.
struct Node {
    state: GameState,
    parent: Option<usize>,
    children: Vec<usize>,
    mv: Option<Pos>,
    visits: u32,
    win_score: f64,
}

impl Node {
    fn root(state: GameState) -> Self {
        Self {
            state,
            parent: None,
            children: Vec::new(),
            mv: None,
            visits: 0,
            win_score: 0.0,
        }
    }

    fn child(state: GameState, parent: usize, mv: Pos) -> Self {
        Self {
            state,
            parent: Some(parent),
            children: Vec::new(),
            mv: Some(mv),
            visits: 0,
            win_score: 0.0,
        }
    }

    fn win_rate(&self) -> f64 {
        if self.visits > 0 {
            self.win_score / f64::from(self.visits)
        } else {
            0.0
        }
    }
}

pub struct MctsSearcher {
    rng: StdRng,
}

impl MctsSearcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Searcher with a fixed seed, for reproducible games and tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Best move for the side to move within the given time budget.
    ///
    /// Never returns an occupied cell. `None` only on a full board.
    pub fn best_move(&mut self, state: &GameState, budget: Duration) -> Option<Pos> {
        // Opening shortcut, same spirit as the alpha-beta one
        if state.board.is_board_empty() {
            let pos = self.opening_move(state);
            debug!("mcts: empty board, opening at ({}, {})", pos.row, pos.col);
            return Some(pos);
        }

        let size = state.board.size();
        let center = state.board.center();
        let start = Instant::now();
        let mut simulations = 0u32;

        let mut arena = vec![Node::root(state.clone())];

        while simulations < MAX_SIMULATIONS && start.elapsed() < budget {
            // 1. Selection: walk down by UCT to a leaf
            let leaf = self.select(&arena, center, size);

            // 2. Expansion: one child for the best untried move
            let leaf_board = &arena[leaf].state.board;
            if winner(leaf_board).is_none() && !leaf_board.is_full() {
                expand(&mut arena, leaf);
            }

            // 3. Simulation, from a child when one exists
            let node_to_sim = if arena[leaf].children.is_empty() {
                leaf
            } else {
                self.pick_child_roulette(&arena, leaf)
            };
            let result = self.rollout(arena[node_to_sim].state.clone());

            // 4. Backpropagation up the parent chain
            backpropagate(&mut arena, node_to_sim, result);

            simulations += 1;
        }

        // Highest win rate among root children; ties keep the first
        // child, which is the best-ordered expansion
        let mut best: Option<(usize, f64)> = None;
        for &child in &arena[0].children {
            let rate = arena[child].win_rate();
            if best.map_or(true, |(_, r)| rate > r) {
                best = Some((child, rate));
            }
        }

        if let Some((child, rate)) = best {
            debug!(
                "mcts: {} simulations in {} ms, win rate {:.2}",
                simulations,
                start.elapsed().as_millis(),
                rate
            );
            return arena[child].mv;
        }

        // Budget expired before a single expansion; fall back to the
        // top heuristic candidate
        debug!("mcts: no expansion within budget, falling back to heuristic");
        ordered_rollout_moves(state).into_iter().next()
    }

    /// Descend from the root choosing the child with the highest UCT
    /// value until reaching a node with no children.
    fn select(&self, arena: &[Node], center: Pos, size: usize) -> usize {
        let mut idx = 0;
        while !arena[idx].children.is_empty() {
            let parent_visits = arena[idx].visits;
            let mut best = arena[idx].children[0];
            let mut best_value = f64::NEG_INFINITY;
            for &child in &arena[idx].children {
                let value = uct_value(&arena[child], parent_visits, center, size);
                if value > best_value {
                    best_value = value;
                    best = child;
                }
            }
            idx = best;
        }
        idx
    }

    /// Roulette-wheel pick over the children of `parent`, weighted by
    /// inverse visit count so fresh children get simulated sooner.
    ///
    /// `parent` must have at least one child.
    fn pick_child_roulette(&mut self, arena: &[Node], parent: usize) -> usize {
        let children = &arena[parent].children;
        let total: f64 = children
            .iter()
            .map(|&c| 1.0 / (f64::from(arena[c].visits) + 1.0))
            .sum();

        let target = self.rng.gen::<f64>() * total;
        let mut chosen = children[children.len() - 1];
        let mut sum = 0.0;
        for &child in children {
            sum += 1.0 / (f64::from(arena[child].visits) + 1.0);
            if sum >= target {
                chosen = child;
                break;
            }
        }
        chosen
    }

    /// Semi-random playout on a scratch copy of the state.
    ///
    /// Handles states that are already decided on entry, since the node
    /// being simulated may itself be terminal. Past the ply cap the
    /// outcome is settled by static evaluation.
    fn rollout(&mut self, mut state: GameState) -> Playout {
        if let Some(w) = winner(&state.board) {
            return Playout::Won(w);
        }
        if state.board.is_full() {
            return Playout::Draw;
        }

        for _ in 0..ROLLOUT_MAX_PLIES {
            let moves = ordered_rollout_moves(&state);
            if moves.is_empty() {
                return Playout::Draw;
            }

            let pick = if self.rng.gen_bool(GREEDY_ROLLOUT_CHANCE) {
                0
            } else {
                self.rng.gen_range(0..moves.len().min(ROLLOUT_TOP_CHOICES))
            };
            let pos = moves[pick];

            let mover = state.to_move;
            state.board.place_stone(pos, mover);
            if has_five_at(&state.board, pos) {
                return Playout::Won(mover);
            }
            if state.board.is_full() {
                return Playout::Draw;
            }
            state.switch_player();
        }

        let score = evaluate_board(&state.board, Stone::White, &ROLLOUT);
        if score.abs() < DRAW_MARGIN {
            Playout::Draw
        } else if score > 0 {
            Playout::Won(Stone::White)
        } else {
            Playout::Won(Stone::Black)
        }
    }

    /// Randomized opening at most one cell away from the center.
    fn opening_move(&mut self, state: &GameState) -> Pos {
        let center = state.board.center();
        let offset = usize::from(self.rng.gen_bool(0.5));
        if self.rng.gen_bool(0.5) {
            let row = (center.row + offset).min(state.board.size() - 1);
            Pos::new(row, center.col)
        } else {
            let col = (center.col + offset).min(state.board.size() - 1);
            Pos::new(center.row, col)
        }
    }
}

impl Default for MctsSearcher {
    fn default() -> Self {
        Self::new()
    }
}

/// UCT value of a node: exploitation plus exploration plus a small
/// bonus for moves near the center. Unvisited nodes rank above all.
fn uct_value(node: &Node, parent_visits: u32, center: Pos, size: usize) -> f64 {
    if node.visits == 0 {
        return f64::INFINITY;
    }

    let exploitation = node.win_score / f64::from(node.visits);
    let exploration =
        UCT_CONSTANT * (f64::from(parent_visits).ln() / f64::from(node.visits)).sqrt();

    let position_bonus = node.mv.map_or(0.0, |mv| {
        let distance = mv.row.abs_diff(center.row) + mv.col.abs_diff(center.col);
        CENTER_BONUS_WEIGHT * (1.0 - distance as f64 / (size.max(2) - 1) as f64)
    });

    exploitation + exploration + position_bonus
}

/// Add one child to `idx` for the best-scoring move not yet tried.
fn expand(arena: &mut Vec<Node>, idx: usize) {
    let ordered = ordered_rollout_moves(&arena[idx].state);
    let tried: Vec<Pos> = arena[idx]
        .children
        .iter()
        .filter_map(|&c| arena[c].mv)
        .collect();

    let untried = ordered.into_iter().find(|mv| !tried.contains(mv));
    if let Some(pos) = untried {
        let mut child_state = arena[idx].state.clone();
        let mover = child_state.to_move;
        child_state.board.place_stone(pos, mover);
        child_state.switch_player();

        arena.push(Node::child(child_state, idx, pos));
        let child_idx = arena.len() - 1;
        arena[idx].children.push(child_idx);
    }
}

/// Walk from the simulated node up to the root, counting the visit and
/// crediting nodes whose side to move lost the playout (the mover who
/// produced such a node is the one who benefited).
fn backpropagate(arena: &mut [Node], from: usize, result: Playout) {
    let mut current = Some(from);
    while let Some(idx) = current {
        let node = &mut arena[idx];
        node.visits += 1;
        match result {
            Playout::Draw => node.win_score += 0.5,
            Playout::Won(w) if w != node.state.to_move => node.win_score += 1.0,
            Playout::Won(_) => {}
        }
        current = node.parent;
    }
}

/// Candidate moves ordered by the rollout score table.
fn ordered_rollout_moves(state: &GameState) -> Vec<Pos> {
    movegen::ordered_moves(&state.board, |pos| {
        score_move(&state.board, pos, state.to_move, &ROLLOUT)
    })
}
