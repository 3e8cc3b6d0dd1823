//! Pattern score tables
//!
//! Two tables with the same relative ordering but different magnitudes:
//! the adversarial searchers use [`SEARCH`], the MCTS rollouts use the
//! lighter [`ROLLOUT`] table. Longer runs always outscore shorter ones
//! and open ends always outscore blocked ones; a run of five is the
//! maximum and is treated as a forced win by every caller.

/// Scoring weights for run patterns and move evaluation.
///
/// Weights for attack/defense are expressed in percent so the whole
/// evaluation stays in integer arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct ScoreTable {
    /// Run of five or more - a win
    pub five: i32,
    /// Run of four, both ends open (unstoppable next turn)
    pub open_four: i32,
    /// Run of four, one end open (forcing)
    pub closed_four: i32,
    /// Run of three, both ends open
    pub open_three: i32,
    /// Run of three, one end open
    pub closed_three: i32,
    /// Run of two, both ends open
    pub open_two: i32,
    /// Run of two, one end open
    pub closed_two: i32,
    /// Single stone with both ends open
    pub lone_stone: i32,
    /// Attack weight in percent for move evaluation (slightly above 100)
    pub attack_percent: i32,
    /// Defense weight in percent for move evaluation (at most 100)
    pub defense_percent: i32,
    /// Weight of the `(size - distance_to_center)` centrality bonus
    pub centrality_weight: i32,
}

/// Table used by the minimax and alpha-beta searchers.
pub const SEARCH: ScoreTable = ScoreTable {
    five: 1_000_000,
    open_four: 200_000,
    closed_four: 20_000,
    open_three: 1_500,
    closed_three: 150,
    open_two: 70,
    closed_two: 15,
    lone_stone: 5,
    attack_percent: 110,
    defense_percent: 60,
    centrality_weight: 2,
};

/// Table used by MCTS move ordering and rollouts.
pub const ROLLOUT: ScoreTable = ScoreTable {
    five: 100_000,
    open_four: 10_000,
    closed_four: 1_000,
    open_three: 500,
    closed_three: 100,
    open_two: 50,
    closed_two: 10,
    lone_stone: 0,
    attack_percent: 110,
    defense_percent: 100,
    centrality_weight: 10,
};

impl ScoreTable {
    /// Score one run given its length and number of open ends.
    #[inline]
    pub fn run_score(&self, count: i32, open_ends: i32) -> i32 {
        match (count, open_ends) {
            (5.., _) => self.five,
            (4, 2) => self.open_four,
            (4, 1) => self.closed_four,
            (3, 2) => self.open_three,
            (3, 1) => self.closed_three,
            (2, 2) => self.open_two,
            (2, 1) => self.closed_two,
            (1, 2) => self.lone_stone,
            _ => 0,
        }
    }
}
