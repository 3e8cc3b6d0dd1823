//! AI-vs-AI arena runner
//!
//! Pits two strategies against each other and reports per-move records
//! (1-indexed coordinates, elapsed milliseconds) plus win/draw tallies.
//!
//! Usage: `arena <level 1-4> <level 1-4> [games] [board size]`
//!
//! Levels: 1 heuristic, 2 minimax, 3 alpha-beta, 4 MCTS. Per-move
//! records go through the logger; set `RUST_LOG=info` to see them.

use std::time::Instant;

use anyhow::{bail, Context, Result};
use log::info;

use gomoku_ai::{Engine, GameState, Outcome, Stone, Strategy, DEFAULT_BOARD_SIZE};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: arena <level 1-4> <level 1-4> [games] [board size]");
    }

    let level_x: u8 = args[0].parse().context("level of player X")?;
    let level_o: u8 = args[1].parse().context("level of player O")?;
    let games: u32 = match args.get(2) {
        Some(raw) => raw.parse().context("number of games")?,
        None => 1,
    };
    let size: usize = match args.get(3) {
        Some(raw) => raw.parse().context("board size")?,
        None => DEFAULT_BOARD_SIZE,
    };
    if size == 0 {
        bail!("board size must be at least 1");
    }

    let strategy_x = Strategy::try_from(level_x)?;
    let strategy_o = Strategy::try_from(level_o)?;

    let mut x_wins = 0u32;
    let mut o_wins = 0u32;
    let mut draws = 0u32;

    for game in 1..=games {
        info!(
            "game {game}: {strategy_x} (X) vs {strategy_o} (O) on {size}x{size}"
        );
        let mut engine = Engine::new();
        let mut state = GameState::new(size);

        loop {
            let mover = state.to_move;
            let strategy = if mover == Stone::Black {
                strategy_x
            } else {
                strategy_o
            };

            let start = Instant::now();
            let mv = engine
                .select_move(&mut state, strategy, strategy.default_budget())
                .with_context(|| format!("game {game}: {strategy} failed to pick a move"))?;
            let elapsed = start.elapsed().as_millis();
            let outcome = engine.apply_move(&mut state, mv)?;

            info!(
                "game {game}: {} ({strategy}) plays ({}, {}) in {elapsed} ms",
                mover.as_char(),
                mv.row + 1,
                mv.col + 1
            );

            match outcome {
                Outcome::Win => {
                    info!(
                        "game {game}: {} wins after {} stones",
                        mover.as_char(),
                        state.board.stone_count()
                    );
                    if mover == Stone::Black {
                        x_wins += 1;
                    } else {
                        o_wins += 1;
                    }
                    break;
                }
                Outcome::Draw => {
                    info!("game {game}: draw");
                    draws += 1;
                    break;
                }
                Outcome::Continue => {}
            }
        }
    }

    println!("X ({strategy_x}) wins: {x_wins}");
    println!("O ({strategy_o}) wins: {o_wins}");
    println!("draws: {draws}");

    Ok(())
}
