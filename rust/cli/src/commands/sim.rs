//! Simulation command handler for headless strategy games.
//!
//! Plays a batch of games with a named strategy and reports per-game and
//! aggregate results. Game `i` uses seed `base + i`, so a batch is fully
//! reproducible from its base seed.
//!
//! # Environment Variables
//!
//! - `TWOFOLD_SIM_BREAK_AFTER`: Stop after N games and exit as interrupted (for testing)
//!
//! # Examples
//!
//! ```no_run
//! use twofold_cli::commands::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//!
//! // Ten baseline games starting at seed 42
//! handle_sim_command(Some(10), Some(42), Some("baseline".into()), false, &mut out).unwrap();
//! ```

use crate::config;
use crate::error::CliError;
use serde::Serialize;
use std::io::Write;
use twofold_ai::{Strategy, create_strategy};
use twofold_engine::game::Game;

/// Resolved parameters for one simulation batch.
#[derive(Debug, Clone)]
struct SimPlan {
    games: u32,
    base_seed: u64,
    strategy: String,
    max_moves: u32,
    json: bool,
}

#[derive(Debug, Clone, Serialize)]
struct GameResult {
    game: u32,
    seed: u64,
    score: u32,
    max_tile: u32,
    moves: u32,
    /// False when the move cap stopped the game before it was over
    finished: bool,
}

#[derive(Debug, Serialize)]
struct SimSummary {
    strategy: String,
    base_seed: u64,
    games: Vec<GameResult>,
    mean_score: f64,
    best_score: u32,
    best_tile: u32,
    total_moves: u64,
}

impl SimSummary {
    fn from_results(plan: &SimPlan, games: Vec<GameResult>) -> Self {
        let total_score: u64 = games.iter().map(|g| u64::from(g.score)).sum();
        let mean_score = if games.is_empty() {
            0.0
        } else {
            total_score as f64 / games.len() as f64
        };
        Self {
            strategy: plan.strategy.clone(),
            base_seed: plan.base_seed,
            mean_score,
            best_score: games.iter().map(|g| g.score).max().unwrap_or(0),
            best_tile: games.iter().map(|g| g.max_tile).max().unwrap_or(0),
            total_moves: games.iter().map(|g| u64::from(g.moves)).sum(),
            games,
        }
    }
}

/// Handle the sim command: play games headless with a strategy.
///
/// # Arguments
///
/// * `games` - Number of games (default: configured `games`)
/// * `seed` - Base RNG seed (default: configured seed, else random)
/// * `strategy` - Strategy name (default: configured strategy)
/// * `json` - Print a JSON summary instead of text
/// * `out` - Output stream for results
///
/// # Returns
///
/// `Ok(())` on success, `CliError::Interrupted` when stopped early, or
/// another `CliError` on failure
pub fn handle_sim_command(
    games: Option<u32>,
    seed: Option<u64>,
    strategy: Option<String>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;

    let plan = SimPlan {
        games: games.unwrap_or(cfg.games),
        base_seed: seed.or(cfg.seed).unwrap_or_else(rand::random),
        strategy: strategy.unwrap_or(cfg.strategy),
        max_moves: cfg.max_moves,
        json,
    };
    if plan.games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let break_after = std::env::var("TWOFOLD_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u32>().ok());

    run_sim(&plan, break_after, out)
}

fn run_sim(plan: &SimPlan, break_after: Option<u32>, out: &mut dyn Write) -> Result<(), CliError> {
    // Fail on a bad name before any game is played
    create_strategy(&plan.strategy, plan.base_seed)?;

    if !plan.json {
        writeln!(
            out,
            "sim: games={} seed={} strategy={}",
            plan.games, plan.base_seed, plan.strategy
        )?;
    }

    let mut results = Vec::with_capacity(plan.games as usize);
    for i in 0..plan.games {
        let seed = plan.base_seed.wrapping_add(u64::from(i));
        let mut strategy = create_strategy(&plan.strategy, seed)?;
        let result = play_game(i + 1, seed, strategy.as_mut(), plan.max_moves);

        if !plan.json {
            writeln!(
                out,
                "Game {}: seed={} score={} max_tile={} moves={}{}",
                result.game,
                result.seed,
                result.score,
                result.max_tile,
                result.moves,
                if result.finished { "" } else { " (move cap)" }
            )?;
        }
        results.push(result);

        if let Some(b) = break_after
            && results.len() as u32 == b
            && b < plan.games
        {
            writeln!(out, "Interrupted: played {}/{}", b, plan.games)?;
            return Err(CliError::Interrupted(format!(
                "played {}/{}",
                b, plan.games
            )));
        }
    }

    let summary = SimSummary::from_results(plan, results);
    if plan.json {
        let json_str = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        writeln!(out, "Games: {}", summary.games.len())?;
        writeln!(out, "Mean score: {:.1}", summary.mean_score)?;
        writeln!(out, "Best score: {}", summary.best_score)?;
        writeln!(out, "Best tile: {}", summary.best_tile)?;
        writeln!(out, "Total moves: {}", summary.total_moves)?;
    }
    Ok(())
}

/// Play one game to the end or to `max_moves` accepted moves.
fn play_game(index: u32, seed: u64, strategy: &mut dyn Strategy, max_moves: u32) -> GameResult {
    let mut game = Game::new(seed);
    while !game.is_over() && game.moves_made() < max_moves {
        let Some(direction) = strategy.choose(game.board()) else {
            break;
        };
        if !game.play(direction).accepted() {
            break;
        }
    }

    tracing::debug!(
        game = index,
        seed,
        strategy = strategy.name(),
        score = game.score(),
        "sim game finished"
    );

    GameResult {
        game: index,
        seed,
        score: game.score(),
        max_tile: game.board().max_tile(),
        moves: game.moves_made(),
        finished: game.is_over(),
    }
}
