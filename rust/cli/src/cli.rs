//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Slide-and-merge puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(name = "twofold", version, about = "Slide-and-merge tile puzzle")]
pub struct TwofoldCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play interactively, one direction per input line
    Play {
        /// RNG seed for reproducible tile spawns
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play games headless with a strategy and report results
    Sim {
        /// Number of games to play
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: Option<u32>,
        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Strategy name (baseline, random)
        #[arg(long)]
        strategy: Option<String>,
        /// Print a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },
    /// Apply a fixed list of moves to a seeded game
    Replay {
        /// RNG seed for the game
        #[arg(long)]
        seed: u64,
        /// Comma- or space-separated directions, e.g. "left,up,up,right"
        #[arg(long)]
        moves: String,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
