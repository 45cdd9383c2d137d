//! # Twofold CLI Library
//!
//! This library provides the command-line interface for the twofold
//! slide-and-merge engine. It exposes subcommands for interactive play,
//! headless strategy simulation, deterministic replay and configuration
//! inspection.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["twofold", "sim", "--games", "5", "--seed", "42"];
//! let code = twofold_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play interactively, one direction per input line
//! - `sim`: Play games headless with a strategy and report results
//! - `replay`: Re-create a seeded game from a list of moves
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, TwofoldCli};
use commands::{
    handle_cfg_command, handle_play_command, handle_replay_command, handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["twofold", "replay", "--seed", "42", "--moves", "left,up"];
/// let code = twofold_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
///
/// # Available Commands
///
/// - `play [--seed N]`: Interactive game on stdin
/// - `sim [--games N] [--seed N] [--strategy NAME] [--json]`: Headless batch
/// - `replay --seed N --moves LIST`: Apply a move list to a seeded game
/// - `cfg`: Display configuration settings
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "replay", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = TwofoldCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Twofold CLI");
                    write_or_exit!(err, "Usage: twofold <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: twofold --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Cfg => handle_cfg_command(out),
                Commands::Play { seed } => {
                    // Use stdin for real input (supports both TTY and piped stdin)
                    let stdin = std::io::stdin();
                    let mut stdin_lock = stdin.lock();
                    handle_play_command(seed, out, err, &mut stdin_lock)
                }
                Commands::Sim {
                    games,
                    seed,
                    strategy,
                    json,
                } => handle_sim_command(games, seed, strategy, json, out),
                Commands::Replay { seed, moves } => handle_replay_command(seed, &moves, out),
            };
            exit_code_for(result, err)
        }
    }
}

fn exit_code_for(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
