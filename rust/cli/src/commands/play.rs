//! # Play Command
//!
//! Interactive play in the terminal, one command per input line.
//!
//! ## Features
//!
//! - Direction words plus `w/a/s/d` and `k/j/h/l` aliases
//! - `r`/`reset` deals a new game from the same seed stream
//! - Graceful quit handling (user can exit with 'q' or 'quit', or close stdin)
//! - Board and score redrawn after every accepted move

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_move_report};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_play_input};
use std::io::{BufRead, Write};
use twofold_engine::game::{Game, MoveStatus};
use twofold_engine::spawn::RandomSource;

const PROMPT: &str = "Move (w/a/s/d, r to reset, q to quit): ";

/// Handle the play command: interactive play
///
/// # Arguments
///
/// * `seed` - RNG seed for reproducibility (default: configured seed, else random)
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player commands
///
/// # Returns
///
/// * `Ok(())` when the player quits or input ends
/// * `Err(CliError)` if configuration is invalid or I/O errors occur
///
/// # Examples
///
/// ```ignore
/// use twofold_cli::commands::handle_play_command;
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_play_command(Some(7), &mut stdout(), &mut stderr(), &mut input).unwrap();
/// ```
pub fn handle_play_command(
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    writeln!(out, "play: seed={}", seed)?;
    let mut game = Game::new(seed);
    play_session(&mut game, stdin, out, err)
}

/// Drive `game` from `stdin` until quit or EOF (module-private helper).
fn play_session<R: RandomSource>(
    game: &mut Game<R>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    write_position(game, out)?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(input) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break;
        };

        match parse_play_input(&input) {
            ParseResult::Move(direction) => {
                let report = game.play(direction);
                match report.status {
                    MoveStatus::Accepted => {
                        writeln!(out, "{}", format_move_report(&report))?;
                        write_position(game, out)?;
                        if report.snapshot.game_over {
                            writeln!(out, "Game over")?;
                            writeln!(out, "Final score: {}", report.snapshot.score)?;
                        }
                    }
                    MoveStatus::NoChange => {
                        writeln!(out, "{}", format_move_report(&report))?;
                    }
                    MoveStatus::GameOver => {
                        ui::display_warning(err, "Game is over; enter r to start again or q to quit")?;
                    }
                }
            }
            ParseResult::Reset => {
                game.reset();
                writeln!(out, "New game")?;
                write_position(game, out)?;
            }
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    writeln!(
        out,
        "Session: moves={} score={} max_tile={}",
        game.moves_made(),
        game.score(),
        game.board().max_tile()
    )?;
    Ok(())
}

fn write_position<R: RandomSource>(game: &Game<R>, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "{}", format_board(game.board()))?;
    writeln!(out, "Score: {}", game.score())?;
    Ok(())
}
