//! Replay command handler.
//!
//! Re-creates a game from its seed and a recorded list of directions, printing
//! every step. The whole list is parsed before the first move so a typo never
//! leaves a half-applied replay on screen.

use crate::error::CliError;
use crate::formatters::{format_board, format_move_report};
use crate::validation::parse_move_list;
use std::io::Write;
use twofold_engine::game::Game;

/// Handle the replay command.
///
/// # Arguments
///
/// * `seed` - Seed the original game was started with
/// * `moves` - Comma- or whitespace-separated directions
/// * `out` - Output stream for the step-by-step replay
///
/// # Errors
///
/// Returns `CliError::InvalidInput` if any direction is malformed; nothing is
/// printed to `out` in that case.
pub fn handle_replay_command(seed: u64, moves: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let directions = parse_move_list(moves)?;

    let mut game = Game::new(seed);
    writeln!(out, "replay: seed={} moves={}", seed, directions.len())?;
    writeln!(out, "{}", format_board(game.board()))?;

    for (step, direction) in directions.into_iter().enumerate() {
        let report = game.play(direction);
        writeln!(out, "{:>3}. {}", step + 1, format_move_report(&report))?;
    }

    writeln!(out, "Final board:")?;
    writeln!(out, "{}", format_board(game.board()))?;
    writeln!(
        out,
        "Score: {}  Moves: {}{}",
        game.score(),
        game.moves_made(),
        if game.is_over() { "  (game over)" } else { "" }
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(seed: u64, moves: &str) -> (Result<(), CliError>, String) {
        let mut out = Vec::new();
        let result = handle_replay_command(seed, moves, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_replay_prints_each_step() {
        let (result, out) = replay(7, "left,up right down");
        assert!(result.is_ok());
        assert!(out.contains("replay: seed=7 moves=4"));
        assert!(out.contains("  1. left"));
        assert!(out.contains("  4. down"));
        assert!(out.contains("Final board:"));
    }

    #[test]
    fn test_replay_matches_direct_play() {
        let (_, out) = replay(11, "left,left,up,right");
        let mut game = Game::new(11);
        for d in parse_move_list("left,left,up,right").unwrap() {
            game.play(d);
        }
        assert!(out.contains(&format!("Score: {}  Moves: {}", game.score(), game.moves_made())));
        assert!(out.ends_with(&format!(
            "{}\nScore: {}  Moves: {}\n",
            format_board(game.board()),
            game.score(),
            game.moves_made()
        )));
    }

    #[test]
    fn test_replay_rejects_bad_direction_before_playing() {
        let (result, out) = replay(7, "left,sideways,up");
        assert!(matches!(result, Err(CliError::InvalidInput(ref m)) if m.contains("sideways")));
        assert!(out.is_empty());
    }
}
