//! Input parsing and validation for interactive and batch commands.
//!
//! This module turns user-typed text into engine directions. It handles:
//! - Interactive play input (directions, reset, quit)
//! - Direction lists for the replay command
//!
//! ## Error Handling
//!
//! Interactive parsing returns a [`ParseResult`] so the play loop can report a
//! bad line and keep going; list parsing fails fast with a [`GameError`] so
//! nothing is applied when any entry is malformed.

use twofold_engine::direction::Direction;
use twofold_engine::errors::GameError;

/// Result type for parsing one line of interactive input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A direction to slide the board in
    Move(Direction),
    /// Discard the current game and start a new one
    Reset,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse one line of interactive input.
///
/// Accepts the following (case-insensitive):
/// - "up", "down", "left", "right"
/// - "w", "a", "s", "d" and "k", "h", "j", "l" as direction aliases
/// - "r" or "reset" → Reset
/// - "q" or "quit" → Quit
///
/// # Example
///
/// ```rust
/// # use twofold_cli::validation::{parse_play_input, ParseResult};
/// use twofold_engine::direction::Direction;
///
/// assert_eq!(parse_play_input("left"), ParseResult::Move(Direction::Left));
/// assert_eq!(parse_play_input("W"), ParseResult::Move(Direction::Up));
/// assert_eq!(parse_play_input("q"), ParseResult::Quit);
///
/// match parse_play_input("jump") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_play_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "q" | "quit" => ParseResult::Quit,
        "r" | "reset" => ParseResult::Reset,
        other => match parse_direction(other) {
            Ok(direction) => ParseResult::Move(direction),
            Err(_) => ParseResult::Invalid(format!(
                "Unrecognized input '{}'. Valid input: up, down, left, right (w/a/s/d, k/j/h/l), r, q",
                other
            )),
        },
    }
}

/// Parse a single direction name or alias.
pub fn parse_direction(token: &str) -> Result<Direction, GameError> {
    match token.trim().to_lowercase().as_str() {
        "w" | "k" => Ok(Direction::Up),
        "s" | "j" => Ok(Direction::Down),
        "a" | "h" => Ok(Direction::Left),
        "d" | "l" => Ok(Direction::Right),
        _ => token.parse(),
    }
}

/// Parse a comma- and/or whitespace-separated list of directions.
///
/// Fails on the first malformed entry; an empty list is an error too.
///
/// # Example
///
/// ```rust
/// # use twofold_cli::validation::parse_move_list;
/// use twofold_engine::direction::Direction;
///
/// let moves = parse_move_list("left, up d").unwrap();
/// assert_eq!(moves, vec![Direction::Left, Direction::Up, Direction::Right]);
/// assert!(parse_move_list("left,north").is_err());
/// ```
pub fn parse_move_list(input: &str) -> Result<Vec<Direction>, GameError> {
    let moves = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(parse_direction)
        .collect::<Result<Vec<_>, _>>()?;
    if moves.is_empty() {
        return Err(GameError::InvalidDirection(input.to_string()));
    }
    Ok(moves)
}
