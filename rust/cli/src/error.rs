//! Error types for the CLI application.
//!
//! This module defines the error types used throughout the CLI for better
//! error propagation and handling.

use std::fmt;

use twofold_ai::StrategyError;
use twofold_engine::errors::GameError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Operation was interrupted (e.g., by user with Ctrl+C)
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

// Bad directions and bad tiles both originate from user-supplied text
impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<StrategyError> for CliError {
    fn from(error: StrategyError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_errors_become_invalid_input() {
        let err: CliError = GameError::InvalidDirection("sideways".into()).into();
        assert!(matches!(err, CliError::InvalidInput(ref m) if m.contains("sideways")));
    }

    #[test]
    fn strategy_errors_become_invalid_input() {
        let err: CliError = StrategyError::Unknown("oracle".into()).into();
        assert!(matches!(err, CliError::InvalidInput(ref m) if m.contains("oracle")));
    }

    #[test]
    fn display_prefixes_category() {
        let err = CliError::Config("games must be >= 1".into());
        assert_eq!(err.to_string(), "Configuration error: games must be >= 1");
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;
        let err = CliError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
    }
}
