//! # twofold-ai: Automated Players
//!
//! Strategies that pick a move direction from a board. They sit on the
//! caller side of the engine, exactly where a human at a keyboard would.
//!
//! ## Core Components
//!
//! - [`Strategy`] - Trait defining the interface for choosing a direction
//! - [`baseline`] - Greedy strategy maximizing immediate merge score
//! - [`random`] - Seeded strategy picking uniformly among useful moves
//! - [`create_strategy`] - Factory for creating strategies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use twofold_ai::create_strategy;
//! use twofold_engine::game::Game;
//!
//! let mut strategy = create_strategy("baseline", 42).expect("known strategy");
//! let mut game = Game::new(42);
//!
//! while let Some(direction) = strategy.choose(game.board()) {
//!     game.play(direction);
//! }
//! assert!(game.is_over());
//! ```

use thiserror::Error;
use twofold_engine::board::Board;
use twofold_engine::direction::Direction;

pub mod baseline;
pub mod random;

/// Names accepted by [`create_strategy`].
pub const STRATEGY_NAMES: &[&str] = &["baseline", "random"];

/// Trait for anything that can pick the next move from a board.
///
/// # Example Implementation
///
/// ```rust
/// use twofold_ai::Strategy;
/// use twofold_engine::board::Board;
/// use twofold_engine::direction::Direction;
/// use twofold_engine::moves::available_moves;
///
/// struct FirstAvailable;
///
/// impl Strategy for FirstAvailable {
///     fn choose(&mut self, board: &Board) -> Option<Direction> {
///         available_moves(board).first().copied()
///     }
///
///     fn name(&self) -> &str {
///         "first"
///     }
/// }
/// ```
pub trait Strategy: Send {
    /// Picks a direction that changes `board`, or `None` when no direction
    /// does (the board is terminal).
    fn choose(&mut self, board: &Board) -> Option<Direction>;

    /// Return the name/identifier of this strategy.
    fn name(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("Unknown strategy: {0} (expected one of: baseline, random)")]
    Unknown(String),
}

/// Factory function to create strategies by name.
///
/// `seed` drives strategies that need randomness and is ignored by
/// deterministic ones.
///
/// # Example
///
/// ```rust
/// use twofold_ai::{create_strategy, StrategyError};
///
/// let s = create_strategy("baseline", 0).unwrap();
/// assert_eq!(s.name(), "baseline");
/// assert!(matches!(create_strategy("oracle", 0), Err(StrategyError::Unknown(_))));
/// ```
pub fn create_strategy(name: &str, seed: u64) -> Result<Box<dyn Strategy>, StrategyError> {
    match name {
        "baseline" => Ok(Box::new(baseline::BaselineStrategy::new())),
        "random" => Ok(Box::new(random::RandomStrategy::new(seed))),
        other => Err(StrategyError::Unknown(other.to_string())),
    }
}
