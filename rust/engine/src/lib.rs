//! # twofold-engine: Slide-and-Merge Puzzle Core
//!
//! A deterministic engine for the 4×4 "slide and merge power-of-two tiles"
//! puzzle. Provides the board model, the four directional move transforms,
//! random tile spawning, score accrual and game-over detection, with
//! injectable randomness for reproducible play.
//!
//! ## Core Modules
//!
//! - [`board`] - Board representation, cells and tile invariants
//! - [`direction`] - The four move directions and their parsing
//! - [`moves`] - Compress / merge / re-pad line transform applied per direction
//! - [`spawn`] - Randomness sources and tile spawning
//! - [`terminal`] - No-more-moves detection
//! - [`game`] - Game session sequencing move, spawn and terminal check
//! - [`errors`] - Error types for invalid input
//!
//! ## Quick Start
//!
//! ```rust
//! use twofold_engine::direction::Direction;
//! use twofold_engine::game::{Game, MoveStatus};
//!
//! let mut game = Game::new(7);
//! let report = game.play(Direction::Left);
//! match report.status {
//!     MoveStatus::Accepted => println!("score {}", report.snapshot.score),
//!     MoveStatus::NoChange => println!("nothing moved"),
//!     MoveStatus::GameOver => println!("game already over"),
//! }
//! ```
//!
//! ## Pure Transforms
//!
//! The move engine never touches a session; it maps a board to a new board:
//!
//! ```rust
//! use twofold_engine::board::Board;
//! use twofold_engine::direction::Direction;
//! use twofold_engine::moves::apply_move;
//!
//! let board = Board::from_rows([
//!     [2, 2, 2, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ])
//! .unwrap();
//! let outcome = apply_move(&board, Direction::Left);
//! assert_eq!(outcome.board.rows()[0], [4, 2, 0, 0]);
//! assert_eq!(outcome.score_delta, 4);
//! ```

pub mod board;
pub mod direction;
pub mod errors;
pub mod game;
pub mod moves;
pub mod spawn;
pub mod terminal;
