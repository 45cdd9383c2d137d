//! Greedy baseline strategy.
//!
//! Looks one move ahead and takes whichever direction scores the most merge
//! points. Used as the default opponent-free player for simulations and as a
//! reference point for other strategies.

use crate::Strategy;
use twofold_engine::board::Board;
use twofold_engine::direction::Direction;
use twofold_engine::moves::apply_move;

/// Tie-break order: keeps big tiles drifting toward the bottom-left corner.
const PREFERENCE: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

/// Greedy one-ply strategy.
///
/// Picks the direction with the largest immediate score delta among those
/// that change the board. Ties go to the earliest direction in the order
/// Down, Left, Right, Up. Fully deterministic.
///
/// # Example
///
/// ```rust
/// use twofold_ai::baseline::BaselineStrategy;
/// use twofold_ai::Strategy;
/// use twofold_engine::board::Board;
/// use twofold_engine::direction::Direction;
///
/// let board = Board::from_rows([
///     [2, 2, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ])
/// .unwrap();
///
/// let mut s = BaselineStrategy::new();
/// assert_eq!(s.choose(&board), Some(Direction::Left));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineStrategy;

impl BaselineStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for BaselineStrategy {
    fn choose(&mut self, board: &Board) -> Option<Direction> {
        let mut best: Option<(Direction, u32)> = None;
        for direction in PREFERENCE {
            let outcome = apply_move(board, direction);
            if !outcome.changed {
                continue;
            }
            match best {
                Some((_, score)) if score >= outcome.score_delta => {}
                _ => best = Some((direction, outcome.score_delta)),
            }
        }
        best.map(|(direction, _)| direction)
    }

    fn name(&self) -> &str {
        "baseline"
    }
}
