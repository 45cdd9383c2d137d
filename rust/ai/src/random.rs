//! Uniformly random strategy over the moves that change the board.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::Strategy;
use twofold_engine::board::Board;
use twofold_engine::direction::Direction;
use twofold_engine::moves::available_moves;

/// Picks uniformly among available moves using a seeded ChaCha20 stream,
/// so a (game seed, strategy seed) pair always replays the same game.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha20Rng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose(&mut self, board: &Board) -> Option<Direction> {
        available_moves(board).choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}
