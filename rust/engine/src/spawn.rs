use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};

/// Probability that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Source of the two random draws a spawn needs.
///
/// Games take the source as a value so tests can swap in a scripted one.
pub trait RandomSource {
    /// A float in `[0, 1)`.
    fn unit(&mut self) -> f64;
    /// An index drawn uniformly from `0..len`. `len` is never 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// ChaCha20-backed source; equal seeds yield equal games.
///
/// # Examples
///
/// ```
/// use twofold_engine::spawn::{RandomSource, SeededSource};
///
/// let mut a = SeededSource::new(7);
/// let mut b = SeededSource::new(7);
/// assert_eq!(a.pick(16), b.pick(16));
/// assert_eq!(a.unit(), b.unit());
/// ```
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays fixed draws in order. Once a queue runs dry it keeps answering
/// 0 (for picks) or 0.0 (for units), i.e. "first empty cell, value 2".
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
    units: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new(picks: impl IntoIterator<Item = usize>, units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            units: units.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(len - 1)
    }
}

/// A tile placed by [`spawn_tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    pub cell: Cell,
    pub value: u32,
}

/// Places one tile in a uniformly chosen empty cell: a 2 with probability
/// [`SPAWN_TWO_PROBABILITY`], otherwise a 4.
///
/// The cell is drawn before the value. A full board comes back unchanged
/// with `None` and consumes no randomness.
pub fn spawn_tile<R: RandomSource + ?Sized>(board: &Board, source: &mut R) -> (Board, Option<Spawn>) {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return (*board, None);
    }
    let cell = empty[source.pick(empty.len())];
    let value = if source.unit() < SPAWN_TWO_PROBABILITY {
        2
    } else {
        4
    };
    tracing::debug!(row = cell.row, col = cell.col, value, "spawned tile");
    (board.with_tile(cell, value), Some(Spawn { cell, value }))
}
