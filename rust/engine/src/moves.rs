use crate::board::{Board, Cell, SIZE};
use crate::direction::Direction;

/// Result of sliding a board in one direction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MoveOutcome {
    /// Board after compress, merge and re-pad on every line
    pub board: Board,
    /// Sum of the tile values produced by merges during this move
    pub score_delta: u32,
    /// Whether any line ended up different from how it started
    pub changed: bool,
}

/// Slides every line of `board` toward `direction`.
///
/// Each line is read so that the move points toward index 0, run through
/// [`slide_line`], and written back in its original orientation. When no line
/// changes, the returned board equals the input and `score_delta` is 0.
///
/// # Examples
///
/// ```
/// use twofold_engine::board::Board;
/// use twofold_engine::direction::Direction;
/// use twofold_engine::moves::apply_move;
///
/// let board = Board::from_rows([
///     [2, 2, 2, 2],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ])
/// .unwrap();
///
/// let outcome = apply_move(&board, Direction::Left);
/// assert!(outcome.changed);
/// assert_eq!(outcome.score_delta, 8);
/// assert_eq!(outcome.board.rows()[0], [4, 4, 0, 0]);
/// ```
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    let mut next = *board;
    let mut score_delta: u32 = 0;
    let mut changed = false;

    for line in 0..SIZE {
        let original: [u32; SIZE] =
            std::array::from_fn(|pos| board.get(line_cell(direction, line, pos)));
        let (slid, gained) = slide_line(original);
        if slid == original {
            continue;
        }
        changed = true;
        score_delta = score_delta.saturating_add(gained);
        for (pos, &value) in slid.iter().enumerate() {
            next = next.with_tile(line_cell(direction, line, pos), value);
        }
    }

    MoveOutcome {
        board: next,
        score_delta,
        changed,
    }
}

/// Directions in which [`apply_move`] would change the board, in
/// [`Direction::ALL`] order.
pub fn available_moves(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| apply_move(board, d).changed)
        .collect()
}

/// Compresses, merges and re-pads one line toward index 0.
///
/// Merging is a single pass with skip: a tile produced by a merge never
/// merges again in the same move, so `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`.
/// A pair of [`MAX_TILE`](crate::board::MAX_TILE) tiles stays unmerged.
/// Returns the new line and the sum of merged values, saturating at
/// `u32::MAX`.
pub fn slide_line(line: [u32; SIZE]) -> ([u32; SIZE], u32) {
    let tiles: Vec<u32> = line.into_iter().filter(|&v| v != 0).collect();
    let mut out = [0u32; SIZE];
    let mut gained: u32 = 0;
    let mut write = 0;
    let mut read = 0;

    while read < tiles.len() {
        let value = tiles[read];
        let merged = match tiles.get(read + 1) {
            Some(&next) if next == value => value.checked_mul(2),
            _ => None,
        };
        if let Some(merged) = merged {
            out[write] = merged;
            gained = gained.saturating_add(merged);
            read += 2;
        } else {
            out[write] = value;
            read += 1;
        }
        write += 1;
    }

    (out, gained)
}

// Maps position `pos` of the `line`-th line, read toward `direction`, onto a
// board cell. Position 0 is the edge tiles slide into.
fn line_cell(direction: Direction, line: usize, pos: usize) -> Cell {
    match direction {
        Direction::Left => Cell::new(line, pos),
        Direction::Right => Cell::new(line, SIZE - 1 - pos),
        Direction::Up => Cell::new(pos, line),
        Direction::Down => Cell::new(SIZE - 1 - pos, line),
    }
}
