use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Side length of the square board.
pub const SIZE: usize = 4;

/// Largest tile a `u32` cell can hold. Two of these never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// A (row, col) coordinate on the board, both in `0..SIZE`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The 4×4 grid of tile values. Empty cells hold 0; every other cell holds a
/// power of two no smaller than 2.
///
/// Boards are small `Copy` values and every transform returns a new board,
/// so a caller never observes a half-applied move.
///
/// # Examples
///
/// ```
/// use twofold_engine::board::{Board, Cell};
///
/// let board = Board::from_rows([
///     [2, 2, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 4],
///     [0, 0, 0, 0],
/// ])
/// .expect("valid tiles");
///
/// assert_eq!(board.get(Cell::new(2, 3)), 4);
/// assert_eq!(board.empty_cells().len(), 13);
/// assert_eq!(board.tile_sum(), 8);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "[[u32; SIZE]; SIZE]", into = "[[u32; SIZE]; SIZE]")]
pub struct Board {
    /// Tile values in row-major order
    cells: [[u32; SIZE]; SIZE],
}

impl Board {
    /// A board with every cell empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows, rejecting values that are neither 0
    /// nor a power of two >= 2.
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Result<Self, GameError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GameError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    pub fn get(&self, cell: Cell) -> u32 {
        self.cells[cell.row][cell.col]
    }

    /// Returns a copy of this board with `cell` set to `value`.
    ///
    /// Crate-internal writers only ever place merged or spawned tiles, which
    /// keeps the power-of-two invariant without a re-check here.
    pub(crate) fn with_tile(mut self, cell: Cell, value: u32) -> Self {
        self.cells[cell.row][cell.col] = value;
        self
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.iter_cells()
            .filter(|&(_, value)| value == 0)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.iter_cells().filter(|&(_, value)| value != 0).count()
    }

    /// Sum of all tile values, widened so a board of maximal tiles still fits.
    pub fn tile_sum(&self) -> u64 {
        self.iter_cells().map(|(_, value)| u64::from(value)).sum()
    }

    pub fn max_tile(&self) -> u32 {
        self.iter_cells().map(|(_, value)| value).max().unwrap_or(0)
    }

    /// The board reflected left-to-right.
    pub fn mirrored_horizontally(&self) -> Self {
        let mut cells = self.cells;
        for row in cells.iter_mut() {
            row.reverse();
        }
        Self { cells }
    }

    /// The board reflected top-to-bottom.
    pub fn mirrored_vertically(&self) -> Self {
        let mut cells = self.cells;
        cells.reverse();
        Self { cells }
    }

    fn iter_cells(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &value)| (Cell::new(row, col), value))
        })
    }
}

impl TryFrom<[[u32; SIZE]; SIZE]> for Board {
    type Error = GameError;

    fn try_from(rows: [[u32; SIZE]; SIZE]) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl From<Board> for [[u32; SIZE]; SIZE] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}
