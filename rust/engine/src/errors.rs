use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid direction: {0:?} (expected up, down, left or right)")]
    InvalidDirection(String),
    #[error("Invalid tile {value} at row {row}, col {col}: tiles must be 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },
}
