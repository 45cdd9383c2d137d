use crate::board::{Board, MAX_TILE, SIZE};

/// Whether no move can change `board`: every cell is occupied and no two
/// horizontally or vertically adjacent cells hold the same mergeable value.
/// Adjacent [`MAX_TILE`] tiles do not count, since they never merge.
///
/// An empty cell or an adjacent equal pair always lets some direction slide
/// or merge, so this scan needs no move simulation.
///
/// # Examples
///
/// ```
/// use twofold_engine::board::Board;
/// use twofold_engine::terminal::is_terminal;
///
/// let stuck = Board::from_rows([
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
/// ])
/// .unwrap();
/// assert!(is_terminal(&stuck));
/// assert!(!is_terminal(&Board::empty()));
/// ```
pub fn is_terminal(board: &Board) -> bool {
    let rows = board.rows();
    for r in 0..SIZE {
        for c in 0..SIZE {
            let value = rows[r][c];
            if value == 0 {
                return false;
            }
            if value == MAX_TILE {
                continue;
            }
            if c + 1 < SIZE && rows[r][c + 1] == value {
                return false;
            }
            if r + 1 < SIZE && rows[r + 1][c] == value {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_pair_keeps_game_alive() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 16, 32]]).unwrap();
        assert!(!is_terminal(&board));
    }

    #[test]
    fn largest_tile_pair_does_not_keep_game_alive() {
        let board = Board::from_rows([[MAX_TILE, MAX_TILE, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
        assert!(is_terminal(&board));
        assert!(crate::moves::available_moves(&board).is_empty());
    }

    #[test]
    fn pair_on_last_row_is_detected() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [8, 16, 32, 32]]).unwrap();
        assert!(!is_terminal(&board));
    }
}
