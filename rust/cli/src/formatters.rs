//! Board and result formatters for terminal display.
//!
//! Pure functions that render engine state as text. Nothing here writes to a
//! stream, so every command formats the same way.
//!
//! ## Example
//!
//! ```rust
//! use twofold_engine::board::Board;
//! use twofold_cli::formatters::format_board;
//!
//! let board = Board::from_rows([
//!     [2, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 2048],
//! ])
//! .unwrap();
//! let text = format_board(&board);
//! assert_eq!(text.lines().count(), 4);
//! assert!(text.lines().last().unwrap().ends_with("2048"));
//! ```

use twofold_engine::board::Board;
use twofold_engine::game::{MoveReport, MoveStatus};

/// Render the board as a right-aligned grid, one row per line, with `.` for
/// empty cells. Column width fits the largest tile.
pub fn format_board(board: &Board) -> String {
    let width = board.max_tile().to_string().len().max(1);
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&v| {
                    let cell = if v == 0 { ".".to_string() } else { v.to_string() };
                    format!("{:>width$}", cell, width = width)
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line summary of a processed move.
pub fn format_move_report(report: &MoveReport) -> String {
    match report.status {
        MoveStatus::Accepted => {
            let spawn = report
                .spawned
                .map(|s| format!(", spawned {} at ({},{})", s.value, s.cell.row, s.cell.col))
                .unwrap_or_default();
            format!(
                "{}: +{} (score {}){}",
                report.direction, report.score_delta, report.snapshot.score, spawn
            )
        }
        MoveStatus::NoChange => format!("{}: nothing moved", report.direction),
        MoveStatus::GameOver => format!("{}: game is over", report.direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twofold_engine::board::Cell;
    use twofold_engine::direction::Direction;
    use twofold_engine::game::GameSnapshot;
    use twofold_engine::spawn::Spawn;

    #[test]
    fn test_format_board_pads_to_widest_tile() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 128]]).unwrap();
        let text = format_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  2   .   .   .");
        assert_eq!(lines[3], "  .   .   . 128");
    }

    #[test]
    fn test_format_empty_board() {
        assert_eq!(
            format_board(&Board::empty()),
            ". . . .\n. . . .\n. . . .\n. . . ."
        );
    }

    #[test]
    fn test_format_move_report_variants() {
        let snapshot = GameSnapshot {
            board: Board::empty(),
            score: 12,
            game_over: false,
        };
        let accepted = MoveReport {
            direction: Direction::Left,
            status: MoveStatus::Accepted,
            score_delta: 4,
            spawned: Some(Spawn {
                cell: Cell::new(1, 0),
                value: 2,
            }),
            snapshot,
        };
        assert_eq!(
            format_move_report(&accepted),
            "left: +4 (score 12), spawned 2 at (1,0)"
        );

        let rejected = MoveReport {
            status: MoveStatus::NoChange,
            score_delta: 0,
            spawned: None,
            ..accepted
        };
        assert_eq!(format_move_report(&rejected), "left: nothing moved");
    }
}
