use twofold_engine::board::{Board, Cell, SIZE};
use twofold_engine::direction::Direction;
use twofold_engine::game::Game;
use twofold_engine::moves::available_moves;
use twofold_engine::terminal::is_terminal;

fn checkerboard() -> [[u32; SIZE]; SIZE] {
    [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]
}

#[test]
fn full_board_without_pairs_is_terminal() {
    let b = Board::from_rows(checkerboard()).unwrap();
    assert!(is_terminal(&b));
    assert!(available_moves(&b).is_empty());
}

#[test]
fn any_single_empty_cell_reopens_the_board() {
    for r in 0..SIZE {
        for c in 0..SIZE {
            let mut rows = checkerboard();
            rows[r][c] = 0;
            let b = Board::from_rows(rows).unwrap();
            assert!(!is_terminal(&b), "empty at {:?}", Cell::new(r, c));
        }
    }
}

#[test]
fn any_single_adjacent_pair_reopens_the_board() {
    for r in 0..SIZE {
        for c in 0..SIZE {
            let mut rows = checkerboard();
            // Copying the right (or left) neighbour forms exactly one horizontal pair
            let neighbour = if c + 1 < SIZE { rows[r][c + 1] } else { rows[r][c - 1] };
            rows[r][c] = neighbour;
            let b = Board::from_rows(rows).unwrap();
            assert!(!is_terminal(&b), "pair at {:?}", Cell::new(r, c));
            assert!(!available_moves(&b).is_empty());
        }
    }
}

#[test]
fn changing_a_cell_to_an_unrelated_value_stays_terminal() {
    let mut rows = checkerboard();
    rows[1][1] = 64;
    let b = Board::from_rows(rows).unwrap();
    assert!(is_terminal(&b));
}

#[test]
fn detector_agrees_with_move_simulation_during_play() {
    for seed in 0..25u64 {
        let mut game = Game::new(seed);
        let mut i = 0usize;
        while !game.is_over() && i < 2000 {
            let b = *game.board();
            assert_eq!(is_terminal(&b), available_moves(&b).is_empty());
            game.play(Direction::ALL[(i * 7 + seed as usize) % 4]);
            i += 1;
        }
        let b = *game.board();
        assert_eq!(game.is_over(), is_terminal(&b));
        assert_eq!(is_terminal(&b), available_moves(&b).is_empty());
    }
}
