use twofold_ai::create_strategy;
use twofold_engine::game::{Game, MoveStatus};

fn play_out(name: &str, seed: u64) -> (u32, u32, u32) {
    let mut strategy = create_strategy(name, seed).expect("known strategy");
    let mut game = Game::new(seed);
    while let Some(direction) = strategy.choose(game.board()) {
        let report = game.play(direction);
        assert_eq!(report.status, MoveStatus::Accepted, "strategies only pick useful moves");
    }
    assert!(game.is_over());
    (game.score(), game.board().max_tile(), game.moves_made())
}

#[test]
fn strategies_play_games_to_the_end() {
    for name in ["baseline", "random"] {
        for seed in 0..5 {
            let (_, max_tile, moves) = play_out(name, seed);
            assert!(moves > 0);
            assert!(max_tile >= 2);
        }
    }
}

#[test]
fn strategy_games_are_reproducible() {
    for name in ["baseline", "random"] {
        assert_eq!(play_out(name, 99), play_out(name, 99));
    }
}

#[test]
fn baseline_outscores_random_on_average() {
    let total = |name: &str| -> u64 { (0..20).map(|s| play_out(name, s).0 as u64).sum() };
    assert!(total("baseline") > total("random"));
}
