use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::direction::Direction;
use crate::moves::apply_move;
use crate::spawn::{spawn_tile, RandomSource, SeededSource, Spawn};
use crate::terminal::is_terminal;

/// What the session did with a requested move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveStatus {
    /// The board changed, score was added and a tile spawned
    Accepted,
    /// Nothing would slide or merge in that direction
    NoChange,
    /// The game had already ended
    GameOver,
}

/// Observable state of a session: board, score and whether play has ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub score: u32,
    pub game_over: bool,
}

/// Everything a caller needs to render the result of [`Game::play`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveReport {
    pub direction: Direction,
    pub status: MoveStatus,
    /// Merge score gained by this move (0 unless accepted)
    pub score_delta: u32,
    /// Tile placed after an accepted move
    pub spawned: Option<Spawn>,
    /// State after the move was processed
    pub snapshot: GameSnapshot,
}

impl MoveReport {
    pub fn accepted(&self) -> bool {
        self.status == MoveStatus::Accepted
    }
}

/// A single game session: owns the board, score, game-over flag and the
/// randomness used for spawns.
///
/// # Examples
///
/// ```
/// use twofold_engine::direction::Direction;
/// use twofold_engine::game::Game;
///
/// // Same seed, same opening position
/// let mut game = Game::new(42);
/// assert_eq!(game.board().tile_count(), 2);
/// assert_eq!(game.score(), 0);
///
/// for d in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
///     let report = game.play(d);
///     if report.accepted() {
///         assert_eq!(report.snapshot.score, game.score());
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Game<R: RandomSource = SeededSource> {
    /// Current tile layout
    board: Board,
    /// Sum of every merge since the last reset, saturating at `u32::MAX`
    score: u32,
    /// Set once no direction can change the board
    game_over: bool,
    /// Accepted moves since the last reset
    moves_made: u32,
    /// Randomness for spawn cell and value
    source: R,
}

impl Game<SeededSource> {
    pub fn new(seed: u64) -> Self {
        Game::with_source(SeededSource::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Starts a game on an empty board with two spawned tiles.
    pub fn with_source(source: R) -> Self {
        let mut game = Self {
            board: Board::empty(),
            score: 0,
            game_over: false,
            moves_made: 0,
            source,
        };
        game.deal_opening();
        game
    }

    /// Resumes from a known position. No tiles are spawned; the game-over
    /// flag is derived from the board.
    pub fn from_parts(board: Board, score: u32, source: R) -> Self {
        Self {
            board,
            score,
            game_over: is_terminal(&board),
            moves_made: 0,
            source,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn is_over(&self) -> bool {
        self.game_over
    }
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            score: self.score,
            game_over: self.game_over,
        }
    }

    /// Slides the board toward `direction`.
    ///
    /// A move on a finished game, or one that changes nothing, leaves the
    /// session untouched and spawns nothing. An accepted move adds its merge
    /// score, spawns one tile and re-evaluates the game-over flag.
    pub fn play(&mut self, direction: Direction) -> MoveReport {
        if self.game_over {
            tracing::debug!(%direction, "move rejected: game over");
            return self.report(direction, MoveStatus::GameOver, 0, None);
        }

        let outcome = apply_move(&self.board, direction);
        if !outcome.changed {
            tracing::debug!(%direction, "move rejected: no change");
            return self.report(direction, MoveStatus::NoChange, 0, None);
        }

        let (board, spawned) = spawn_tile(&outcome.board, &mut self.source);
        self.board = board;
        self.score = self.score.saturating_add(outcome.score_delta);
        self.moves_made += 1;
        self.game_over = is_terminal(&self.board);

        tracing::debug!(
            %direction,
            score_delta = outcome.score_delta,
            score = self.score,
            "move accepted"
        );
        if self.game_over {
            tracing::info!(
                score = self.score,
                max_tile = self.board.max_tile(),
                moves = self.moves_made,
                "game over"
            );
        }

        self.report(direction, MoveStatus::Accepted, outcome.score_delta, spawned)
    }

    /// Discards the current game and deals a fresh one from the same source.
    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.score = 0;
        self.game_over = false;
        self.moves_made = 0;
        self.deal_opening();
    }

    fn deal_opening(&mut self) {
        for _ in 0..2 {
            let (board, _) = spawn_tile(&self.board, &mut self.source);
            self.board = board;
        }
    }

    fn report(
        &self,
        direction: Direction,
        status: MoveStatus,
        score_delta: u32,
        spawned: Option<Spawn>,
    ) -> MoveReport {
        MoveReport {
            direction,
            status,
            score_delta,
            spawned,
            snapshot: self.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::ScriptedSource;

    #[test]
    fn opening_places_two_tiles() {
        let game = Game::with_source(ScriptedSource::new([0, 0], [0.1, 0.95]));
        assert_eq!(game.board().rows()[0], [2, 4, 0, 0]);
        assert!(!game.is_over());
        assert_eq!(game.moves_made(), 0);
    }

    #[test]
    fn finished_game_rejects_moves() {
        let stuck = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
        let mut game = Game::from_parts(stuck, 100, ScriptedSource::default());
        assert!(game.is_over());
        let report = game.play(Direction::Left);
        assert_eq!(report.status, MoveStatus::GameOver);
        assert_eq!(report.snapshot.board, stuck);
        assert_eq!(report.snapshot.score, 100);
    }

    #[test]
    fn score_saturates_instead_of_overflowing() {
        let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut game = Game::from_parts(board, u32::MAX - 1, ScriptedSource::default());
        let report = game.play(Direction::Left);
        assert!(report.accepted());
        assert_eq!(report.score_delta, 4);
        assert_eq!(game.score(), u32::MAX);
        assert_eq!(game.board().rows()[0][0], 4);
    }

    #[test]
    fn reset_starts_over() {
        let mut game = Game::new(5);
        for d in Direction::ALL.iter().cycle().take(20) {
            game.play(*d);
        }
        game.reset();
        assert_eq!(game.score(), 0);
        assert_eq!(game.moves_made(), 0);
        assert_eq!(game.board().tile_count(), 2);
        assert!(!game.is_over());
    }

    #[test]
    fn report_serializes_with_snake_case_status() {
        let mut game = Game::with_source(ScriptedSource::new([0, 1], [0.0, 0.0]));
        let report = game.play(Direction::Left);
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["status"], "accepted");
        assert_eq!(json["direction"], "left");
        assert_eq!(json["snapshot"]["score"], 4);
    }
}
