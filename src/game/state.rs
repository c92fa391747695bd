use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::scoring::{base_points, level_for_lines};
use crate::game::{Board, Piece, Snapshot, random_shape};

/// Horizontal anchor shifts tried, in order, when rotating.
const KICKS: [i32; 3] = [0, -1, 1];

/// Result of a lock: rows removed, points from the clear, and whether the
/// next spawn failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockReport {
    pub cleared: usize,
    pub points: u64,
    pub topped_out: bool,
}

/// Outcome of a drop or tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing changed (game over or paused).
    Rejected,
    /// The piece moved down without locking.
    Moved,
    Locked(LockReport),
}

/// One game session: the well, the falling piece, and the counters.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Option<Piece>,
    score: u64,
    lines: u64,
    level: u64,
    game_over: bool,
    paused: bool,
    rng: StdRng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic piece sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut game = Self {
            board: Board::new(),
            current: None,
            score: 0,
            lines: 0,
            level: 1,
            game_over: false,
            paused: false,
            rng,
        };
        game.reset();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece; `None` once the game is over.
    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn level(&self) -> u64 {
        self.level
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_frozen(&self) -> bool {
        self.game_over || self.paused
    }

    pub fn can_place(&self, piece: &Piece) -> bool {
        self.board.can_place(piece)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Empties the well, zeroes the counters and spawns a fresh piece.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.game_over = false;
        self.paused = false;
        self.spawn();
    }

    /// Places a random shape at the spawn anchor. Returns false and ends the
    /// game when the spawn cell range is blocked.
    fn spawn(&mut self) -> bool {
        let piece = Piece::spawn(random_shape(&mut self.rng));
        if self.can_place(&piece) {
            self.current = Some(piece);
            true
        } else {
            self.current = None;
            self.game_over = true;
            false
        }
    }

    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.is_frozen() {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };
        let next = current.shifted(dx, dy);
        if self.can_place(&next) {
            self.current = Some(next);
            true
        } else {
            false
        }
    }

    /// Rotates one step, trying the current anchor, then one column left,
    /// then one column right.
    pub fn rotate(&mut self) -> bool {
        if self.is_frozen() {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };
        let rotated = current.rotated();
        let kicked = KICKS
            .iter()
            .map(|&dx| rotated.shifted(dx, 0))
            .find(|candidate| self.can_place(candidate));
        match kicked {
            Some(next) => {
                self.current = Some(next);
                true
            }
            None => false,
        }
    }

    pub fn soft_drop(&mut self) -> Step {
        if self.is_frozen() {
            return Step::Rejected;
        }
        if self.try_move(0, 1) {
            self.score += 1;
            Step::Moved
        } else {
            self.lock()
        }
    }

    pub fn hard_drop(&mut self) -> Step {
        if self.is_frozen() {
            return Step::Rejected;
        }
        let mut dropped = 0;
        while self.try_move(0, 1) {
            dropped += 1;
        }
        self.score += dropped * 2;
        self.lock()
    }

    /// Gravity step. Paused ticks keep the driver alive but change nothing.
    pub fn tick(&mut self) -> Step {
        if self.is_frozen() {
            return Step::Rejected;
        }
        if self.try_move(0, 1) {
            Step::Moved
        } else {
            self.lock()
        }
    }

    /// Flips the pause flag. Has no effect after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Lowest position the current piece can fall to.
    pub fn ghost(&self) -> Option<Piece> {
        let mut ghost = self.current?;
        while self.can_place(&ghost.shifted(0, 1)) {
            ghost.y += 1;
        }
        Some(ghost)
    }

    /// Merges the piece into the well, clears full rows, then spawns the next.
    fn lock(&mut self) -> Step {
        let Some(piece) = self.current.take() else {
            return Step::Rejected;
        };
        self.board.stamp(&piece);
        let (cleared, points) = self.clear_lines();
        let topped_out = !self.spawn();
        Step::Locked(LockReport {
            cleared,
            points,
            topped_out,
        })
    }

    fn clear_lines(&mut self) -> (usize, u64) {
        let cleared = self.board.clear_full_rows();
        if cleared == 0 {
            return (0, 0);
        }
        self.lines += cleared as u64;
        self.level = level_for_lines(self.lines);
        let points = base_points(cleared) * self.level;
        self.score += points;
        (cleared, points)
    }
}
