//! Turns discrete input commands and wall-clock time into engine calls.
//!
//! The engine never schedules itself. The driver owns the single pending
//! gravity tick and fires it from [`Driver::poll`] once its deadline passes.

use std::time::Instant;

use crate::config::Timing;
use crate::game::{Game, LockReport, Snapshot, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    TogglePause,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// A move or rotation; `true` when it was committed.
    Shifted(bool),
    Dropped(Step),
    /// `true` when the pause flag flipped.
    PauseToggled(bool),
    Restarted,
}

impl Response {
    /// Whether the command changed anything a renderer would show.
    pub fn changed(&self) -> bool {
        match self {
            Response::Shifted(moved) | Response::PauseToggled(moved) => *moved,
            Response::Dropped(step) => *step != Step::Rejected,
            Response::Restarted => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledTick {
    due: Instant,
}

#[derive(Debug)]
pub struct Driver {
    game: Game,
    timing: Timing,
    pending: Option<ScheduledTick>,
    last_lock: Option<LockReport>,
}

impl Driver {
    pub fn new(game: Game, timing: Timing, now: Instant) -> Self {
        let mut driver = Self {
            game,
            timing,
            pending: None,
            last_lock: None,
        };
        driver.schedule(now);
        driver
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Most recent lock that happened in this session.
    pub fn last_lock(&self) -> Option<LockReport> {
        self.last_lock
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|tick| tick.due)
    }

    pub fn cancel_tick(&mut self) {
        self.pending = None;
    }

    fn schedule(&mut self, now: Instant) {
        let interval = self
            .timing
            .interval(self.game.level(), self.game.is_paused());
        self.pending = Some(ScheduledTick {
            due: now + interval,
        });
    }

    fn record(&mut self, step: Step) {
        if let Step::Locked(report) = step {
            self.last_lock = Some(report);
        }
    }

    pub fn handle(&mut self, command: Command, now: Instant) -> Response {
        match command {
            Command::MoveLeft => Response::Shifted(self.game.try_move(-1, 0)),
            Command::MoveRight => Response::Shifted(self.game.try_move(1, 0)),
            Command::Rotate => Response::Shifted(self.game.rotate()),
            Command::SoftDrop => {
                let step = self.game.soft_drop();
                self.record(step);
                Response::Dropped(step)
            }
            Command::HardDrop => {
                let step = self.game.hard_drop();
                self.record(step);
                Response::Dropped(step)
            }
            Command::TogglePause => Response::PauseToggled(self.game.toggle_pause()),
            Command::Restart => {
                // The old session's tick must never fire against the new one.
                self.cancel_tick();
                self.game.reset();
                self.last_lock = None;
                self.schedule(now);
                Response::Restarted
            }
        }
    }

    /// Fires the pending tick if it is due. A tick that leaves the game over
    /// is not rescheduled; only a restart starts gravity again.
    pub fn poll(&mut self, now: Instant) -> Option<Step> {
        let tick = self.pending?;
        if now < tick.due {
            return None;
        }
        self.pending = None;
        let step = self.game.tick();
        self.record(step);
        if !self.game.is_game_over() {
            self.schedule(now);
        }
        Some(step)
    }
}
