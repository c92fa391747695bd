// Shared board/timing constants.
use std::time::Duration;

pub const BOARD_W: usize = 10;
pub const BOARD_H: usize = 20;

// Anchor of the shape-local origin for every freshly spawned piece.
pub const SPAWN_X: i32 = 3;
pub const SPAWN_Y: i32 = 0;

pub const BASE_TICK_MS: u64 = 450;
pub const PAUSED_TICK_MS: u64 = 50;
pub const MIN_TICK_MS: u64 = 100;
pub const TICK_STEP_MS: u64 = 35;
pub const LINES_PER_LEVEL: u64 = 10;

pub const CELL_W: usize = 2; // each block is drawn two characters wide
pub const PLAY_W: usize = BOARD_W * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = BOARD_H + 2; // inner height plus ceiling/floor
pub const SIDEBAR_W: u16 = 26;
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + SIDEBAR_W + 2;

/// Gravity timing used by the driver to schedule ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Gravity interval at level 1.
    pub base: Duration,
    /// Keep-alive interval while paused; paused ticks never advance play.
    pub paused: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(BASE_TICK_MS),
            paused: Duration::from_millis(PAUSED_TICK_MS),
        }
    }
}

impl Timing {
    /// Interval until the next tick: `max(100, base - (level - 1) * 35)` ms,
    /// or the fixed paused interval.
    pub fn interval(&self, level: u64, paused: bool) -> Duration {
        if paused {
            return self.paused;
        }
        let base = u64::try_from(self.base.as_millis()).unwrap_or(u64::MAX);
        let speedup = level.saturating_sub(1).saturating_mul(TICK_STEP_MS);
        Duration::from_millis(base.saturating_sub(speedup).max(MIN_TICK_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_speeds_up_per_level_until_floor() {
        let timing = Timing::default();
        assert_eq!(timing.interval(1, false), Duration::from_millis(450));
        assert_eq!(timing.interval(2, false), Duration::from_millis(415));
        assert_eq!(timing.interval(10, false), Duration::from_millis(135));
        assert_eq!(timing.interval(11, false), Duration::from_millis(100));
        assert_eq!(timing.interval(500, false), Duration::from_millis(100));
    }

    #[test]
    fn paused_interval_ignores_level() {
        let timing = Timing::default();
        assert_eq!(timing.interval(1, true), Duration::from_millis(50));
        assert_eq!(timing.interval(30, true), Duration::from_millis(50));
    }
}
