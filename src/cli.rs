use std::time::Duration;

use blockfall::Game;
use blockfall::Timing;
use blockfall::config::{BASE_TICK_MS, MIN_TICK_MS, PAUSED_TICK_MS};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Falling-block puzzle for the terminal", long_about = None)]
pub struct Args {
    /// Gravity interval at level 1, in milliseconds
    #[arg(long, default_value_t = BASE_TICK_MS, value_parser = clap::value_parser!(u64).range(MIN_TICK_MS..))]
    tick_ms: u64,
    /// Redraw interval while paused, in milliseconds
    #[arg(long, default_value_t = PAUSED_TICK_MS, value_parser = clap::value_parser!(u64).range(1..))]
    paused_tick_ms: u64,
    /// Seed for the piece sequence; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    pub fn timing(&self) -> Timing {
        Timing {
            base: Duration::from_millis(self.tick_ms),
            paused: Duration::from_millis(self.paused_tick_ms),
        }
    }

    pub fn new_game(&self) -> Game {
        match self.seed {
            Some(seed) => Game::with_seed(seed),
            None => Game::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config() {
        let args = Args::parse_from(["blockfall"]);
        assert_eq!(args.timing(), Timing::default());
        assert_eq!(args.seed, None);
    }

    #[test]
    fn tick_below_floor_is_rejected() {
        assert!(Args::try_parse_from(["blockfall", "--tick-ms", "99"]).is_err());
        let args = Args::parse_from(["blockfall", "--tick-ms", "300", "--seed", "9"]);
        assert_eq!(args.timing().base, Duration::from_millis(300));
        assert_eq!(args.seed, Some(9));
    }
}
