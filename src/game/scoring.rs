use crate::config::LINES_PER_LEVEL;

/// Points for `cleared` simultaneous rows, before the level multiplier.
pub fn base_points(cleared: usize) -> u64 {
    match cleared {
        1 => 100,
        2 => 300,
        3 => 500,
        4 => 800,
        _ => 0,
    }
}

/// Level derived from the running cleared-line count; never below 1.
pub fn level_for_lines(lines: u64) -> u64 {
    (lines / LINES_PER_LEVEL + 1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_points_table() {
        assert_eq!(base_points(0), 0);
        assert_eq!(base_points(1), 100);
        assert_eq!(base_points(2), 300);
        assert_eq!(base_points(3), 500);
        assert_eq!(base_points(4), 800);
        assert_eq!(base_points(5), 0);
    }

    #[test]
    fn level_steps_every_ten_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(100), 11);
    }
}
