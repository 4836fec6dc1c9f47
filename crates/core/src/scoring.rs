//! Scoring module - line clear points, level and speed curve
//!
//! - Line clears: `LINE_SCORES[rows] * level` (100 / 300 / 500 / 800).
//! - Drops: 2 points per row for a hard drop, 1 for a soft drop.
//! - Level: one level per 10 lines, starting at 1.
//! - Gravity: 1000ms at level 1, 100ms faster per level, never below 100ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL,
    LINE_SCORES, SOFT_DROP_POINTS_PER_ROW, START_LEVEL,
};

/// Points for clearing `rows` rows at once at `level`.
///
/// More than four rows can only happen on hand-built boards; they score as four.
pub fn line_clear_score(rows: usize, level: u32) -> u32 {
    let base = match rows {
        0 => return 0,
        n => LINE_SCORES[n.min(LINE_SCORES.len() - 1)],
    };
    base.saturating_mul(level)
}

/// Drop points for `rows` rows of descent.
pub fn drop_score(rows: u32, is_hard_drop: bool) -> u32 {
    let per_row = if is_hard_drop {
        HARD_DROP_POINTS_PER_ROW
    } else {
        SOFT_DROP_POINTS_PER_ROW
    };
    rows.saturating_mul(per_row)
}

/// Level for a running total of cleared lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval for a level (milliseconds per row).
pub fn drop_interval_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(START_LEVEL);
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_at_level_one() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(2, 1), 300);
        assert_eq!(line_clear_score(3, 1), 500);
        assert_eq!(line_clear_score(4, 1), 800);
    }

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(line_clear_score(1, 3), 300);
        assert_eq!(line_clear_score(4, 5), 4000);
    }

    #[test]
    fn test_oversized_clear_scores_as_four() {
        assert_eq!(line_clear_score(6, 2), 1600);
    }

    #[test]
    fn test_drop_scores() {
        assert_eq!(drop_score(10, false), 10);
        assert_eq!(drop_score(10, true), 20);
        assert_eq!(drop_score(0, true), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(20), 3);
        assert_eq!(level_for_lines(30), 4);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(3), 800);
        assert_eq!(drop_interval_ms(4), 700);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(50), 100);
    }

    #[test]
    fn test_drop_interval_never_increases() {
        let mut prev = drop_interval_ms(1);
        for level in 2..40 {
            let cur = drop_interval_ms(level);
            assert!(cur <= prev);
            prev = cur;
        }
    }
}
