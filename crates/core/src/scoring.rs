//! Scoring module - line clear points and level progression
//!
//! Points are a flat table lookup by rows cleared in one lock; there is no
//! level multiplier. Level is always recomputed from the total line count.

/// Points for clearing `rows` rows with a single lock.
///
/// `table[n - 1]` holds the points for `n` rows. Zero rows score nothing;
/// more rows than the table covers score its last entry.
pub fn line_clear_points(rows: usize, table: &[u32]) -> u32 {
    if rows == 0 {
        return 0;
    }
    table
        .get(rows - 1)
        .or_else(|| table.last())
        .copied()
        .unwrap_or(0)
}

/// Level reached after clearing `lines` lines in total.
///
/// A `lines_per_level` of zero means the level never advances.
pub fn level_for_lines(lines: u32, lines_per_level: u32) -> u32 {
    lines.checked_div(lines_per_level).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LINE_SCORES;

    #[test]
    fn test_line_clear_points_table() {
        assert_eq!(line_clear_points(0, &LINE_SCORES), 0);
        assert_eq!(line_clear_points(1, &LINE_SCORES), 100);
        assert_eq!(line_clear_points(2, &LINE_SCORES), 300);
        assert_eq!(line_clear_points(3, &LINE_SCORES), 500);
        assert_eq!(line_clear_points(4, &LINE_SCORES), 800);
    }

    #[test]
    fn test_rows_beyond_table_score_last_entry() {
        assert_eq!(line_clear_points(5, &LINE_SCORES), 800);
        assert_eq!(line_clear_points(1, &[]), 0);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0, 10), 0);
        assert_eq!(level_for_lines(9, 10), 0);
        assert_eq!(level_for_lines(10, 10), 1);
        assert_eq!(level_for_lines(25, 10), 2);
        assert_eq!(level_for_lines(25, 0), 0);
    }
}
