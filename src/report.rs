use std::{fmt, time::Duration};

use common::search::SearchStats;

/// The summary printed at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub games_played: u64,
    pub solutions_found: usize,
    pub elapsed_ms: u128,
}

impl Report {
    pub fn new(stats: &SearchStats, elapsed: Duration) -> Self {
        Report {
            games_played: stats.games_played,
            solutions_found: stats.solutions_found(),
            // whole milliseconds, rounded down
            elapsed_ms: elapsed.as_millis(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games played:    {:6}", self.games_played)?;
        writeln!(f, "Solutions found: {:6}", self.solutions_found)?;
        writeln!(f, "Time elapsed:    {:6}ms", self.elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_layout() {
        let report = Report {
            games_played: 137846,
            solutions_found: 1550,
            elapsed_ms: 42,
        };

        assert_eq!(
            report.to_string(),
            "Games played:    137846\nSolutions found:   1550\nTime elapsed:        42ms\n"
        );
    }

    #[test]
    fn test_wide_numbers_are_not_cut() {
        let report = Report {
            games_played: 12345678,
            solutions_found: 0,
            elapsed_ms: 1234567,
        };

        assert_eq!(
            report.to_string(),
            "Games played:    12345678\nSolutions found:      0\nTime elapsed:    1234567ms\n"
        );
    }

    #[test]
    fn test_elapsed_time_is_truncated() {
        let stats = SearchStats {
            games_played: 3,
            solutions: vec![vec![]],
        };
        let report = Report::new(&stats, Duration::from_micros(1_999_999));

        assert_eq!(report.elapsed_ms, 1999);
        assert_eq!(report.games_played, 3);
        assert_eq!(report.solutions_found, 1);
    }
}
