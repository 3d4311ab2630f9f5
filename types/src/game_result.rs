use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one finished round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub correct: u32,
    pub total: u32,
    pub date: DateTime<Utc>,
}

impl GameResult {
    pub fn new(correct: u32, total: u32) -> Self {
        Self {
            correct,
            total,
            date: Utc::now(),
        }
    }

    /// Only the number of correct answers counts; ties are not better.
    pub fn is_better_than(&self, other: &GameResult) -> bool {
        self.correct > other.correct
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} ({})",
            self.correct,
            self.total,
            self.date.format("%d.%m.%y %H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_is_better_than_is_strict() {
        let seven = GameResult::new(7, 10);
        let other_seven = GameResult::new(7, 10);
        let five = GameResult::new(5, 10);

        assert!(seven.is_better_than(&five));
        assert!(!five.is_better_than(&seven));
        assert!(!other_seven.is_better_than(&seven));
    }

    #[test]
    fn test_default_loses_to_any_positive_score() {
        let zero = GameResult::default();
        assert!(GameResult::new(1, 10).is_better_than(&zero));
        assert!(!GameResult::new(0, 10).is_better_than(&zero));
    }

    #[test]
    fn test_display() {
        let result = GameResult {
            correct: 9,
            total: 10,
            date: Utc.with_ymd_and_hms(2024, 11, 28, 18, 5, 0).unwrap(),
        };
        assert_eq!(result.to_string(), "9/10 (28.11.24 18:05)");
    }
}
