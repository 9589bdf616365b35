//! Elapsed-time score

use serde::{Deserialize, Serialize};

use crate::consts::SCORE_INTERVAL_MS;

/// Score in whole seconds of play, plus the carried sub-second remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u64,
    pub accumulator_ms: u32,
}

impl ScoreState {
    /// Add `dt_ms` of play time. Returns the points gained this call.
    pub fn accumulate(&mut self, dt_ms: u32) -> u64 {
        let total = self.accumulator_ms as u64 + dt_ms as u64;
        let gained = total / SCORE_INTERVAL_MS as u64;
        self.accumulator_ms = (total % SCORE_INTERVAL_MS as u64) as u32;
        self.score += gained;
        gained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_remainder_carries() {
        let mut score = ScoreState::default();
        assert_eq!(score.accumulate(700), 0);
        assert_eq!(score.accumulate(700), 1);
        assert_eq!(score.accumulator_ms, 400);
        assert_eq!(score.accumulate(600), 1);
        assert_eq!(score.accumulator_ms, 0);
        assert_eq!(score.score, 2);
    }

    #[test]
    fn test_ten_ticks_equal_one_second() {
        let mut split = ScoreState::default();
        for _ in 0..10 {
            split.accumulate(100);
        }
        let mut whole = ScoreState::default();
        whole.accumulate(1000);
        assert_eq!(split, whole);
        assert_eq!(whole.score, 1);
    }

    #[test]
    fn test_long_tick_counts_every_second() {
        let mut score = ScoreState::default();
        assert_eq!(score.accumulate(2500), 2);
        assert_eq!(score.accumulator_ms, 500);
    }

    proptest! {
        #[test]
        fn prop_score_independent_of_split(dts in proptest::collection::vec(0u32..3000, 0..200)) {
            let mut score = ScoreState::default();
            for dt in &dts {
                score.accumulate(*dt);
            }
            let total: u64 = dts.iter().map(|&d| d as u64).sum();
            prop_assert_eq!(score.score, total / 1000);
            prop_assert_eq!(score.accumulator_ms as u64, total % 1000);
        }
    }
}
