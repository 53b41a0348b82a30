//! Point awards for correct answers.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Points a correct answer is worth under the default rule.
pub(crate) const DEFAULT_POINTS: i64 = 100;

/// How many points a locked-in answer is worth.
///
/// Incorrect and timed-out answers are always worth zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScoringRule {
    /// Same award for every correct answer regardless of speed.
    Flat { points: i64 },
    /// Linear decay from `max_points` at zero latency to `min_points` at the
    /// time limit.
    TimeWeighted { max_points: i64, min_points: i64 },
}

impl Default for ScoringRule {
    fn default() -> Self {
        Self::Flat {
            points: DEFAULT_POINTS,
        }
    }
}

impl ScoringRule {
    /// Points for an answer given `latency` against a `limit`.
    #[must_use]
    pub fn points(&self, correct: bool, latency: Duration, limit: Duration) -> i64 {
        if !correct {
            return 0;
        }
        match *self {
            Self::Flat { points } => points,
            Self::TimeWeighted {
                max_points,
                min_points,
            } => {
                let limit_ms = limit.as_millis().max(1) as i128;
                let latency_ms = (latency.as_millis() as i128).min(limit_ms);
                let span = i128::from(max_points) - i128::from(min_points);
                let lost = span * latency_ms / limit_ms;
                (i128::from(max_points) - lost) as i64
            }
        }
    }
}
