//! Session and lobby configuration.
//!
//! Both structs deserialize with per-field defaults, so a config file only
//! needs the keys it wants to change.

use crate::lobby::DEFAULT_LOBBY_CAPACITY;
use crate::scoring::ScoringRule;
use pharosquiz_leaderboard::PrizeSplit;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a live session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How correct answers are scored.
    pub scoring: ScoringRule,
    /// How long the correct answer stays on screen before the next question (ms).
    pub reveal_delay_ms: u64,
    /// Whether to drift other players' scores while playing.
    pub simulate_opponents: bool,
    /// Period of simulated score drift (ms).
    pub drift_interval_ms: u64,
    /// Upper bound (exclusive) of one simulated drift step.
    pub max_drift: i64,
    /// How the prize pool is split over the podium.
    pub prize_split: PrizeSplit,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringRule::default(),
            reveal_delay_ms: 2_000,
            simulate_opponents: true,
            drift_interval_ms: 5_000,
            max_drift: 30,
            prize_split: PrizeSplit::default(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    #[must_use]
    pub fn drift_interval(&self) -> Duration {
        Duration::from_millis(self.drift_interval_ms.max(1))
    }
}

/// Configuration for the pre-game lobby.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LobbyConfig {
    /// Maximum roster size.
    pub capacity: usize,
    /// Whether simulated players join while waiting.
    pub simulate_joins: bool,
    /// Period between simulated joins (ms).
    pub join_interval_ms: u64,
    /// Seconds counted down between "start" and the first question.
    pub start_countdown_secs: u32,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_LOBBY_CAPACITY,
            simulate_joins: true,
            join_interval_ms: 5_000,
            start_countdown_secs: 5,
        }
    }
}

impl LobbyConfig {
    #[must_use]
    pub fn join_interval(&self) -> Duration {
        Duration::from_millis(self.join_interval_ms.max(1))
    }
}
