//! Simulated opponents.
//!
//! Until a real server broadcasts other players' progress, the lobby and the
//! live view are populated from here: mock players trickle into the lobby and
//! everyone except the local player gains a random amount on each drift tick.

use crate::error::SessionResult;
use pharosquiz_leaderboard::Standings;
use pharosquiz_types::{Player, PlayerId};
use rand::Rng;

/// Source of fake participants and score drift.
#[derive(Debug)]
pub struct Simulator<R> {
    rng: R,
    max_drift: i64,
    joined: usize,
}

impl<R: Rng> Simulator<R> {
    /// `max_drift` is the exclusive upper bound of one drift step.
    pub fn new(rng: R, max_drift: i64) -> Self {
        Self {
            rng,
            max_drift,
            joined: 0,
        }
    }

    /// Next mock player to join.
    pub fn next_joiner(&mut self) -> SessionResult<Player> {
        self.joined += 1;
        Ok(Player::new(format!("Player{}", self.joined))?)
    }

    /// Random non-negative gains for everyone but `local`.
    pub fn drift(&mut self, standings: &Standings, local: PlayerId) -> Vec<(PlayerId, i64)> {
        standings
            .iter()
            .filter(|entry| entry.player.id != local)
            .map(|entry| {
                let gain = if self.max_drift > 0 {
                    self.rng.gen_range(0..self.max_drift)
                } else {
                    0
                };
                (entry.player.id, gain)
            })
            .collect()
    }
}
