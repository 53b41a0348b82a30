//! Immutable leaderboard snapshots.

use crate::rank::{rank, RankedPlayer};
use pharosquiz_types::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A ranked, read-only view of a roster at one moment.
///
/// Cloning is cheap; every score change produces a new snapshot instead of
/// mutating an existing one, so a reader holding an old snapshot never sees
/// a half-applied update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RankedPlayer>", into = "Vec<RankedPlayer>")]
pub struct Standings(Arc<[RankedPlayer]>);

impl Standings {
    /// Ranks `players` into a new snapshot.
    #[must_use]
    pub fn from_players(players: &[Player]) -> Self {
        Self(rank(players).into())
    }

    #[must_use]
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedPlayer> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[RankedPlayer] {
        &self.0
    }

    /// Returns the first `n` entries in rank order.
    #[must_use]
    pub fn top(&self, n: usize) -> &[RankedPlayer] {
        &self.0[..n.min(self.0.len())]
    }

    /// Returns the entry for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &PlayerId) -> Option<&RankedPlayer> {
        self.0.iter().find(|p| p.player.id == *id)
    }

    /// Returns the rank of `id`, if present.
    #[must_use]
    pub fn rank_of(&self, id: &PlayerId) -> Option<u32> {
        self.get(id).map(|p| p.rank)
    }

    /// Returns the zero-based list position of `id`, if present.
    #[must_use]
    pub fn position_of(&self, id: &PlayerId) -> Option<usize> {
        self.0.iter().position(|p| p.player.id == *id)
    }

    /// Strips ranks, returning players in rank order.
    #[must_use]
    pub fn players(&self) -> Vec<Player> {
        self.0.iter().map(|p| p.player.clone()).collect()
    }
}

impl Default for Standings {
    fn default() -> Self {
        Self::empty()
    }
}

/// Carried ranks and order are discarded; the players are ranked afresh.
impl From<Vec<RankedPlayer>> for Standings {
    fn from(ranked: Vec<RankedPlayer>) -> Self {
        let players: Vec<Player> = ranked.into_iter().map(|entry| entry.player).collect();
        Self::from_players(&players)
    }
}

impl From<Standings> for Vec<RankedPlayer> {
    fn from(standings: Standings) -> Self {
        standings.0.to_vec()
    }
}
