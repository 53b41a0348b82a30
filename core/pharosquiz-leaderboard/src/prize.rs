//! Podium prize distribution.
//!
//! Shares are expressed in basis points of the pool. Tied players occupy as
//! many podium places as there are of them and split the combined share of
//! those places evenly. Integer remainders are never paid out; they are
//! reported as `undistributed` so the caller can return them to the host.

use crate::error::{PrizeError, PrizeResult};
use crate::standings::Standings;
use pharosquiz_types::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One whole pool, in basis points.
pub const BASIS_POINTS: u32 = 10_000;

/// A prize pool such as `100 PHAR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizePool {
    pub amount: u64,
    pub token: String,
}

impl PrizePool {
    pub fn new(amount: u64, token: impl Into<String>) -> PrizeResult<Self> {
        let token = token.into();
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(PrizeError::InvalidPrizePool(format!("bad token symbol {token:?}")));
        }
        Ok(Self { amount, token })
    }

    /// Parses `"<amount> <TOKEN>"`.
    pub fn parse(label: &str) -> PrizeResult<Self> {
        let mut parts = label.split_whitespace();
        let (Some(amount), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(PrizeError::InvalidPrizePool(format!(
                "expected \"<amount> <token>\", got {label:?}"
            )));
        };
        let amount = amount
            .parse()
            .map_err(|_| PrizeError::InvalidPrizePool(format!("bad amount {amount:?}")))?;
        Self::new(amount, token)
    }
}

impl fmt::Display for PrizePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.token)
    }
}

impl FromStr for PrizePool {
    type Err = PrizeError;

    fn from_str(s: &str) -> PrizeResult<Self> {
        Self::parse(s)
    }
}

/// Per-place shares of the pool, first place first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct PrizeSplit(Vec<u32>);

impl PrizeSplit {
    /// Builds a split; the shares must add up to [`BASIS_POINTS`].
    pub fn new(shares: Vec<u32>) -> PrizeResult<Self> {
        if shares.is_empty() {
            return Err(PrizeError::InvalidSplit("no places".into()));
        }
        let total: u64 = shares.iter().map(|&s| u64::from(s)).sum();
        if total != u64::from(BASIS_POINTS) {
            return Err(PrizeError::InvalidSplit(format!(
                "shares sum to {total}, expected {BASIS_POINTS}"
            )));
        }
        Ok(Self(shares))
    }

    /// Number of paid places.
    #[must_use]
    pub fn places(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn shares(&self) -> &[u32] {
        &self.0
    }
}

impl Default for PrizeSplit {
    /// 50% / 30% / 20% for the top three.
    fn default() -> Self {
        Self(vec![5_000, 3_000, 2_000])
    }
}

impl TryFrom<Vec<u32>> for PrizeSplit {
    type Error = PrizeError;

    fn try_from(shares: Vec<u32>) -> PrizeResult<Self> {
        Self::new(shares)
    }
}

impl From<PrizeSplit> for Vec<u32> {
    fn from(split: PrizeSplit) -> Self {
        split.0
    }
}

/// The amount owed to one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeAward {
    pub player_id: PlayerId,
    pub name: String,
    pub rank: u32,
    pub amount: u64,
}

/// Result of splitting a pool over final standings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Distribution {
    pub awards: Vec<PrizeAward>,
    /// Pool amount left over from rounding or unfilled places.
    pub undistributed: u64,
}

impl Distribution {
    #[must_use]
    pub fn total_awarded(&self) -> u64 {
        self.awards.iter().map(|a| a.amount).sum()
    }

    #[must_use]
    pub fn award_for(&self, id: &PlayerId) -> Option<&PrizeAward> {
        self.awards.iter().find(|a| a.player_id == *id)
    }
}

/// Splits `pool` over the podium of `standings`.
///
/// Players with a score of zero or less are never paid; their places' share
/// stays undistributed.
#[must_use]
pub fn distribute(standings: &Standings, pool: &PrizePool, split: &PrizeSplit) -> Distribution {
    let mut awards = Vec::new();
    let mut paid: u64 = 0;

    let entries = standings.as_slice();
    let mut start = 0;
    while start < entries.len() && start < split.places() {
        let group_rank = entries[start].rank;
        let end = entries[start..]
            .iter()
            .position(|p| p.rank != group_rank)
            .map_or(entries.len(), |offset| start + offset);
        let group = &entries[start..end];

        // The group occupies places start..end; only those inside the split pay.
        let shares: u64 = split.shares()[start..end.min(split.places())]
            .iter()
            .map(|&s| u64::from(s))
            .sum();

        if group[0].player.score > 0 && shares > 0 {
            let group_amount = share_of(pool.amount, shares);
            let each = group_amount / group.len() as u64;
            for entry in group {
                awards.push(PrizeAward {
                    player_id: entry.player.id,
                    name: entry.player.name.clone(),
                    rank: entry.rank,
                    amount: each,
                });
            }
            paid += each * group.len() as u64;
            debug!(rank = group_rank, players = group.len(), each, "podium group paid");
        }
        start = end;
    }

    Distribution {
        awards,
        undistributed: pool.amount - paid,
    }
}

fn share_of(amount: u64, basis_points: u64) -> u64 {
    let value = u128::from(amount) * u128::from(basis_points) / u128::from(BASIS_POINTS);
    // basis_points <= BASIS_POINTS, so value <= amount
    u64::try_from(value).unwrap_or(amount)
}
