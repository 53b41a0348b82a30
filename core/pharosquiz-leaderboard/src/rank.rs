use pharosquiz_types::Player;
use serde::{Deserialize, Serialize};

/// A player annotated with their leaderboard position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub rank: u32,
}

/// Sorts a copy of `players` by score (highest first) and assigns ranks.
///
/// Equal scores share a rank; the next lower score gets its 1-based position
/// in the sorted list. The sort is stable, so tied players keep their input
/// order. `players` itself is left untouched.
#[must_use]
pub fn rank(players: &[Player]) -> Vec<RankedPlayer> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));

    let mut ranked: Vec<RankedPlayer> = Vec::with_capacity(sorted.len());
    for (position, player) in sorted.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev) if prev.player.score == player.score => prev.rank,
            _ => u32::try_from(position + 1).unwrap_or(u32::MAX),
        };
        ranked.push(RankedPlayer { player, rank });
    }
    ranked
}
