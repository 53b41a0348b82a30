use crate::{Error, PlayerId, Result};
use serde::{Deserialize, Serialize};

/// A quiz participant and their running score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
}

impl Player {
    /// Creates a player with a fresh id and a zero score.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_id(PlayerId::new(), name, 0)
    }

    /// Creates a player from known parts.
    pub fn with_id(id: PlayerId, name: impl Into<String>, score: i64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidPlayer("display name is empty".into()));
        }
        Ok(Self { id, name, score })
    }

    /// Returns a copy with `points` added to the score.
    #[must_use]
    pub fn with_points(&self, points: i64) -> Self {
        Self {
            score: self.score.saturating_add(points),
            ..self.clone()
        }
    }
}
