//! Pre-game lobby.

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::session::QuizSession;
use pharosquiz_leaderboard::Standings;
use pharosquiz_types::{Player, PlayerId, Quiz, QuizCode};
use tracing::info;

/// Default maximum number of players in a lobby.
pub const DEFAULT_LOBBY_CAPACITY: usize = 10;

/// Players gathered for a quiz that has not started yet.
#[derive(Debug, Clone)]
pub struct Lobby {
    quiz: Quiz,
    capacity: usize,
    players: Vec<Player>,
}

impl Lobby {
    /// Opens a lobby for a playable quiz.
    pub fn new(quiz: Quiz, capacity: usize) -> SessionResult<Self> {
        quiz.validate()?;
        Ok(Self {
            quiz,
            capacity,
            players: Vec::new(),
        })
    }

    #[must_use]
    pub fn code(&self) -> QuizCode {
        self.quiz.code
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.players.len() >= self.capacity
    }

    #[must_use]
    pub fn contains(&self, id: &PlayerId) -> bool {
        self.players.iter().any(|p| p.id == *id)
    }

    /// Adds a player. Scores are reset to zero on entry.
    pub fn join(&mut self, player: Player) -> SessionResult<()> {
        if self.contains(&player.id) {
            return Err(SessionError::DuplicatePlayer(player.id));
        }
        if self.is_full() {
            return Err(SessionError::LobbyFull(self.capacity));
        }
        info!(code = %self.quiz.code, player = %player.name, "player joined");
        self.players.push(Player { score: 0, ..player });
        Ok(())
    }

    /// Removes a player; returns whether they were present.
    pub fn leave(&mut self, id: &PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != *id);
        before != self.players.len()
    }

    /// Everyone tied on zero.
    #[must_use]
    pub fn standings(&self) -> Standings {
        Standings::from_players(&self.players)
    }

    /// Closes the lobby and starts play.
    pub fn into_session(
        self,
        local_player: PlayerId,
        config: SessionConfig,
    ) -> SessionResult<QuizSession> {
        QuizSession::new(self.quiz, self.players, local_player, config)
    }
}
