//! Error types for the session layer.

use pharosquiz_leaderboard::PrizeError;
use pharosquiz_types::PlayerId;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while running a quiz.
///
/// Answering a question twice is not an error; it yields
/// [`Submission::Ignored`](crate::Submission::Ignored).
#[derive(Debug, Error)]
pub enum SessionError {
    /// Quiz or player data failed validation.
    #[error("invalid quiz data: {0}")]
    Quiz(#[from] pharosquiz_types::Error),

    /// Prize pool or split is malformed.
    #[error("prize error: {0}")]
    Prize(#[from] PrizeError),

    /// Countdowns need at least one second.
    #[error("countdown duration must be positive")]
    InvalidDuration,

    /// Selected option does not exist on the current question.
    #[error("option {index} out of range for {options} options")]
    OptionOutOfRange { index: usize, options: usize },

    /// Tried to advance before the current question was locked in.
    #[error("current question has not been answered")]
    RoundNotLocked,

    /// The question sequence is exhausted.
    #[error("session already finished")]
    SessionFinished,

    /// Score change for a player not in the roster.
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// A player with this id is already present.
    #[error("duplicate player: {0}")]
    DuplicatePlayer(PlayerId),

    /// The local player must be part of the roster.
    #[error("local player {0} is not in the roster")]
    LocalPlayerMissing(PlayerId),

    /// Lobby is at capacity.
    #[error("lobby is full ({0} players)")]
    LobbyFull(usize),

    /// The driver task is gone.
    #[error("channel closed")]
    ChannelClosed,

    /// Lobby was torn down before the quiz started.
    #[error("cancelled before start")]
    Cancelled,
}
