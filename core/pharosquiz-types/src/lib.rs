//! Core type definitions for PharosQuiz.
//!
//! This crate defines the plain data shared by every other crate:
//! - Player and question identifiers (UUID v7)
//! - Six-digit quiz join codes
//! - Players, questions and quiz definitions
//! - Immutable answer events
//!
//! Ranking, timing and scoring live in `pharosquiz-leaderboard` and
//! `pharosquiz-session`, not here.

mod answer;
mod code;
mod ids;
mod player;
mod question;
mod quiz;

pub use answer::AnswerEvent;
pub use code::QuizCode;
pub use ids::{PlayerId, QuestionId};
pub use player::Player;
pub use question::{Question, QuestionKind};
pub use quiz::{Quiz, QuizStatus, DEFAULT_TIME_PER_QUESTION_SECS};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid quiz code: {0}")]
    InvalidQuizCode(String),

    #[error("invalid player: {0}")]
    InvalidPlayer(String),

    #[error("invalid question: {0}")]
    InvalidQuestion(String),

    #[error("invalid quiz: {0}")]
    InvalidQuiz(String),

    #[error("invalid status transition from {from:?} to {to:?}")]
    InvalidStatusTransition { from: QuizStatus, to: QuizStatus },
}
