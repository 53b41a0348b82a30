//! Quiz definitions and their publication lifecycle.

use crate::{Error, Question, QuizCode, Result};
use serde::{Deserialize, Serialize};

/// Seconds each question stays open unless the host chooses otherwise.
pub const DEFAULT_TIME_PER_QUESTION_SECS: u32 = 20;

/// Where a quiz is in its lifecycle. Only forward moves are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStatus {
    #[default]
    Draft,
    Active,
    Completed,
    Archived,
}

/// A host-authored quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub code: QuizCode,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub host_name: String,
    #[serde(default = "default_time_per_question")]
    pub time_per_question_secs: u32,
    /// Free-form prize label such as `"100 PHAR"`; parsed by the leaderboard crate.
    #[serde(default)]
    pub prize_pool: Option<String>,
    #[serde(default)]
    pub status: QuizStatus,
    pub questions: Vec<Question>,
}

fn default_time_per_question() -> u32 {
    DEFAULT_TIME_PER_QUESTION_SECS
}

impl Quiz {
    /// Creates an empty draft quiz.
    pub fn new(code: QuizCode, title: impl Into<String>, host_name: impl Into<String>) -> Self {
        Self {
            code,
            title: title.into(),
            description: None,
            host_name: host_name.into(),
            time_per_question_secs: DEFAULT_TIME_PER_QUESTION_SECS,
            prize_pool: None,
            status: QuizStatus::Draft,
            questions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }

    #[must_use]
    pub fn with_prize_pool(mut self, prize_pool: impl Into<String>) -> Self {
        self.prize_pool = Some(prize_pool.into());
        self
    }

    #[must_use]
    pub fn with_time_per_question(mut self, secs: u32) -> Self {
        self.time_per_question_secs = secs;
        self
    }

    /// Checks the quiz can be played.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidQuiz("missing title".into()));
        }
        if self.time_per_question_secs == 0 {
            return Err(Error::InvalidQuiz("time per question must be positive".into()));
        }
        if self.questions.is_empty() {
            return Err(Error::InvalidQuiz("quiz has no questions".into()));
        }
        Ok(())
    }

    /// Moves the quiz to `next`, rejecting backward or same-state moves.
    pub fn transition(&mut self, next: QuizStatus) -> Result<()> {
        if next <= self.status {
            return Err(Error::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Parses a quiz from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let quiz: Self = serde_json::from_str(json)?;
        quiz.validate()?;
        Ok(quiz)
    }
}
