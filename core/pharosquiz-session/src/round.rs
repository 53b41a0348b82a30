//! Per-question answer state machine.
//!
//! ```text
//! Unanswered --select(i)--> Locked(answer)
//! Unanswered --time_up----> Locked(no answer)
//! Locked     --anything---> Locked            (ignored)
//! ```
//!
//! Locking also reveals the correct option; there is no separate reveal step.

use crate::error::{SessionError, SessionResult};
use crate::scoring::ScoringRule;
use pharosquiz_types::{AnswerEvent, PlayerId, Question};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// State of the current question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Unanswered,
    Locked(AnswerEvent),
}

/// Outcome of an answer attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// This attempt locked the round.
    Accepted(AnswerEvent),
    /// The round was already locked; nothing changed.
    Ignored,
}

impl Submission {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// What the player sees once a round is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub correct_option: usize,
    pub selected: Option<usize>,
    pub is_correct: bool,
    pub points: i64,
}

/// One question's worth of play for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    index: usize,
    correct_option: usize,
    state: RoundState,
}

impl Round {
    #[must_use]
    pub fn new(index: usize, question: &Question) -> Self {
        Self {
            index,
            correct_option: question.correct_option(),
            state: RoundState::Unanswered,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self.state, RoundState::Locked(_))
    }

    /// The locked answer, if any.
    #[must_use]
    pub fn answer(&self) -> Option<&AnswerEvent> {
        match &self.state {
            RoundState::Locked(event) => Some(event),
            RoundState::Unanswered => None,
        }
    }

    /// Correct option and the player's result; `None` until locked.
    #[must_use]
    pub fn reveal(&self) -> Option<Reveal> {
        self.answer().map(|event| Reveal {
            correct_option: self.correct_option,
            selected: event.selected,
            is_correct: event.is_correct,
            points: event.points,
        })
    }

    /// Locks the round with `selected` (`None` on timeout).
    ///
    /// Returns [`Submission::Ignored`] if already locked. An out-of-range
    /// option on an unlocked round is an error and leaves the round unlocked.
    pub fn lock(
        &mut self,
        question: &Question,
        player_id: PlayerId,
        selected: Option<usize>,
        latency: Duration,
        scoring: &ScoringRule,
        limit: Duration,
    ) -> SessionResult<Submission> {
        if self.is_locked() {
            return Ok(Submission::Ignored);
        }
        if let Some(index) = selected {
            if index >= question.options().len() {
                return Err(SessionError::OptionOutOfRange {
                    index,
                    options: question.options().len(),
                });
            }
        }

        let is_correct = selected.is_some_and(|i| question.is_correct(i));
        let event = AnswerEvent {
            question_id: question.id(),
            question_index: self.index,
            player_id,
            selected,
            is_correct,
            points: scoring.points(is_correct, latency, limit),
            latency: latency.min(limit),
        };
        self.state = RoundState::Locked(event.clone());
        Ok(Submission::Accepted(event))
    }
}
