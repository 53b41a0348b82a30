use crate::{PlayerId, QuestionId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A player's locked-in response to one question.
///
/// Exactly one is created per question per player per session.
/// `selected == None` means the countdown ran out first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEvent {
    pub question_id: QuestionId,
    pub question_index: usize,
    pub player_id: PlayerId,
    pub selected: Option<usize>,
    pub is_correct: bool,
    pub points: i64,
    pub latency: Duration,
}

impl AnswerEvent {
    /// Returns true if the answer was locked by timeout rather than a choice.
    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.selected.is_none()
    }
}
