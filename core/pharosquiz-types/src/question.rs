//! Quiz questions.
//!
//! A question is validated once when built and never changes afterwards,
//! so a play session can hold it by shared reference for its whole life.

use crate::{Error, QuestionId, Result};
use serde::{Deserialize, Serialize};

/// The shape of a question's answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[default]
    MultipleChoice,
    TrueFalse,
}

/// A single question with its options and the index of the correct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    id: QuestionId,
    text: String,
    kind: QuestionKind,
    options: Vec<String>,
    correct_option: usize,
}

impl Question {
    /// Builds a multiple-choice question.
    pub fn multiple_choice(
        text: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_option: usize,
    ) -> Result<Self> {
        Self::build(
            QuestionId::new(),
            text.into(),
            QuestionKind::MultipleChoice,
            options.into_iter().map(Into::into).collect(),
            correct_option,
        )
    }

    /// Builds a true/false question. Option 0 is "True", option 1 is "False".
    pub fn true_false(text: impl Into<String>, answer: bool) -> Result<Self> {
        Self::build(
            QuestionId::new(),
            text.into(),
            QuestionKind::TrueFalse,
            vec!["True".to_string(), "False".to_string()],
            if answer { 0 } else { 1 },
        )
    }

    fn build(
        id: QuestionId,
        text: String,
        kind: QuestionKind,
        options: Vec<String>,
        correct_option: usize,
    ) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::InvalidQuestion("question text is empty".into()));
        }
        if options.len() < 2 {
            return Err(Error::InvalidQuestion(format!(
                "need at least 2 options, got {}",
                options.len()
            )));
        }
        if kind == QuestionKind::TrueFalse && options.len() != 2 {
            return Err(Error::InvalidQuestion(
                "true/false questions have exactly 2 options".into(),
            ));
        }
        if let Some(pos) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(Error::InvalidQuestion(format!("option {pos} is empty")));
        }
        if correct_option >= options.len() {
            return Err(Error::InvalidQuestion(format!(
                "correct option {correct_option} out of range for {} options",
                options.len()
            )));
        }
        Ok(Self {
            id,
            text,
            kind,
            options,
            correct_option,
        })
    }

    #[must_use]
    pub const fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub const fn correct_option(&self) -> usize {
        self.correct_option
    }

    /// Returns true if `index` is the correct option.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_option
    }

    /// Letter label for an option index: 0 → 'A', 1 → 'B', ...
    #[must_use]
    pub fn option_label(index: usize) -> char {
        u8::try_from(index)
            .ok()
            .and_then(|i| b'A'.checked_add(i))
            .filter(u8::is_ascii_uppercase)
            .map_or('?', char::from)
    }
}

#[derive(Deserialize)]
struct RawQuestion {
    #[serde(default)]
    id: Option<QuestionId>,
    text: String,
    #[serde(default)]
    kind: QuestionKind,
    options: Vec<String>,
    correct_option: usize,
}

impl TryFrom<RawQuestion> for Question {
    type Error = Error;

    fn try_from(raw: RawQuestion) -> Result<Self> {
        Self::build(
            raw.id.unwrap_or_default(),
            raw.text,
            raw.kind,
            raw.options,
            raw.correct_option,
        )
    }
}
