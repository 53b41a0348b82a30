//! Config loading, demo content and text rendering for the PharosQuiz
//! terminal host.

mod render;

pub use render::{ordinal, parse_answer, render_prizes, render_question, render_reveal, render_standings};

use anyhow::{Context, Result};
use pharosquiz_session::{DriverHandle, LobbyConfig, SessionConfig, SessionError};
use pharosquiz_types::{Question, Quiz, QuizCode};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Block explorer used for payout links unless configured otherwise.
pub const DEFAULT_EXPLORER_URL: &str = "https://explorer.pharos.com";

/// Everything the host reads from its config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub session: SessionConfig,
    pub lobby: LobbyConfig,
    pub explorer_url: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            lobby: LobbyConfig::default(),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
        }
    }
}

impl HostConfig {
    /// Reads a JSON config file, or returns defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Explorer link for a payout transaction.
    #[must_use]
    pub fn tx_url(&self, hash: &str) -> String {
        format!("{}/tx/{hash}", self.explorer_url.trim_end_matches('/'))
    }
}

/// Forwards the player's choice to the driver.
///
/// Once the final standings have arrived the driver is allowed to be gone;
/// a late keypress is then dropped instead of failing the run.
pub async fn send_answer(handle: &DriverHandle, index: usize, finished: bool) -> Result<()> {
    match handle.select(index).await {
        Err(SessionError::ChannelClosed) if finished => Ok(()),
        other => Ok(other?),
    }
}

/// Loads and validates a quiz definition from a JSON file.
pub fn load_quiz(path: &Path) -> Result<Quiz> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read quiz file {}", path.display()))?;
    Quiz::from_json(&raw).with_context(|| format!("Invalid quiz in {}", path.display()))
}

/// The built-in Web3 quiz, under a freshly generated join code.
pub fn demo_quiz<R: Rng>(rng: &mut R) -> Result<Quiz> {
    let questions = vec![
        Question::multiple_choice(
            "What is the main advantage of a blockchain?",
            [
                "Centralized control",
                "Decentralized and distributed ledger",
                "Single point of failure",
                "Slow transaction speed",
            ],
            1,
        )?,
        Question::multiple_choice(
            "What is a smart contract?",
            [
                "A legal document",
                "A physical contract that looks modern",
                "Self-executing code on the blockchain",
                "An agreement between two smart people",
            ],
            2,
        )?,
        Question::multiple_choice(
            "What is the Pharos blockchain?",
            [
                "A programming language",
                "An EVM-compatible blockchain",
                "A cryptocurrency exchange",
                "A type of digital wallet",
            ],
            1,
        )?,
        Question::true_false("A private key should be shared with your wallet provider.", false)?,
    ];

    let mut quiz = Quiz::new(QuizCode::generate(rng), "Web3 Knowledge Quiz", "CryptoTeacher")
        .with_questions(questions)
        .with_prize_pool("100 PHAR");
    quiz.description = Some("Test your knowledge of blockchain basics.".to_string());
    quiz.validate()?;
    Ok(quiz)
}
