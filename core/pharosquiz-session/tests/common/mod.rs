//! Shared fixtures for session tests.

#![allow(dead_code)]

use pharosquiz_session::{QuizSession, SessionConfig};
use pharosquiz_types::{Player, PlayerId, Question, Quiz, QuizCode};

/// Three blockchain questions; correct options are 1, 2, 1.
pub fn questions() -> Vec<Question> {
    vec![
        Question::multiple_choice(
            "What is the main advantage of a blockchain?",
            [
                "Centralized control",
                "Decentralized and distributed ledger",
                "Single point of failure",
                "Slow transaction speed",
            ],
            1,
        )
        .unwrap(),
        Question::multiple_choice(
            "What is a smart contract?",
            [
                "A legal document",
                "A physical contract that looks modern",
                "Self-executing code on the blockchain",
                "An agreement between two smart people",
            ],
            2,
        )
        .unwrap(),
        Question::multiple_choice(
            "What is the Pharos blockchain?",
            [
                "A programming language",
                "An EVM-compatible blockchain",
                "A cryptocurrency exchange",
                "A type of digital wallet",
            ],
            1,
        )
        .unwrap(),
    ]
}

pub fn quiz() -> Quiz {
    Quiz::new(QuizCode::parse("123456").unwrap(), "Web3 Knowledge Quiz", "CryptoTeacher")
        .with_questions(questions())
}

pub fn quiz_with(questions: Vec<Question>) -> Quiz {
    Quiz::new(QuizCode::parse("654321").unwrap(), "Short Quiz", "Host").with_questions(questions)
}

pub fn player(name: &str, score: i64) -> Player {
    Player::with_id(PlayerId::new(), name, score).unwrap()
}

/// Seven players mid-game; the local player "You" is at index 1 with 150.
pub fn roster() -> Vec<Player> {
    vec![
        player("Player1", 120),
        player("You", 150),
        player("Blockchain_Fan", 180),
        player("Web3Wizard", 200),
        player("Player5", 90),
        player("Player6", 70),
        player("Player7", 50),
    ]
}

/// Session over the three-question quiz with the default config.
pub fn session() -> (QuizSession, Vec<Player>) {
    let roster = roster();
    let me = roster[1].id;
    let session = QuizSession::new(quiz(), roster.clone(), me, SessionConfig::default()).unwrap();
    (session, roster)
}

/// Config with simulation off, for deterministic driver runs.
pub fn quiet_config() -> SessionConfig {
    SessionConfig {
        simulate_opponents: false,
        ..SessionConfig::default()
    }
}
