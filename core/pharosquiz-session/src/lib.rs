//! Live quiz session engine for PharosQuiz.
//!
//! # Architecture
//!
//! The engine is split into a pure core and a thin async shell:
//!
//! - **Round** / **QuizSession**: plain state machines. Every transition is a
//!   method call that returns what happened; nothing here touches a clock.
//! - **Countdown**: a per-question timer that fires its callback exactly once
//!   and is aborted when dropped.
//! - **Lobby**: collects the roster before play starts.
//! - **Simulator**: stand-in for other participants (mock joins and score
//!   drift) until a real broadcast channel exists.
//! - **Driver**: one Tokio task that owns a session and multiplexes commands,
//!   countdown ticks, reveal delays and drift in a single `select!` loop.
//!
//! # Example
//!
//! ```
//! use pharosquiz_session::{QuizSession, SessionConfig, Submission};
//! use pharosquiz_types::{Player, Question, Quiz, QuizCode};
//! use std::time::Duration;
//!
//! let quiz = Quiz::new(QuizCode::parse("123456").unwrap(), "Demo", "Host")
//!     .with_questions(vec![Question::true_false("Rust is memory safe", true).unwrap()]);
//! let me = Player::new("You").unwrap();
//! let my_id = me.id;
//!
//! let mut session = QuizSession::new(quiz, vec![me], my_id, SessionConfig::default()).unwrap();
//! let first = session.select_option(0, Duration::from_secs(3)).unwrap();
//! assert!(matches!(first, Submission::Accepted(_)));
//! assert_eq!(session.local_score(), 100);
//!
//! // A second answer to the same question is ignored.
//! let second = session.select_option(1, Duration::from_secs(4)).unwrap();
//! assert_eq!(second, Submission::Ignored);
//! assert_eq!(session.local_score(), 100);
//! ```

mod config;
mod countdown;
mod driver;
mod error;
mod lobby;
mod round;
mod scoring;
mod session;
mod simulate;

pub use config::{LobbyConfig, SessionConfig};
pub use countdown::{Countdown, Urgency};
pub use driver::{
    run_lobby, DriverHandle, LobbyCommand, LobbyEvent, SessionCommand, SessionDriver,
    SessionEvent,
};
pub use error::{SessionError, SessionResult};
pub use lobby::{Lobby, DEFAULT_LOBBY_CAPACITY};
pub use round::{Reveal, Round, RoundState, Submission};
pub use scoring::ScoringRule;
pub use session::{Advance, FinalStandings, Phase, QuizSession};
pub use simulate::Simulator;
