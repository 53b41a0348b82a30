//! Ranking and prize distribution for PharosQuiz.
//!
//! # Ranking
//!
//! Players are ranked by score, highest first. Ties share a rank and the next
//! distinct score takes its 1-based position, so scores
//! `[100, 100, 80, 80, 80, 50]` rank as `[1, 1, 3, 3, 3, 6]`.
//!
//! ```
//! use pharosquiz_leaderboard::rank;
//! use pharosquiz_types::{Player, PlayerId};
//!
//! let players = vec![
//!     Player::with_id(PlayerId::new(), "Web3Wizard", 200).unwrap(),
//!     Player::with_id(PlayerId::new(), "You", 150).unwrap(),
//!     Player::with_id(PlayerId::new(), "Blockchain_Fan", 200).unwrap(),
//! ];
//!
//! let ranked = rank(&players);
//! assert_eq!(ranked.iter().map(|p| p.rank).collect::<Vec<_>>(), [1, 1, 3]);
//! ```
//!
//! # Prizes
//!
//! The top places split a prize pool according to a [`PrizeSplit`]; see
//! [`distribute`]. This crate only computes amounts. Paying them out is
//! left to the caller.

mod error;
mod prize;
mod rank;
mod standings;
mod tx;

pub use error::{PrizeError, PrizeResult};
pub use prize::{distribute, Distribution, PrizeAward, PrizePool, PrizeSplit, BASIS_POINTS};
pub use rank::{rank, RankedPlayer};
pub use standings::Standings;
pub use tx::TxHash;
