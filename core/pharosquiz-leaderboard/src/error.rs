//! Error types for prize handling.

use thiserror::Error;

/// Result type for prize operations.
pub type PrizeResult<T> = Result<T, PrizeError>;

/// Errors raised while parsing or distributing prizes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrizeError {
    /// Shares do not add up to the whole pool.
    #[error("invalid prize split: {0}")]
    InvalidSplit(String),

    /// Prize pool label could not be parsed.
    #[error("invalid prize pool: {0}")]
    InvalidPrizePool(String),

    /// Transaction hash is not `0x` followed by 64 hex digits.
    #[error("invalid transaction hash: {0}")]
    InvalidTxHash(String),
}
