use crate::error::{PrizeError, PrizeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const HASH_HEX_LEN: usize = 64;

/// A prize payout transaction hash (`0x` + 64 hex digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TxHash(String);

impl TxHash {
    pub fn parse(s: &str) -> PrizeResult<Self> {
        let hex = s
            .strip_prefix("0x")
            .ok_or_else(|| PrizeError::InvalidTxHash(format!("{s:?} lacks 0x prefix")))?;
        if hex.len() != HASH_HEX_LEN || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PrizeError::InvalidTxHash(format!(
                "{s:?} is not {HASH_HEX_LEN} hex digits"
            )));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short display form: `0x3a8d...1a55`.
    #[must_use]
    pub fn abbreviated(&self) -> String {
        let s = &self.0;
        format!("{}...{}", &s[..6], &s[s.len() - 4..])
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TxHash {
    type Err = PrizeError;

    fn from_str(s: &str) -> PrizeResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TxHash {
    type Error = PrizeError;

    fn try_from(value: String) -> PrizeResult<Self> {
        Self::parse(&value)
    }
}

impl From<TxHash> for String {
    fn from(hash: TxHash) -> Self {
        hash.0
    }
}
