//! Six-digit quiz join codes.

use crate::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CODE_LEN: usize = 6;
const CODE_MIN: u32 = 100_000;
const CODE_MAX: u32 = 999_999;

/// The code players type in to join a quiz lobby.
///
/// Always six decimal digits with a non-zero leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuizCode(u32);

impl QuizCode {
    /// Generates a fresh random code.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self(rng.gen_range(CODE_MIN..=CODE_MAX))
    }

    /// Parses user input into a code.
    ///
    /// Non-digit characters are stripped first, so `"123 456"` and
    /// `"123-456"` are both accepted.
    pub fn parse(input: &str) -> Result<Self> {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != CODE_LEN {
            return Err(Error::InvalidQuizCode(format!(
                "expected {CODE_LEN} digits, got {}",
                digits.len()
            )));
        }
        let value: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidQuizCode(digits.clone()))?;
        if value < CODE_MIN {
            return Err(Error::InvalidQuizCode(format!("{digits} has a leading zero")));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuizCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

impl FromStr for QuizCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for QuizCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<QuizCode> for String {
    fn from(code: QuizCode) -> Self {
        code.to_string()
    }
}
