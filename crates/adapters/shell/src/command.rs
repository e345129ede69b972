//! Command parsing.

use std::convert::Infallible;
use std::str::FromStr;

/// A line typed at the main prompt.
///
/// Matching is exact and case-sensitive; anything else is
/// [`Command::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Status,
    Exit,
    Unknown(String),
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "toggle" => Self::Toggle,
            "status" => Self::Status,
            "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        })
    }
}
