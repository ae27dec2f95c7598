use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which report to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `--count`: every token, alphabetically.
    Count,
    /// `--topcount`: most frequent tokens first.
    TopCount,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--count" => Ok(Mode::Count),
            "--topcount" => Ok(Mode::TopCount),
            other => Err(Error::UnknownOption(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Count => write!(f, "--count"),
            Mode::TopCount => write!(f, "--topcount"),
        }
    }
}
