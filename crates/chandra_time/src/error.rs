//! Error types for birth-instant validation and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from constructing or parsing a UTC birth instant.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// ISO-8601 string could not be parsed.
    Parse(String),
    /// Calendar field out of range (bad month, day, hour, minute, or second).
    InvalidCalendar(&'static str),
    /// Seconds value is NaN or infinite.
    NonFinite,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "datetime parse error: {msg}"),
            Self::InvalidCalendar(msg) => write!(f, "invalid calendar value: {msg}"),
            Self::NonFinite => write!(f, "seconds must be finite"),
        }
    }
}

impl Error for TimeError {}
