//! Error types for the collaborator boundaries.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the time-resolution collaborator.
///
/// Raised upstream of the pipeline and propagated, never retried.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ResolutionError {
    /// The place could not be identified; the message is surfaced to the
    /// end user verbatim.
    LocationNotFound(String),
    /// Any other resolution failure.
    Failed(String),
}

impl Display for ResolutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocationNotFound(place) => write!(f, "location not found: {place}"),
            Self::Failed(msg) => write!(f, "time resolution failed: {msg}"),
        }
    }
}

impl Error for ResolutionError {}

/// Errors from the insight collaborator.
///
/// There is no partial or cached fallback; a failure is surfaced as
/// "insights unavailable".
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum InsightError {
    /// The provider failed outright.
    Unavailable(String),
    /// The provider returned structurally incomplete data.
    Incomplete(&'static str),
}

impl Display for InsightError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "insights unavailable: {msg}"),
            Self::Incomplete(field) => write!(f, "incomplete insight data: missing {field}"),
        }
    }
}

impl Error for InsightError {}
