//! Collaborator traits and their data-transfer types.

use chandra_time::BirthInstant;
use chandra_vedic::Rashi;

use crate::bracelet::Bracelet;
use crate::error::{InsightError, ResolutionError};

/// Raw birth details as entered by the user, before time resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthDetails {
    /// Local calendar date, "YYYY-MM-DD".
    pub date: String,
    /// Local wall-clock time, 24-hour "HH:MM:SS".
    pub time: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Resolves local birth details to a UTC instant.
///
/// Implementations must account for the timezone offset and the historical
/// daylight-saving rules in force at the given date and place.
pub trait TimeResolver {
    fn resolve_utc(&self, details: &BirthDetails) -> Result<BirthInstant, ResolutionError>;
}

/// Guidance returned by an insight provider for one rashi.
#[derive(Debug, Clone, PartialEq)]
pub struct RashiInsights {
    /// One-paragraph summary of the rashi's core traits.
    pub summary: String,
    /// Exactly 3 key strengths.
    pub strengths: [String; 3],
    /// Exactly 2 potential challenges.
    pub challenges: [String; 2],
    /// Bracelet recommendation from the static catalog.
    pub bracelet: Bracelet,
}

/// Produces descriptive insights for a rashi.
///
/// The pipeline supplies only the rashi key; the provider owns the content.
pub trait InsightProvider {
    fn insights_for(&self, rashi: Rashi) -> Result<RashiInsights, InsightError>;
}
