//! High-level entry points: UTC instant in, rashi out.

use chandra_insights::{Bracelet, InsightError, InsightProvider, RashiInsights, bracelet_for};
use chandra_time::BirthInstant;
use chandra_vedic::{LongitudeResult, RashiInfo, rashi_from_longitude};

/// Full result of a birth-chart Moon reading.
#[derive(Debug, Clone, PartialEq)]
pub struct MoonReading {
    /// The instant the reading was computed for.
    pub instant: BirthInstant,
    /// Tropical / ayanamsa / sidereal decomposition.
    pub longitudes: LongitudeResult,
    /// Classified rashi with position-in-sign breakdown.
    pub rashi: RashiInfo,
    /// Catalog bracelet for the rashi.
    pub bracelet: Bracelet,
}

/// Moon longitude decomposition for a UTC instant.
pub fn moon_longitudes(instant: &BirthInstant) -> LongitudeResult {
    chandra_vedic::moon_longitudes(instant.julian_centuries())
}

/// Moon rashi for a UTC instant.
///
/// Runs the whole pipeline: Julian Day → centuries → mean elements →
/// perturbation → ayanamsa → classification.
pub fn moon_rashi(instant: &BirthInstant) -> RashiInfo {
    rashi_from_longitude(moon_longitudes(instant).sidereal_deg)
}

/// Full Moon reading: longitudes, rashi, and the catalog bracelet.
pub fn moon_reading(instant: &BirthInstant) -> MoonReading {
    let longitudes = moon_longitudes(instant);
    let rashi = rashi_from_longitude(longitudes.sidereal_deg);
    MoonReading {
        instant: *instant,
        longitudes,
        rashi,
        bracelet: bracelet_for(rashi.rashi),
    }
}

/// Fetch insights for the rashi at a UTC instant through a provider.
///
/// The pipeline supplies only the rashi key; content errors from the
/// provider propagate unchanged, with no partial fallback.
pub fn moon_insights(
    instant: &BirthInstant,
    provider: &dyn InsightProvider,
) -> Result<RashiInsights, InsightError> {
    provider.insights_for(moon_rashi(instant).rashi)
}
