//! Tropical / ayanamsa / sidereal longitude decomposition.

use chandra_lunar::moon_tropical_longitude_deg;

use crate::ayanamsa::lahiri_ayanamsa_deg;

/// The Moon's longitude decomposition at a single epoch.
///
/// All values are unnormalized degrees (may be negative or exceed 360).
/// Invariant: `sidereal_deg` is bit-exactly `tropical_deg - ayanamsa_deg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeResult {
    /// Tropical ecliptic longitude (mean + six-term correction).
    pub tropical_deg: f64,
    /// Lahiri ayanamsa at the same epoch.
    pub ayanamsa_deg: f64,
    /// Sidereal longitude: tropical minus ayanamsa.
    pub sidereal_deg: f64,
}

/// Compute the Moon's tropical, ayanamsa, and sidereal longitudes.
///
/// `t` = Julian centuries since J2000.0.
pub fn moon_longitudes(t: f64) -> LongitudeResult {
    let tropical_deg = moon_tropical_longitude_deg(t);
    let ayanamsa_deg = lahiri_ayanamsa_deg(t);
    LongitudeResult {
        tropical_deg,
        ayanamsa_deg,
        sidereal_deg: tropical_deg - ayanamsa_deg,
    }
}
