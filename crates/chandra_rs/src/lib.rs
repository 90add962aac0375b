//! Convenience wrapper for the chandra Moon-rashi pipeline.
//!
//! Provides high-level functions that accept UTC instants directly,
//! removing the need to manually chain Julian Day → centuries → tropical
//! → sidereal → rashi.
//!
//! # Quick start
//!
//! ```rust
//! use chandra_rs::*;
//!
//! let instant: BirthInstant = "2000-01-01T12:00:00Z".parse().unwrap();
//! let info = moon_rashi(&instant);
//! println!("Moon rashi: {}", info.rashi);
//! ```

pub mod convenience;

// Primary re-exports — users should only need `use chandra_rs::*`
pub use convenience::{MoonReading, moon_insights, moon_longitudes, moon_rashi, moon_reading};

// Re-export pipeline types so callers don't need the stage crates directly.
pub use chandra_time::{BirthInstant, TimeError};
pub use chandra_lunar::{MeanElements, mean_elements};
pub use chandra_vedic::{
    ALL_RASHIS, Dms, LongitudeResult, Rashi, RashiInfo, deg_to_dms, lahiri_ayanamsa_deg,
    normalize_360, rashi_from_longitude, rashi_from_tropical,
};

// Re-export collaborator contracts and the bracelet catalog.
pub use chandra_insights::{
    BRACELET_CATALOG, BirthDetails, Bracelet, InsightError, InsightProvider, RashiInsights,
    ResolutionError, TimeResolver, bracelet_for,
};
