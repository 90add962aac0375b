//! Sidereal (Vedic) zodiac computation on top of the lunar series.
//!
//! This crate provides:
//! - The Lahiri ayanamsa polynomial and tropical → sidereal conversion
//! - The 12-sign rashi classifier with DMS breakdown
//!
//! Together with `chandra_lunar` this completes the pipeline
//! Julian centuries → tropical longitude → sidereal longitude → rashi.

pub mod ayanamsa;
pub mod longitude;
pub mod rashi;

pub use ayanamsa::lahiri_ayanamsa_deg;
pub use longitude::{LongitudeResult, moon_longitudes};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, normalize_360,
    rashi_from_longitude, rashi_from_tropical,
};
