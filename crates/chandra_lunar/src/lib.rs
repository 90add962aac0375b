//! Truncated lunar theory: mean elements and tropical longitude.
//!
//! This crate provides:
//! - The five mean orbital angles {L0, D, M, M′, F} as linear polynomials
//!   in Julian centuries since J2000.0
//! - A fixed six-term periodic correction to the mean longitude
//! - The Moon's tropical ecliptic longitude (mean + correction)
//!
//! The six-term truncation keeps the series within a fraction of a degree
//! of a full lunar theory near the present era, which is sufficient to
//! place the Moon in a 30-degree zodiac sector. Downstream sign-boundary
//! goldens are calibrated against this exact truncation; do not add terms.

pub mod mean_elements;
pub mod perturbation;

pub use mean_elements::{MeanElements, mean_elements};
pub use perturbation::{longitude_correction_deg, moon_tropical_longitude_deg};
