//! UTC birth instants and the Julian Day time base.
//!
//! This crate provides:
//! - `BirthInstant`, a validated UTC calendar date/time with sub-second
//!   precision
//! - Julian Day ↔ Unix-day conversions
//! - Julian centuries since the J2000.0 epoch
//!
//! All downstream lunar formulas take Julian centuries (T) as their time
//! argument; this crate is the only place calendar arithmetic happens.

pub mod birth_instant;
pub mod error;
pub mod julian;

pub use birth_instant::BirthInstant;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, MILLIS_PER_DAY, UNIX_EPOCH_JD, days_from_civil, jd_to_centuries,
    unix_millis_to_jd,
};
