//! UTC birth instant with sub-second precision.
//!
//! `BirthInstant` is the single entry point into the lunar pipeline. It is
//! validated on construction: every value that exists is a well-formed
//! proleptic-Gregorian UTC calendar instant, so the numeric pipeline
//! downstream has no failure mode of its own.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{MILLIS_PER_DAY, UNIX_EPOCH_JD, days_from_civil, jd_to_centuries};

/// A validated UTC calendar instant.
///
/// Immutable value type; created once per request and consumed by the
/// Julian Day conversion. No range restriction is applied to the year, but
/// the lunar series downstream is only warranted within a few centuries of
/// J2000.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInstant {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

/// Days in each month of a non-leap year, 1-indexed by month.
const DAYS_IN_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

impl BirthInstant {
    /// Construct a validated UTC instant.
    ///
    /// Rejects out-of-range calendar fields (including Feb 29 in non-leap
    /// years) with [`TimeError::InvalidCalendar`] and non-finite seconds
    /// with [`TimeError::NonFinite`].
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !second.is_finite() {
            return Err(TimeError::NonFinite);
        }
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidCalendar("month must be 1-12"));
        }
        let max_day = if month == 2 && is_leap_year(year) {
            29
        } else {
            DAYS_IN_MONTH[month as usize]
        };
        if day < 1 || day > max_day {
            return Err(TimeError::InvalidCalendar("day out of range for month"));
        }
        if hour > 23 {
            return Err(TimeError::InvalidCalendar("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidCalendar("minute must be 0-59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidCalendar("second must be in [0, 60)"));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    /// Milliseconds since the Unix epoch (fractional, may be negative).
    pub fn unix_millis(&self) -> f64 {
        let days = days_from_civil(self.year, self.month, self.day) as f64;
        let day_seconds =
            f64::from(self.hour) * 3600.0 + f64::from(self.minute) * 60.0 + self.second;
        days * MILLIS_PER_DAY + day_seconds * 1000.0
    }

    /// Julian Day number: `unix_days + 2440587.5`.
    pub fn julian_day(&self) -> f64 {
        self.unix_millis() / MILLIS_PER_DAY + UNIX_EPOCH_JD
    }

    /// Julian centuries since J2000.0.
    pub fn julian_centuries(&self) -> f64 {
        jd_to_centuries(self.julian_day())
    }
}

impl FromStr for BirthInstant {
    type Err = TimeError;

    /// Parse "YYYY-MM-DDThh:mm:ssZ" (trailing Z optional, seconds may be
    /// fractional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('Z');
        let (date, time) = trimmed
            .split_once('T')
            .ok_or_else(|| TimeError::Parse(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}")))?;
        let date_parts: Vec<&str> = date.split('-').collect();
        let time_parts: Vec<&str> = time.split(':').collect();
        if date_parts.len() != 3 || time_parts.len() != 3 {
            return Err(TimeError::Parse(format!("invalid date/time format: {s}")));
        }
        let year: i32 = date_parts[0]
            .parse()
            .map_err(|e| TimeError::Parse(format!("year: {e}")))?;
        let month: u32 = date_parts[1]
            .parse()
            .map_err(|e| TimeError::Parse(format!("month: {e}")))?;
        let day: u32 = date_parts[2]
            .parse()
            .map_err(|e| TimeError::Parse(format!("day: {e}")))?;
        let hour: u32 = time_parts[0]
            .parse()
            .map_err(|e| TimeError::Parse(format!("hour: {e}")))?;
        let minute: u32 = time_parts[1]
            .parse()
            .map_err(|e| TimeError::Parse(format!("minute: {e}")))?;
        let second: f64 = time_parts[2]
            .parse()
            .map_err(|e| TimeError::Parse(format!("second: {e}")))?;
        Self::new(year, month, day, hour, minute, second)
    }
}

impl std::fmt::Display for BirthInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - f64::from(whole);
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
