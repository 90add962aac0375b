//! Julian Day and Julian-century conversions.
//!
//! The Julian Day number is a continuous count of days used as the uniform
//! time axis for the lunar formulas. The conversion anchors on the Unix
//! epoch: `JD = unix_days + 2440587.5`.

/// Julian Day of the Unix epoch, 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day of the J2000.0 epoch, 2000-01-01T12:00:00 UTC.
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Milliseconds per day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Civil (proleptic Gregorian) date to days since 1970-01-01.
///
/// Valid for all i32 years; months 1-12, days 1-31 (caller validates).
/// Standard era-based day-count algorithm.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let m = i64::from(month);
    let d = i64::from(day);
    let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + d - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Milliseconds since the Unix epoch to Julian Day.
pub fn unix_millis_to_jd(unix_ms: f64) -> f64 {
    unix_ms / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian Day to Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
