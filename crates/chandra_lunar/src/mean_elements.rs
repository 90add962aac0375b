//! Mean lunar orbital elements as polynomials in Julian centuries.
//!
//! Coefficients are the standard epoch-J2000.0 values for the lunar
//! fundamental arguments (constant + rate per Julian century, degrees).
//! The angles are deliberately NOT reduced modulo 360 here: they feed
//! periodic (trigonometric) functions, so the reduction is unnecessary,
//! and keeping the raw polynomial value preserves the exact calibration
//! of the series. At large |T| the angle magnitude grows past the point
//! where f64 can hold sub-arcsecond resolution; this is an accepted
//! characteristic of the truncated theory, which is only warranted within
//! a few centuries of J2000.0 anyway.

/// The five mean orbital angles, in degrees, unnormalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    /// L0: Moon's mean longitude.
    pub l0: f64,
    /// D: mean elongation of the Moon from the Sun.
    pub d: f64,
    /// M: Sun's mean anomaly.
    pub m: f64,
    /// M′: Moon's mean anomaly.
    pub m_prime: f64,
    /// F: Moon's argument of latitude.
    pub f: f64,
}

/// Evaluate the five mean elements at `t` Julian centuries since J2000.0.
pub fn mean_elements(t: f64) -> MeanElements {
    MeanElements {
        l0: 218.316_447_7 + 481_267.881_234_21 * t,
        d: 297.850_192_1 + 445_267.111_403_4 * t,
        m: 357.529_109_2 + 35_999.050_290_9 * t,
        m_prime: 134.963_396_4 + 477_198.867_505_5 * t,
        f: 93.272_095_0 + 483_202.017_523_3 * t,
    }
}
