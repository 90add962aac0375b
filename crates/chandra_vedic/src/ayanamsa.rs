//! Lahiri ayanamsa computation.
//!
//! The ayanamsa is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed
//! stars). As the equinox precesses westward the ayanamsa grows by about
//! 1.397 degrees per century. The Lahiri (Chitrapaksha) convention is the
//! Indian government standard; its offset here is a quadratic fit in
//! Julian centuries since J2000.0.

/// Lahiri ayanamsa polynomial coefficients: constant, linear, quadratic.
const LAHIRI: [f64; 3] = [23.854_49, 1.397_193, 0.000_122];

/// Lahiri ayanamsa in degrees at `t` Julian centuries since J2000.0.
pub fn lahiri_ayanamsa_deg(t: f64) -> f64 {
    LAHIRI[0] + LAHIRI[1] * t + LAHIRI[2] * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_reference_value() {
        assert_eq!(lahiri_ayanamsa_deg(0.0), 23.85449);
    }

    #[test]
    fn one_century_forward() {
        let val = lahiri_ayanamsa_deg(1.0);
        assert!((val - 25.251805).abs() < 1e-12, "got {val}");
    }

    #[test]
    fn precession_rate() {
        let diff = lahiri_ayanamsa_deg(1.0) - lahiri_ayanamsa_deg(0.0);
        // ~1.397 deg/century
        assert!((diff - 1.397315).abs() < 1e-9, "one century drift = {diff}");
    }

    #[test]
    fn decreases_into_the_past() {
        assert!(lahiri_ayanamsa_deg(-1.0) < lahiri_ayanamsa_deg(0.0));
    }

    #[test]
    fn quadratic_term_is_small() {
        // Within +/- 3 centuries the quadratic term stays under 0.0011 deg
        let lin = |t: f64| LAHIRI[0] + LAHIRI[1] * t;
        for &t in &[-3.0, -1.0, 0.5, 3.0] {
            assert!((lahiri_ayanamsa_deg(t) - lin(t)).abs() < 0.0011);
        }
    }
}
