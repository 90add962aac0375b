//! Six-term periodic correction to the mean lunar longitude.
//!
//! The dominant physical perturbations of the lunar orbit, as sinusoids of
//! integer combinations of the mean elements: the equation of the center,
//! evection, variation, and three smaller terms. A full lunar theory
//! carries hundreds of terms; this truncation keeps the six whose
//! amplitudes exceed ~0.11 degrees, bounding the error well under one
//! degree near the present era.

use crate::mean_elements::{MeanElements, mean_elements};

/// Periodic terms: [nD, nM, nM′, nF, amplitude_deg].
///
/// Each term contributes `amplitude * sin(nD*D + nM*M + nM'*M' + nF*F)`.
/// The amplitudes calibrate the downstream sign-boundary goldens; the
/// table is fixed at exactly six terms.
#[rustfmt::skip]
static TERMS: [[f64; 5]; 6] = [
    // nD    nM    nM'   nF    amplitude (deg)
    [ 0.0,  0.0,  1.0,  0.0,  6.288774], // equation of the center
    [ 2.0,  0.0, -1.0,  0.0,  1.274027], // evection
    [ 2.0,  0.0,  0.0,  0.0,  0.658314], // variation
    [ 0.0,  0.0,  2.0,  0.0,  0.213618],
    [ 0.0,  1.0,  0.0,  0.0, -0.185116], // annual equation
    [ 0.0,  0.0,  0.0,  2.0, -0.114332],
];

/// Longitude correction in degrees for the given mean elements.
pub fn longitude_correction_deg(el: &MeanElements) -> f64 {
    let d = el.d.to_radians();
    let m = el.m.to_radians();
    let m_prime = el.m_prime.to_radians();
    let f = el.f.to_radians();

    let mut correction = 0.0_f64;
    for term in &TERMS {
        let angle = term[0] * d + term[1] * m + term[2] * m_prime + term[3] * f;
        correction += term[4] * angle.sin();
    }
    correction
}

/// Moon's tropical ecliptic longitude in degrees, unnormalized.
///
/// `t` = Julian centuries since J2000.0. Mean longitude plus the six-term
/// periodic correction; the result may be negative or exceed 360.
pub fn moon_tropical_longitude_deg(t: f64) -> f64 {
    let el = mean_elements(t);
    el.l0 + longitude_correction_deg(&el)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_at_j2000() {
        let el = mean_elements(0.0);
        let corr = longitude_correction_deg(&el);
        assert!(
            (corr - 4.964955637191145).abs() < 1e-9,
            "correction at J2000 = {corr}"
        );
    }

    #[test]
    fn correction_bounded_by_amplitude_sum() {
        // Sum of |amplitudes| = 8.724181 deg
        for &t in &[-3.0, -1.0, -0.25, 0.0, 0.1, 0.24, 1.0, 3.0] {
            let corr = longitude_correction_deg(&mean_elements(t));
            assert!(corr.abs() < 8.724181, "t={t}: correction = {corr}");
        }
    }

    #[test]
    fn tropical_at_j2000() {
        let lon = moon_tropical_longitude_deg(0.0);
        assert!(
            (lon - 223.28140333719114).abs() < 1e-9,
            "tropical at J2000 = {lon}"
        );
    }

    #[test]
    fn tropical_is_finite_over_range() {
        for &t in &[-5.0, -1.0, 0.0, 0.5, 1.0, 5.0] {
            assert!(moon_tropical_longitude_deg(t).is_finite());
        }
    }

    #[test]
    fn moon_advances_about_13_deg_per_day() {
        // Sidereal month ~27.32 days → mean motion ~13.18 deg/day
        let day = 1.0 / 36_525.0;
        let l1 = moon_tropical_longitude_deg(0.0);
        let l2 = moon_tropical_longitude_deg(day);
        let rate = l2 - l1;
        assert!((10.5..16.0).contains(&rate), "daily motion = {rate} deg");
    }

    #[test]
    fn determinism() {
        let a = moon_tropical_longitude_deg(0.24);
        let b = moon_tropical_longitude_deg(0.24);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
