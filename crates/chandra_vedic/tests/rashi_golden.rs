//! Integration tests for the sidereal pipeline and rashi classification.
//!
//! Pure-math tests; epochs are given directly as Julian centuries.

use chandra_vedic::{
    ALL_RASHIS, Rashi, moon_longitudes, normalize_360, rashi_from_longitude,
};

#[test]
fn rashi_sweep_all_12() {
    let expected = [
        Rashi::Mesha,
        Rashi::Vrishabha,
        Rashi::Mithuna,
        Rashi::Karka,
        Rashi::Simha,
        Rashi::Kanya,
        Rashi::Tula,
        Rashi::Vrischika,
        Rashi::Dhanu,
        Rashi::Makara,
        Rashi::Kumbha,
        Rashi::Meena,
    ];
    for (i, r) in expected.iter().enumerate() {
        let lon = i as f64 * 30.0 + 15.0; // midpoint of each rashi
        let info = rashi_from_longitude(lon);
        assert_eq!(info.rashi, *r, "rashi at {lon} deg");
        assert_eq!(info.rashi_index, i as u8);
    }
}

#[test]
fn moon_rashi_epoch_goldens() {
    // (T centuries, expected normalized sidereal, expected rashi)
    // Goldens computed from the same fixed series; normalized longitudes
    // cross-checked against the sector the Moon occupied at each epoch.
    let cases = [
        // 2000-01-01T12:00:00Z (J2000.0)
        (0.0, 199.42691333719114, Rashi::Tula),
        // 1992-04-12T00:00:00Z (Meeus worked-example epoch)
        (-0.07722108145106092, 109.50232717729523, Rashi::Karka),
        // 1990-05-15T06:30:00Z
        (-0.09632386493269025, 270.45841448193096, Rashi::Makara),
        // 2024-03-20T12:00:00Z
        (0.24216290212183436, 104.01540474531066, Rashi::Karka),
        // 1969-07-20T20:17:00Z
        (-0.30449431515704845, 164.4031711735006, Rashi::Kanya),
    ];
    for &(t, expected_lon, expected_rashi) in &cases {
        let lons = moon_longitudes(t);
        let norm = normalize_360(lons.sidereal_deg);
        assert!(
            (norm - expected_lon).abs() < 1e-6,
            "t={t}: normalized sidereal = {norm}, expected {expected_lon}"
        );
        let info = rashi_from_longitude(lons.sidereal_deg);
        assert_eq!(info.rashi, expected_rashi, "t={t}");
    }
}

#[test]
fn pipeline_normalized_in_range_over_four_centuries() {
    // ~2000 samples across 1800-2200
    for i in 0..2000 {
        let t = -2.0 + i as f64 * 0.002;
        let lons = moon_longitudes(t);
        let norm = normalize_360(lons.sidereal_deg);
        assert!((0.0..360.0).contains(&norm), "t={t}: norm = {norm}");
        let info = rashi_from_longitude(lons.sidereal_deg);
        assert_eq!(info.rashi, ALL_RASHIS[info.rashi_index as usize]);
    }
}

#[test]
fn decomposition_identity_holds_through_pipeline() {
    for i in 0..100 {
        let t = -1.0 + i as f64 * 0.02;
        let lons = moon_longitudes(t);
        assert_eq!(lons.sidereal_deg, lons.tropical_deg - lons.ayanamsa_deg);
    }
}

#[test]
fn j2000_sidereal_against_reference_ephemeris() {
    // Fuller-series tropical reference at J2000 is 223.313838 deg; minus
    // Lahiri 23.85449 gives sidereal 199.459348. The six-term pipeline
    // must land within one degree.
    let lons = moon_longitudes(0.0);
    let norm = normalize_360(lons.sidereal_deg);
    assert!(
        (norm - 199.459348).abs() < 1.0,
        "J2000 sidereal = {norm}, reference 199.459348"
    );
}
