//! Rashi (lunar zodiac sign) classification and DMS breakdown.
//!
//! The sidereal ecliptic circle is divided into 12 equal signs of 30
//! degrees each, starting from Mesha (Aries) at 0 deg. Given any real
//! sidereal longitude we normalize to [0, 360) and identify the sector;
//! the classifier is total, so every finite input maps to exactly one
//! rashi. Ties at exact 30-degree multiples resolve to the later sign.

use crate::ayanamsa::lahiri_ayanamsa_deg;

/// The 12 rashis (lunar zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in sector order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
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

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based sector index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl std::fmt::Display for Rashi {
    /// Canonical English/Sanskrit pair, e.g. "Aries (Mesha)".
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.western_name(), self.name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full rashi classification result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - f64::from(total_degrees)) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - f64::from(minutes)) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Classify a sidereal ecliptic longitude into its rashi.
///
/// The input may be any finite real number of degrees; it is normalized
/// to [0, 360) first. Each rashi spans exactly 30 degrees: Mesha = [0, 30),
/// Vrishabha = [30, 60), and so on.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_idx = (lon / 30.0).floor() as u8;
    // Clamp in case of floating point edge (exactly 360.0)
    let rashi_idx = rashi_idx.min(11);
    let degrees_in_rashi = lon - f64::from(rashi_idx) * 30.0;
    let rashi = ALL_RASHIS[rashi_idx as usize];
    let dms = deg_to_dms(degrees_in_rashi);

    RashiInfo {
        rashi,
        rashi_index: rashi_idx,
        dms,
        degrees_in_rashi,
    }
}

/// Convenience: classify from tropical longitude at a given epoch.
///
/// Computes `sidereal = tropical - lahiri_ayanamsa(t)`, then calls
/// [`rashi_from_longitude`]. `t` = Julian centuries since J2000.0.
pub fn rashi_from_tropical(tropical_lon_deg: f64, t: f64) -> RashiInfo {
    rashi_from_longitude(tropical_lon_deg - lahiri_ayanamsa_deg(t))
}
