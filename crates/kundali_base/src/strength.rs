//! Graha strength: exaltation, debilitation and combustion scoring.
//!
//! Dignity is tested on the offset within the sign: a graha is exalted when
//! its offset lies within the orb of its exaltation degree E, debilitated
//! when within the orb of `(E + 180) mod 30`. Combustion is a fixed orb
//! from the Sun for every graha except the Sun itself.
//!
//! Score: +3 exalted, -3 debilitated, +1 retrograde, -2 combust.

use serde::{Deserialize, Serialize};

use crate::graha::{ALL_GRAHAS, Graha};
use crate::positions::GrahaLongitudes;
use crate::rashi::{Rashi, nth_rashi_from};
use crate::util::{angular_distance, degrees_in_sign, sign_index};

/// Tunable strength thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthConfig {
    /// Max distance (deg) from the exaltation/debilitation degree.
    pub dignity_orb_deg: f64,
    /// Max distance (deg) from the Sun for combustion, exclusive.
    pub combustion_orb_deg: f64,
    /// Also require the exaltation sign (or its seventh) for dignity.
    pub sign_aware_dignity: bool,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            dignity_orb_deg: 1.0,
            combustion_orb_deg: 11.0,
            sign_aware_dignity: false,
        }
    }
}

/// Per-graha strength summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthRecord {
    pub graha: Graha,
    pub longitude: f64,
    pub sign_index: u8,
    pub offset_in_sign: f64,
    pub exalted: bool,
    pub debilitated: bool,
    pub retrograde: bool,
    pub combust: bool,
    pub score: i32,
}

/// Circular distance between two in-sign offsets: `|((a - b + 15) mod 30) - 15|`.
pub fn offset_distance(offset: f64, target: f64) -> f64 {
    ((offset - target + 15.0).rem_euclid(30.0) - 15.0).abs()
}

/// Whether the graha sits within the orb of its exaltation degree.
pub fn is_exalted(graha: Graha, sidereal_lon: f64, config: &StrengthConfig) -> bool {
    let Some(e) = graha.exaltation_degree() else {
        return false;
    };
    let in_sign = !config.sign_aware_dignity
        || graha.exaltation_rashi().map(Rashi::index) == Some(sign_index(sidereal_lon));
    in_sign && offset_distance(degrees_in_sign(sidereal_lon), e) < config.dignity_orb_deg
}

/// Whether the graha sits within the orb of its debilitation degree.
pub fn is_debilitated(graha: Graha, sidereal_lon: f64, config: &StrengthConfig) -> bool {
    let Some(d) = graha.debilitation_degree() else {
        return false;
    };
    let in_sign = !config.sign_aware_dignity
        || graha.exaltation_rashi().map(|r| nth_rashi_from(r.index(), 7)) == Some(sign_index(sidereal_lon));
    in_sign && offset_distance(degrees_in_sign(sidereal_lon), d) < config.dignity_orb_deg
}

/// Check if a graha is combust (too close to the Sun).
///
/// A graha at exactly the orb is **not** combust (strict less-than).
/// Always `false` for the Sun.
pub fn is_combust(graha: Graha, graha_sid_lon: f64, sun_sid_lon: f64, orb_deg: f64) -> bool {
    graha != Graha::Surya && angular_distance(graha_sid_lon, sun_sid_lon) < orb_deg
}

/// Score from independent flags.
pub fn strength_score(exalted: bool, debilitated: bool, retrograde: bool, combust: bool) -> i32 {
    let mut score = 0;
    if exalted {
        score += 3;
    }
    if debilitated {
        score -= 3;
    }
    if retrograde {
        score += 1;
    }
    if combust {
        score -= 2;
    }
    score
}

/// Strength record for one graha.
pub fn graha_strength(
    graha: Graha,
    sidereal_lon: f64,
    sun_sid_lon: f64,
    retrograde: bool,
    config: &StrengthConfig,
) -> StrengthRecord {
    let exalted = is_exalted(graha, sidereal_lon, config);
    let debilitated = is_debilitated(graha, sidereal_lon, config);
    let combust = is_combust(graha, sidereal_lon, sun_sid_lon, config.combustion_orb_deg);
    StrengthRecord {
        graha,
        longitude: sidereal_lon,
        sign_index: sign_index(sidereal_lon),
        offset_in_sign: degrees_in_sign(sidereal_lon),
        exalted,
        debilitated,
        retrograde,
        combust,
        score: strength_score(exalted, debilitated, retrograde, combust),
    }
}

/// Strength records for all 9 grahas, in `Graha::index()` order.
pub fn all_strengths(
    positions: &GrahaLongitudes,
    retrograde: &[bool; 9],
    config: &StrengthConfig,
) -> [StrengthRecord; 9] {
    let sun = positions.longitude(Graha::Surya);
    ALL_GRAHAS.map(|g| {
        graha_strength(
            g,
            positions.longitude(g),
            sun,
            retrograde[g.index() as usize],
            config,
        )
    })
}
