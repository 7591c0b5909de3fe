//! Transit (gochara) comparison against natal positions, and Sade-Sati.
//!
//! The transit delta for a graha is its shortest circular separation from
//! the natal longitude, `|((transit - natal + 180) mod 360) - 180|`.
//! Sade-Sati classifies transiting Shani relative to the natal Moon.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graha::Graha;
use crate::positions::GrahaLongitudes;

/// Natal vs transit longitude for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitDelta {
    pub graha: Graha,
    pub natal: f64,
    pub transit: f64,
    /// Shortest separation in [0, 180].
    pub delta: f64,
}

/// Shortest separation in [0, 180].
pub fn transit_delta(natal: f64, transit: f64) -> f64 {
    ((transit - natal + 180.0).rem_euclid(360.0) - 180.0).abs()
}

/// Compare natal positions against a transit map.
///
/// Grahas absent from `transits` are skipped. Output is in graha order.
pub fn compare_transits(
    natal: &GrahaLongitudes,
    transits: &BTreeMap<Graha, f64>,
) -> Vec<TransitDelta> {
    natal
        .iter()
        .filter_map(|(graha, natal_lon)| {
            let transit = *transits.get(&graha)?;
            Some(TransitDelta {
                graha,
                natal: natal_lon,
                transit,
                delta: transit_delta(natal_lon, transit),
            })
        })
        .collect()
}

/// Transiting Shani's zone relative to the natal Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SadeSatiZone {
    /// [330, 360) or [0, 30): over or adjacent to the natal Moon.
    OverMoon,
    /// [30, 60): the sign after the Moon.
    Second,
    /// [300, 330): the sign before the Moon.
    Twelfth,
    /// Anywhere else.
    Outside,
}

impl SadeSatiZone {
    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OverMoon => "over natal Moon",
            Self::Second => "second from Moon",
            Self::Twelfth => "twelfth from Moon",
            Self::Outside => "outside Sade-Sati",
        }
    }

    /// Whether Sade-Sati is running.
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

/// Sade-Sati classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SadeSati {
    /// `(transit_shani - natal_moon) mod 360`.
    pub diff: f64,
    pub zone: SadeSatiZone,
    pub label: &'static str,
}

/// Classify transiting Shani against the natal Moon.
pub fn sade_sati(natal_moon_lon: f64, transit_shani_lon: f64) -> SadeSati {
    let diff = (transit_shani_lon - natal_moon_lon).rem_euclid(360.0);
    let zone = if !(30.0..330.0).contains(&diff) {
        SadeSatiZone::OverMoon
    } else if diff < 60.0 {
        SadeSatiZone::Second
    } else if diff >= 300.0 {
        SadeSatiZone::Twelfth
    } else {
        SadeSatiZone::Outside
    };
    SadeSati {
        diff,
        zone,
        label: zone.label(),
    }
}
