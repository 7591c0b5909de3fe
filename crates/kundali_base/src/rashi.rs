//! Rashis (the twelve 30° sidereal signs) and in-sign DMS offsets.

use serde::Serialize;

use crate::util::{degrees_in_sign, sign_index};

/// The 12 rashis, Mesha (Aries) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
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

/// All 12 rashis in zodiacal order.
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

const SANSKRIT_NAMES: [&str; 12] = [
    "Mesha",
    "Vrishabha",
    "Mithuna",
    "Karka",
    "Simha",
    "Kanya",
    "Tula",
    "Vrischika",
    "Dhanu",
    "Makara",
    "Kumbha",
    "Meena",
];

const WESTERN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        SANSKRIT_NAMES[self as usize]
    }

    /// English sign name, as used in chart output.
    pub const fn western_name(self) -> &'static str {
        WESTERN_NAMES[self as usize]
    }

    /// 0 for Mesha through 11 for Meena.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for an index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }
}

/// Index of the `nth` sign counted from `rashi_index`, the sign itself being first.
///
/// `nth_rashi_from(11, 2)` = 0; `nth` of 0 is treated as 12.
pub const fn nth_rashi_from(rashi_index: u8, nth: u8) -> u8 {
    ((rashi_index as u16 + nth as u16 + 11) % 12) as u8
}

/// An angle split into degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    /// 0-59.
    pub minutes: u8,
    /// [0, 60), fractional.
    pub seconds: f64,
}

impl Dms {
    /// Split the magnitude of `deg`.
    pub fn from_degrees(deg: f64) -> Self {
        let d = deg.abs();
        let degrees = d.floor();
        let arcmin = (d - degrees) * 60.0;
        let minutes = arcmin.floor();
        Self {
            degrees: degrees as u16,
            minutes: minutes as u8,
            seconds: (arcmin - minutes) * 60.0,
        }
    }

    /// Back to decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }
}

/// Sign placement of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    pub rashi_index: u8,
    pub name: &'static str,
    pub western_name: &'static str,
    /// Offset within the sign, [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// Sign and in-sign offset of any finite longitude.
pub fn rashi_from_longitude(lon: f64) -> RashiInfo {
    let rashi_index = sign_index(lon);
    let rashi = Rashi::from_index(rashi_index);
    let degrees_in_rashi = degrees_in_sign(lon);
    RashiInfo {
        rashi,
        rashi_index,
        name: rashi.name(),
        western_name: rashi.western_name(),
        degrees_in_rashi,
        dms: Dms::from_degrees(degrees_in_rashi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip_and_wrap() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
        assert_eq!(Rashi::from_index(16), Rashi::Simha);
        assert_eq!(Rashi::Vrischika.name(), "Vrischika");
        assert_eq!(Rashi::Meena.western_name(), "Pisces");
    }

    #[test]
    fn nth_from_counts_inclusively() {
        assert_eq!(nth_rashi_from(0, 1), 0);
        assert_eq!(nth_rashi_from(0, 7), 6);
        assert_eq!(nth_rashi_from(11, 2), 0);
        assert_eq!(nth_rashi_from(4, 12), 3);
        assert_eq!(nth_rashi_from(4, 0), 3);
    }

    #[test]
    fn dms_split() {
        // 23.853 = 23° 51' 10.8"
        let d = Dms::from_degrees(23.853);
        assert_eq!((d.degrees, d.minutes), (23, 51));
        assert!((d.seconds - 10.8).abs() < 0.01);
        assert!((d.to_degrees() - 23.853).abs() < 1e-9);
    }

    #[test]
    fn info_for_wrapped_longitudes() {
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);

        let info = rashi_from_longitude(405.5);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert_eq!(info.western_name, "Taurus");
        assert_eq!((info.dms.degrees, info.dms.minutes), (15, 30));
    }

    #[test]
    fn sign_boundaries() {
        for i in 0..12u8 {
            let info = rashi_from_longitude(i as f64 * 30.0);
            assert_eq!(info.rashi_index, i);
            assert!(info.degrees_in_rashi.abs() < 1e-10);
        }
    }
}
