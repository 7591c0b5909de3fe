//! Nakshatras: 27 equal lunar mansions of 13°20', four padas of 3°20' each.

use serde::Serialize;

use crate::util::{normalize_360, round4};

/// 360/27 degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// A quarter nakshatra.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// Ashwini (starting at 0° Mesha) through Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

const NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// 0 for Ashwini through 26 for Revati.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Lunar mansion placement of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub name: &'static str,
    pub nakshatra_index: u8,
    /// 1-4.
    pub pada: u8,
    /// [0, 13°20').
    pub degrees_in_nakshatra: f64,
    /// [0, 3°20').
    pub degrees_in_pada: f64,
    /// Share of the nakshatra already traversed, percent, 4 decimals.
    pub completed_percent: f64,
    /// Share still to traverse, percent, 4 decimals.
    pub remaining_percent: f64,
}

/// Nakshatra, pada and progress for a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN_27;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    let degrees_in_pada = degrees_in_nakshatra - (pada_idx as f64) * PADA_SPAN;
    let completed = degrees_in_nakshatra / NAKSHATRA_SPAN_27;
    let nakshatra = ALL_NAKSHATRAS_27[nak_idx as usize];

    NakshatraInfo {
        nakshatra,
        name: nakshatra.name(),
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
        completed_percent: round4(completed * 100.0),
        remaining_percent: round4((1.0 - completed) * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_zodiac_is_ashwini_pada_1() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        assert!(info.completed_percent.abs() < 1e-10);
        assert!((info.remaining_percent - 100.0).abs() < 1e-10);
    }

    #[test]
    fn end_of_zodiac_is_revati_pada_4() {
        let info = nakshatra_from_longitude(359.99);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.nakshatra_index, 26);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn rohini_pada_2() {
        // Rohini starts at 40.0; pada 2 covers [43.333, 46.667)
        let info = nakshatra_from_longitude(45.0);
        assert_eq!(info.nakshatra, Nakshatra::Rohini);
        assert_eq!(info.pada, 2);
        assert!((info.degrees_in_nakshatra - 5.0).abs() < 1e-10);
        assert!((info.completed_percent - 37.5).abs() < 1e-10);
        assert!((info.remaining_percent - 62.5).abs() < 1e-10);
    }

    #[test]
    fn percentages_are_rounded() {
        let info = nakshatra_from_longitude(1.0);
        // 1/13.333 = 7.5%
        assert!((info.completed_percent - 7.5).abs() < 1e-10);
        let info = nakshatra_from_longitude(2.0 / 3.0);
        assert_eq!(info.completed_percent, 5.0);
    }

    #[test]
    fn all_padas_within_range() {
        for i in 0..3600 {
            let info = nakshatra_from_longitude(i as f64 * 0.1);
            assert!((1..=4).contains(&info.pada));
            assert!(info.nakshatra_index < 27);
            assert!(info.degrees_in_pada < PADA_SPAN + 1e-9);
        }
    }

    #[test]
    fn names_match_enum() {
        for n in ALL_NAKSHATRAS_27 {
            let info = nakshatra_from_longitude(n.index() as f64 * NAKSHATRA_SPAN_27 + 1.0);
            assert_eq!(info.nakshatra, n);
            assert_eq!(info.name, n.name());
        }
    }
}
