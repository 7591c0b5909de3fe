//! Panchang indices from Sun and Moon sidereal longitudes.
//!
//! - Tithi: `floor(((moon - sun) mod 360) / 12)`, 0-29
//! - Yoga: `floor(((sun + moon) mod 360) / (360/27))`, 0-26
//! - Karana: `(tithi * 2) mod 60`, slot 0-59
//!
//! Names follow the traditional tables; the weekday (vaar) comes from the
//! civil birth date.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Span of one tithi in degrees of Moon-Sun elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Span of one yoga in degrees of Sun+Moon sum.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

const SHUKLA_TITHIS: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

const KRISHNA_TITHIS: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Amavasya",
];

/// The 27 yogas from Vishkambha to Vaidhriti.
pub const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// The 7 movable (chara) karanas, repeated through slots 1-56.
pub const MOVABLE_KARANAS: [&str; 7] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Garaja", "Vanija", "Vishti",
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing (tithi 0-14).
    Shukla,
    /// Waning (tithi 15-29).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi index (0-29) from Sun and Moon longitudes.
pub fn tithi_index(sun_lon: f64, moon_lon: f64) -> u8 {
    let elongation = (moon_lon - sun_lon).rem_euclid(360.0);
    ((elongation / TITHI_SEGMENT_DEG).floor() as u8).min(29)
}

/// Yoga index (0-26) from Sun and Moon longitudes.
pub fn yoga_index(sun_lon: f64, moon_lon: f64) -> u8 {
    let sum = (sun_lon + moon_lon).rem_euclid(360.0);
    ((sum / YOGA_SEGMENT_DEG).floor() as u8).min(26)
}

/// Karana slot (0-59) for a tithi: `(tithi * 2) mod 60`.
pub fn karana_index(tithi_index: u8) -> u8 {
    ((tithi_index as u16 * 2) % 60) as u8
}

/// Paksha of a tithi.
pub fn paksha(tithi_index: u8) -> Paksha {
    if tithi_index < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    }
}

/// Tithi name within its paksha.
pub fn tithi_name(tithi_index: u8) -> &'static str {
    let i = (tithi_index % 30) as usize;
    if i < 15 {
        SHUKLA_TITHIS[i]
    } else {
        KRISHNA_TITHIS[i - 15]
    }
}

/// Yoga name for an index (wraps modulo 27).
pub fn yoga_name(yoga_index: u8) -> &'static str {
    YOGA_NAMES[(yoga_index % 27) as usize]
}

/// Karana name for a slot: 0 Kimstughna, 1-56 the movable cycle,
/// 57 Shakuni, 58 Chatushpada, 59 Naga.
pub fn karana_name(karana_index: u8) -> &'static str {
    match karana_index % 60 {
        0 => "Kimstughna",
        k @ 1..=56 => MOVABLE_KARANAS[((k - 1) % 7) as usize],
        57 => "Shakuni",
        58 => "Chatushpada",
        _ => "Naga",
    }
}

/// Weekday name (vaar) of a civil date.
pub fn vaar_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "Ravivara",
        Weekday::Mon => "Somavara",
        Weekday::Tue => "Mangalavara",
        Weekday::Wed => "Budhavara",
        Weekday::Thu => "Guruvara",
        Weekday::Fri => "Shukravara",
        Weekday::Sat => "Shanivara",
    }
}

/// Panchang indices and names for one Sun/Moon pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanchangInfo {
    pub tithi: u8,
    pub tithi_name: &'static str,
    pub paksha: Paksha,
    pub yoga: u8,
    pub yoga_name: &'static str,
    pub karana: u8,
    pub karana_name: &'static str,
}

/// Compute the panchang indices for a Sun/Moon pair.
pub fn panchang(sun_lon: f64, moon_lon: f64) -> PanchangInfo {
    let tithi = tithi_index(sun_lon, moon_lon);
    let yoga = yoga_index(sun_lon, moon_lon);
    let karana = karana_index(tithi);
    PanchangInfo {
        tithi,
        tithi_name: tithi_name(tithi),
        paksha: paksha(tithi),
        yoga,
        yoga_name: yoga_name(yoga),
        karana,
        karana_name: karana_name(karana),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_10_moon_100_is_tithi_7() {
        let p = panchang(10.0, 100.0);
        assert_eq!(p.tithi, 7);
        assert_eq!(p.tithi_name, "Ashtami");
        assert_eq!(p.paksha, Paksha::Shukla);
        assert_eq!(p.karana, 14);
        // 110 / 13.333 = 8.25
        assert_eq!(p.yoga, 8);
        assert_eq!(p.yoga_name, "Shula");
    }

    #[test]
    fn tithi_wraps_when_moon_behind_sun() {
        // elongation 350 -> tithi 29 (Amavasya)
        assert_eq!(tithi_index(10.0, 0.0), 29);
        assert_eq!(tithi_name(29), "Amavasya");
        assert_eq!(paksha(29), Paksha::Krishna);
        assert_eq!(karana_index(29), 58);
    }

    #[test]
    fn full_moon() {
        let p = panchang(0.0, 174.0);
        assert_eq!(p.tithi, 14);
        assert_eq!(p.tithi_name, "Purnima");
        let p = panchang(0.0, 180.0);
        assert_eq!(p.tithi, 15);
        assert_eq!(p.paksha, Paksha::Krishna);
        assert_eq!(p.karana, 30);
    }

    #[test]
    fn karana_slot_names() {
        assert_eq!(karana_name(0), "Kimstughna");
        assert_eq!(karana_name(1), "Bava");
        assert_eq!(karana_name(7), "Vishti");
        assert_eq!(karana_name(8), "Bava");
        assert_eq!(karana_name(56), "Vishti");
        assert_eq!(karana_name(57), "Shakuni");
        assert_eq!(karana_name(58), "Chatushpada");
        assert_eq!(karana_name(59), "Naga");
    }

    #[test]
    fn indices_in_range() {
        for s in (0..360).step_by(7) {
            for m in (0..360).step_by(11) {
                let p = panchang(s as f64, m as f64 + 0.5);
                assert!(p.tithi < 30);
                assert!(p.yoga < 27);
                assert!(p.karana < 60 && p.karana % 2 == 0);
            }
        }
    }

    #[test]
    fn yoga_last_segment() {
        assert_eq!(yoga_index(359.0, 0.9), 26);
        assert_eq!(yoga_name(26), "Vaidhriti");
    }

    #[test]
    fn vaar_from_date() {
        // 2000-01-01 was a Saturday
        assert_eq!(vaar_name(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()), "Shanivara");
    }
}
