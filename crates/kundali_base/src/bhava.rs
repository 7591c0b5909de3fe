//! Whole-sign house (bhava) assignment: the rasi chart.
//!
//! The lagna's sign is house 1; every following sign is the next house.
//! A graha in sign `s` with lagna sign `l` sits in house
//! `((s - l + 12) mod 12) + 1`.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::graha::{ALL_GRAHAS, Graha};
use crate::positions::GrahaLongitudes;
use crate::rashi::{Dms, Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// The kendra (angular) houses.
pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// House number (1-12) of a sign counted from the lagna sign.
pub fn whole_sign_house(lagna_sign_index: u8, sign_index: u8) -> u8 {
    ((sign_index as i16 - lagna_sign_index as i16).rem_euclid(12) + 1) as u8
}

/// Whether a house number is a kendra.
pub fn is_kendra(house: u8) -> bool {
    KENDRA_HOUSES.contains(&house)
}

/// House `step` places away from `house`, wrapping within 1-12.
///
/// `house_offset(1, -1)` = 12, `house_offset(12, 1)` = 1.
pub fn house_offset(house: u8, step: i8) -> u8 {
    ((house as i16 - 1 + step as i16).rem_euclid(12) + 1) as u8
}

/// Lagna (ascendant) degree and sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lagna {
    pub longitude: f64,
    pub sign_index: u8,
    pub sign: Rashi,
    pub sign_name: &'static str,
    pub dms: Dms,
}

impl Lagna {
    pub fn from_longitude(longitude: f64) -> Self {
        let longitude = normalize_360(longitude);
        let info = rashi_from_longitude(longitude);
        Self {
            longitude,
            sign_index: info.rashi_index,
            sign: info.rashi,
            sign_name: info.western_name,
            dms: info.dms,
        }
    }
}

/// Placement of one graha in the rasi chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaPlacement {
    pub graha: Graha,
    pub longitude: f64,
    pub sign_index: u8,
    pub sign: Rashi,
    /// English sign name.
    pub sign_name: &'static str,
    pub offset_in_sign: f64,
    pub dms: Dms,
    /// House number, 1-12.
    pub house: u8,
}

/// Rasi (D1) chart: per-graha placements and the house → grahas inverse map.
///
/// Every graha appears in exactly one house. All 12 houses are always
/// present; unoccupied ones are empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RashiChart {
    pub lagna: Lagna,
    /// Placements indexed by `Graha::index()`.
    pub placements: [GrahaPlacement; 9],
    /// Occupants per house; index 0 is house 1.
    #[serde(serialize_with = "serialize_houses")]
    pub houses: [Vec<Graha>; 12],
}

impl RashiChart {
    /// Placement record for a graha.
    pub fn placement(&self, graha: Graha) -> &GrahaPlacement {
        &self.placements[graha.index() as usize]
    }

    /// House number (1-12) occupied by a graha.
    pub fn house_of(&self, graha: Graha) -> u8 {
        self.placement(graha).house
    }

    /// Grahas in a house (1-12), in graha order. Out-of-range houses are empty.
    pub fn occupants(&self, house: u8) -> &[Graha] {
        match house {
            1..=12 => &self.houses[(house - 1) as usize],
            _ => &[],
        }
    }
}

/// Build the rasi chart from the lagna degree and graha longitudes.
pub fn rasi_chart(lagna_longitude: f64, positions: &GrahaLongitudes) -> RashiChart {
    let lagna = Lagna::from_longitude(lagna_longitude);
    let mut houses: [Vec<Graha>; 12] = Default::default();

    let placements = ALL_GRAHAS.map(|graha| {
        let longitude = positions.longitude(graha);
        let info = rashi_from_longitude(longitude);
        let house = whole_sign_house(lagna.sign_index, info.rashi_index);
        houses[(house - 1) as usize].push(graha);
        GrahaPlacement {
            graha,
            longitude,
            sign_index: info.rashi_index,
            sign: info.rashi,
            sign_name: info.western_name,
            offset_in_sign: info.degrees_in_rashi,
            dms: info.dms,
            house,
        }
    });

    RashiChart {
        lagna,
        placements,
        houses,
    }
}

fn serialize_houses<S: Serializer>(houses: &[Vec<Graha>; 12], s: S) -> Result<S::Ok, S::Error> {
    let mut map = s.serialize_map(Some(12))?;
    for (i, occupants) in houses.iter().enumerate() {
        map.serialize_entry(&(i + 1), occupants)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_sign_as_lagna_is_house_1() {
        assert_eq!(whole_sign_house(3, 3), 1);
        assert_eq!(whole_sign_house(11, 0), 2);
        assert_eq!(whole_sign_house(0, 11), 12);
    }

    #[test]
    fn house_offset_wraps() {
        assert_eq!(house_offset(1, -1), 12);
        assert_eq!(house_offset(12, 1), 1);
        assert_eq!(house_offset(5, 1), 6);
    }

    #[test]
    fn chart_houses_partition_grahas() {
        let pos = GrahaLongitudes::from_sapta([15.0, 95.0, 200.0, 20.0, 250.0, 45.0, 310.0]);
        let chart = rasi_chart(100.0, &pos);
        assert_eq!(chart.lagna.sign, Rashi::Karka);
        let total: usize = chart.houses.iter().map(Vec::len).sum();
        assert_eq!(total, 9);
        for g in ALL_GRAHAS {
            let h = chart.house_of(g);
            assert!(chart.occupants(h).contains(&g));
        }
        // Moon at 95 shares the lagna sign
        assert_eq!(chart.house_of(Graha::Chandra), 1);
        // Sun at 15 (Aries) is 10th from Cancer
        assert_eq!(chart.house_of(Graha::Surya), 10);
        assert_eq!(chart.placement(Graha::Surya).sign_name, "Aries");
        assert!(chart.occupants(0).is_empty());
    }

    #[test]
    fn empty_houses_serialize_present() {
        let pos = GrahaLongitudes::from_sapta([0.0; 7]);
        let chart = rasi_chart(0.0, &pos);
        let json = serde_json::to_value(&chart).unwrap();
        let houses = json["houses"].as_object().unwrap();
        assert_eq!(houses.len(), 12);
        assert_eq!(houses["1"].as_array().unwrap().len(), 8);
        assert_eq!(houses["7"].as_array().unwrap().len(), 1);
        assert!(houses["2"].as_array().unwrap().is_empty());
    }
}
