//! Natal positions: sidereal longitudes of all 9 grahas at one instant.
//!
//! The ephemeris supplies the 7 classical bodies. Rahu and Ketu are mean
//! lunar nodes derived here from the Moon, never requested externally.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::graha::{ALL_GRAHAS, Graha};
use crate::util::{normalize_360, sign_index};

/// Rahu/Ketu longitudes derived from the Moon.
///
/// Rahu = Moon + 180, Ketu = Rahu + 180, both normalized to [0, 360).
pub fn derived_nodes(moon_lon: f64) -> (f64, f64) {
    let rahu = normalize_360(moon_lon + 180.0);
    let ketu = normalize_360(rahu + 180.0);
    (rahu, ketu)
}

/// Sidereal longitudes for all 9 grahas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaLongitudes {
    /// Sidereal longitudes indexed by `Graha::index()` (0-8).
    pub longitudes: [f64; 9],
}

impl GrahaLongitudes {
    /// Build from the 7 classical longitudes in `SAPTA_GRAHAS` order.
    ///
    /// Inputs are normalized; the nodes are derived from the Moon.
    pub fn from_sapta(sapta: [f64; 7]) -> Self {
        let mut longitudes = [0.0; 9];
        for (slot, lon) in longitudes.iter_mut().zip(sapta) {
            *slot = normalize_360(lon);
        }
        let (rahu, ketu) = derived_nodes(longitudes[Graha::Chandra.index() as usize]);
        longitudes[Graha::Rahu.index() as usize] = rahu;
        longitudes[Graha::Ketu.index() as usize] = ketu;
        Self { longitudes }
    }

    /// Get the sidereal longitude for a specific graha.
    pub fn longitude(&self, graha: Graha) -> f64 {
        self.longitudes[graha.index() as usize]
    }

    /// Get the 0-based rashi index (0-11) for a specific graha.
    pub fn rashi_index(&self, graha: Graha) -> u8 {
        sign_index(self.longitude(graha))
    }

    /// Iterate `(graha, longitude)` pairs in `ALL_GRAHAS` order.
    pub fn iter(&self) -> impl Iterator<Item = (Graha, f64)> + '_ {
        ALL_GRAHAS.iter().map(move |&g| (g, self.longitude(g)))
    }
}

impl Serialize for GrahaLongitudes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_GRAHAS.len()))?;
        for (graha, lon) in self.iter() {
            map.serialize_entry(&graha, &lon)?;
        }
        map.end()
    }
}
