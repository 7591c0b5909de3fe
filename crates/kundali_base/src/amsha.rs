//! Vargas: N-fold harmonic charts.
//!
//! Each varga divides the 30-degree rashi span into N equal parts. Parts are
//! laid out cyclically through the zodiac: part `p` of rashi `r` maps to
//! rashi `(r * N + p) mod 12`, and the position within the part is scaled
//! back up to a full 30 degrees.

use std::num::NonZeroU16;

use serde::Serialize;

use crate::rashi::Rashi;
use crate::util::normalize_360;

/// Largest f64 below 30.0; keeps the scaled offset inside its rashi.
const MAX_OFFSET: f64 = 29.999_999_999_999_996;

/// Position of a longitude in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DivisionalPosition {
    /// Harmonic factor N.
    pub divisions: u16,
    /// Divisional longitude in [0, 360).
    pub longitude: f64,
    /// Divisional rashi index 0-11.
    pub sign_index: u8,
    pub sign: Rashi,
    /// English sign name.
    pub sign_name: &'static str,
    /// Offset within the divisional rashi, [0, 30).
    pub offset: f64,
}

/// Transform a sidereal longitude through an N-fold division.
///
/// Total over every finite longitude and every N >= 1.
pub fn divisional(sidereal_lon: f64, divisions: NonZeroU16) -> DivisionalPosition {
    let n = divisions.get();
    let lon = normalize_360(sidereal_lon);
    let rashi_idx = ((lon / 30.0).floor() as u16).min(11);
    let pos_in_rashi = lon - rashi_idx as f64 * 30.0;

    // offset * N spans [0, 30N); each 30 of it is one part
    let scaled = pos_in_rashi * n as f64;
    let part_idx = ((scaled / 30.0).floor() as u16).min(n - 1);
    let offset = (scaled - part_idx as f64 * 30.0).clamp(0.0, MAX_OFFSET);

    let sign_index = ((rashi_idx as u32 * n as u32 + part_idx as u32) % 12) as u8;
    let sign = Rashi::from_index(sign_index);

    DivisionalPosition {
        divisions: n,
        longitude: (sign_index as f64 * 30.0 + offset) % 360.0,
        sign_index,
        sign,
        sign_name: sign.western_name(),
        offset,
    }
}

/// Transform one longitude through a named amsha.
pub fn amsha_position(sidereal_lon: f64, amsha: Amsha) -> DivisionalPosition {
    divisional(sidereal_lon, amsha.harmonic())
}

/// The sixteen classical vargas (Shodashavarga) from BPHS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Amsha {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// Catalogue order, D1 first.
pub const SHODASHAVARGA: [Amsha; 16] = [
    Amsha::D1,
    Amsha::D2,
    Amsha::D3,
    Amsha::D4,
    Amsha::D7,
    Amsha::D9,
    Amsha::D10,
    Amsha::D12,
    Amsha::D16,
    Amsha::D20,
    Amsha::D24,
    Amsha::D27,
    Amsha::D30,
    Amsha::D40,
    Amsha::D45,
    Amsha::D60,
];

impl Amsha {
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// Divisions as a non-zero harmonic.
    pub fn harmonic(self) -> NonZeroU16 {
        NonZeroU16::new(self.divisions()).unwrap_or(NonZeroU16::MIN)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
            Self::D16 => "Shodashamsha",
            Self::D20 => "Vimshamsha",
            Self::D24 => "Chaturvimshamsha",
            Self::D27 => "Bhamsha",
            Self::D30 => "Trimshamsha",
            Self::D40 => "Khavedamsha",
            Self::D45 => "Akshavedamsha",
            Self::D60 => "Shashtiamsha",
        }
    }

    /// The catalogued varga with `n` divisions, if any.
    pub fn from_divisions(n: u16) -> Option<Amsha> {
        SHODASHAVARGA.iter().copied().find(|a| a.divisions() == n)
    }
}

/// Chart label for a harmonic: the Sanskrit varga name when catalogued,
/// otherwise `D<n>`.
pub fn divisional_label(divisions: NonZeroU16) -> String {
    match Amsha::from_divisions(divisions.get()) {
        Some(a) => format!("D{} {}", divisions, a.name()),
        None => format!("D{divisions}"),
    }
}
