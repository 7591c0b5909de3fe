//! The nine grahas with their exaltation, own-sign and lordship tables.

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// Weekday order, nodes last. Chart output iterates in this order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Bodies whose longitudes come from the ephemeris.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Candidates for the Pancha Mahapurusha yogas.
pub const TARA_GRAHAS: [Graha; 5] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Planet name; the nodes keep their Sanskrit names.
    pub const fn english_name(self) -> &'static str {
        ["Sun", "Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn", "Rahu", "Ketu"]
            [self as usize]
    }

    /// Position in [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// True for the two lunar nodes, which have no physical body.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Degree within the exaltation sign at which the graha is deepest exalted.
    ///
    /// Returns None for Rahu/Ketu, which carry no exaltation point here.
    pub const fn exaltation_degree(self) -> Option<f64> {
        match self {
            Self::Surya => Some(10.0),
            Self::Chandra => Some(3.0),
            Self::Mangal => Some(28.0),
            Self::Buddh => Some(15.0),
            Self::Guru => Some(5.0),
            Self::Shukra => Some(27.0),
            Self::Shani => Some(20.0),
            Self::Rahu | Self::Ketu => None,
        }
    }

    /// Sign holding the exaltation point. Debilitation is the seventh from it.
    pub const fn exaltation_rashi(self) -> Option<Rashi> {
        match self {
            Self::Surya => Some(Rashi::Mesha),
            Self::Chandra => Some(Rashi::Vrishabha),
            Self::Mangal => Some(Rashi::Makara),
            Self::Buddh => Some(Rashi::Kanya),
            Self::Guru => Some(Rashi::Karka),
            Self::Shukra => Some(Rashi::Meena),
            Self::Shani => Some(Rashi::Tula),
            Self::Rahu | Self::Ketu => None,
        }
    }

    /// Degree within the debilitation sign, `(E + 180) mod 30`.
    pub fn debilitation_degree(self) -> Option<f64> {
        self.exaltation_degree().map(|e| (e + 180.0) % 30.0)
    }

    /// The pair of signs this graha owns.
    ///
    /// Sun and Moon own a single sign each, repeated. Nodes own none.
    pub const fn own_signs(self) -> Option<[Rashi; 2]> {
        match self {
            Self::Surya => Some([Rashi::Simha, Rashi::Simha]),
            Self::Chandra => Some([Rashi::Karka, Rashi::Karka]),
            Self::Mangal => Some([Rashi::Mesha, Rashi::Vrischika]),
            Self::Buddh => Some([Rashi::Mithuna, Rashi::Kanya]),
            Self::Guru => Some([Rashi::Dhanu, Rashi::Meena]),
            Self::Shukra => Some([Rashi::Vrishabha, Rashi::Tula]),
            Self::Shani => Some([Rashi::Makara, Rashi::Kumbha]),
            Self::Rahu | Self::Ketu => None,
        }
    }

    /// Whether `rashi` is one of this graha's own signs.
    pub fn owns(self, rashi: Rashi) -> bool {
        self.own_signs().is_some_and(|pair| pair.contains(&rashi))
    }
}

/// Sign lord. Rahu and Ketu rule nothing.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}
