//! Yoga (planetary combination) detection over a rasi chart.
//!
//! Three independent detectors, each a pure function of the chart:
//! - Gajakesari: Moon and Guru in kendra from each other.
//! - Pancha Mahapurusha: a tara graha in its own sign and in a kendra house.
//! - Kemadruma: the Moon with no graha in the 2nd/12th from it and none
//!   within the conjunction orb.
//!
//! Every detector returns its evidence alongside the verdict.

use serde::{Deserialize, Serialize};

use crate::bhava::{RashiChart, house_offset, is_kendra};
use crate::graha::{ALL_GRAHAS, Graha, TARA_GRAHAS};
use crate::rashi::Rashi;
use crate::util::angular_distance;

/// Tunable yoga thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YogaConfig {
    /// Orb (deg, exclusive) within which a graha counts as conjunct the Moon.
    pub conjunction_orb_deg: f64,
    /// Leave Rahu/Ketu out of the Kemadruma isolation test.
    pub isolation_ignores_nodes: bool,
}

impl Default for YogaConfig {
    fn default() -> Self {
        Self {
            conjunction_orb_deg: 8.0,
            isolation_ignores_nodes: false,
        }
    }
}

/// Named yoga findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum YogaKind {
    Gajakesari,
    Ruchaka,
    Bhadra,
    Hamsa,
    Malavya,
    Shasha,
    Kemadruma,
}

impl YogaKind {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gajakesari => "Gajakesari Yoga",
            Self::Ruchaka => "Ruchaka Yoga",
            Self::Bhadra => "Bhadra Yoga",
            Self::Hamsa => "Hamsa Yoga",
            Self::Malavya => "Malavya Yoga",
            Self::Shasha => "Shasha Yoga",
            Self::Kemadruma => "Kemadruma Yoga",
        }
    }
}

/// Mahapurusha yoga formed by a tara graha, if any.
pub const fn mahapurusha_kind(graha: Graha) -> Option<YogaKind> {
    match graha {
        Graha::Mangal => Some(YogaKind::Ruchaka),
        Graha::Buddh => Some(YogaKind::Bhadra),
        Graha::Guru => Some(YogaKind::Hamsa),
        Graha::Shukra => Some(YogaKind::Malavya),
        Graha::Shani => Some(YogaKind::Shasha),
        _ => None,
    }
}

/// Whether two houses are in kendra from each other (distance 0, 3, 6 or 9).
pub fn kendra_relation(house_a: u8, house_b: u8) -> bool {
    let distance = (house_a as i16 - house_b as i16).unsigned_abs() % 12;
    matches!(distance, 0 | 3 | 6 | 9)
}

/// Gajakesari evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GajakesariCheck {
    pub moon_house: u8,
    pub guru_house: u8,
    /// `|moon_house - guru_house| mod 12`.
    pub house_distance: u8,
    pub present: bool,
}

/// Gajakesari: Moon and Guru in kendra from each other.
pub fn gajakesari(chart: &RashiChart) -> GajakesariCheck {
    let moon_house = chart.house_of(Graha::Chandra);
    let guru_house = chart.house_of(Graha::Guru);
    GajakesariCheck {
        moon_house,
        guru_house,
        house_distance: ((moon_house as i16 - guru_house as i16).unsigned_abs() % 12) as u8,
        present: kendra_relation(moon_house, guru_house),
    }
}

/// One Pancha Mahapurusha match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MahapurushaMatch {
    pub kind: YogaKind,
    pub graha: Graha,
    pub house: u8,
    pub sign: Rashi,
    pub sign_name: &'static str,
}

/// Pancha Mahapurusha: each tara graha in its own sign and a kendra house.
pub fn pancha_mahapurusha(chart: &RashiChart) -> Vec<MahapurushaMatch> {
    TARA_GRAHAS
        .iter()
        .filter_map(|&graha| {
            let p = chart.placement(graha);
            if !(graha.owns(p.sign) && is_kendra(p.house)) {
                return None;
            }
            Some(MahapurushaMatch {
                kind: mahapurusha_kind(graha)?,
                graha,
                house: p.house,
                sign: p.sign,
                sign_name: p.sign_name,
            })
        })
        .collect()
}

/// Kemadruma evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KemadrumaCheck {
    pub moon_house: u8,
    /// 2nd house counted from the Moon.
    pub second_from_moon: u8,
    /// 12th house counted from the Moon.
    pub twelfth_from_moon: u8,
    /// Grahas occupying the 2nd or 12th from the Moon.
    pub adjacent: Vec<Graha>,
    /// Grahas within the conjunction orb of the Moon.
    pub conjunct: Vec<Graha>,
    pub present: bool,
}

/// Kemadruma: the Moon isolated by house and by longitude.
pub fn kemadruma(chart: &RashiChart, config: &YogaConfig) -> KemadrumaCheck {
    let moon = chart.placement(Graha::Chandra);
    let second_from_moon = house_offset(moon.house, 1);
    let twelfth_from_moon = house_offset(moon.house, -1);

    let others = ALL_GRAHAS
        .iter()
        .copied()
        .filter(|&g| g != Graha::Chandra)
        .filter(|g| !(config.isolation_ignores_nodes && g.is_node()));

    let mut adjacent = Vec::new();
    let mut conjunct = Vec::new();
    for graha in others {
        let p = chart.placement(graha);
        if p.house == second_from_moon || p.house == twelfth_from_moon {
            adjacent.push(graha);
        }
        if angular_distance(p.longitude, moon.longitude) < config.conjunction_orb_deg {
            conjunct.push(graha);
        }
    }

    let present = adjacent.is_empty() && conjunct.is_empty();
    KemadrumaCheck {
        moon_house: moon.house,
        second_from_moon,
        twelfth_from_moon,
        adjacent,
        conjunct,
        present,
    }
}

/// Raw evidence from every detector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaDiagnostics {
    pub gajakesari: GajakesariCheck,
    pub mahapurusha: Vec<MahapurushaMatch>,
    pub kemadruma: KemadrumaCheck,
}

/// Detected yogas plus diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaReport {
    pub findings: Vec<YogaKind>,
    pub diagnostics: YogaDiagnostics,
}

impl YogaReport {
    /// Display names of the findings, in detection order.
    pub fn names(&self) -> Vec<&'static str> {
        self.findings.iter().map(|k| k.name()).collect()
    }
}

/// Run all detectors over a chart.
pub fn detect_yogas(chart: &RashiChart, config: &YogaConfig) -> YogaReport {
    let gaja = gajakesari(chart);
    let mahapurusha = pancha_mahapurusha(chart);
    let kema = kemadruma(chart, config);

    let mut findings = Vec::new();
    if gaja.present {
        findings.push(YogaKind::Gajakesari);
    }
    findings.extend(mahapurusha.iter().map(|m| m.kind));
    if kema.present {
        findings.push(YogaKind::Kemadruma);
    }

    YogaReport {
        findings,
        diagnostics: YogaDiagnostics {
            gajakesari: gaja,
            mahapurusha,
            kemadruma: kema,
        },
    }
}
