//! Result structure of a full chart computation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kundali_base::{
    DashaSnapshot, DashaTimeline, DivisionalPosition, Graha, GrahaLongitudes, Lagna,
    NakshatraInfo, PanchangInfo, RashiChart, SadeSati, StrengthRecord, TransitDelta, YogaReport,
};
use serde::Serialize;

use crate::input::Moment;

/// Echo of the validated birth input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartMeta {
    pub date: String,
    pub time: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub birth_utc: DateTime<Utc>,
    /// Weekday of the civil birth date.
    pub vaar: &'static str,
}

/// The birth Moon in both zodiacs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonInfo {
    /// `sidereal + ayanamsa`, normalized.
    pub tropical: f64,
    pub sidereal: f64,
    pub nakshatra: NakshatraInfo,
}

/// Vimshottari section: the full tree plus the chain active at the transit instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaSection {
    pub timeline: DashaTimeline,
    pub active: DashaSnapshot,
}

/// One varga for every graha and the lagna.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalChart {
    pub divisions: u16,
    /// e.g. `D9 Navamsha`.
    pub label: String,
    pub lagna: DivisionalPosition,
    pub grahas: BTreeMap<Graha, DivisionalPosition>,
}

/// Gochara at the caller-supplied instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitSection {
    pub at: Moment,
    pub current: GrahaLongitudes,
    pub comparison: Vec<TransitDelta>,
    pub sade_sati: SadeSati,
}

/// Complete natal and transit chart.
///
/// Deterministic for identical inputs, settings and transit instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KundaliResult {
    pub meta: ChartMeta,
    pub ayanamsa: f64,
    pub moon: MoonInfo,
    pub lagna: Lagna,
    pub grahas: GrahaLongitudes,
    pub rasi_chart: RashiChart,
    pub panchang: PanchangInfo,
    pub dasha: DashaSection,
    pub strengths: [StrengthRecord; 9],
    pub yogas: YogaReport,
    pub divisional: Vec<DivisionalChart>,
    pub transits: TransitSection,
}
