//! Pure Vedic chart derivations over sidereal longitudes.
//!
//! This crate provides:
//! - Rashi, nakshatra and graha tables with dignity and lordship
//! - Linear ayanamsha model
//! - Whole-sign rasi chart and generic divisional (amsha) charts
//! - Three-level Vimshottari dasha timeline
//! - Strength scoring, yoga detection, panchang indices and transits
//!
//! Every function here is total over finite inputs; nothing returns an error.

pub mod amsha;
pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod graha;
pub mod nakshatra;
pub mod panchang;
pub mod positions;
pub mod rashi;
pub mod strength;
pub mod transit;
pub mod util;
pub mod yoga;

pub use amsha::{
    Amsha, DivisionalPosition, SHODASHAVARGA, amsha_position, divisional, divisional_label,
};
pub use ayanamsha::{LinearAyanamsha, fractional_year};
pub use bhava::{
    GrahaPlacement, KENDRA_HOUSES, Lagna, RashiChart, house_offset, is_kendra, rasi_chart,
    whole_sign_house,
};
pub use dasha::{
    DashaBalance, DashaLevel, DashaPeriod, DashaSnapshot, DashaTimeline, SubPeriodMethod,
    vimshottari_balance, vimshottari_snapshot, vimshottari_timeline,
};
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, TARA_GRAHAS, rashi_lord};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use panchang::{PanchangInfo, Paksha, panchang, vaar_name};
pub use positions::{GrahaLongitudes, derived_nodes};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, nth_rashi_from, rashi_from_longitude};
pub use strength::{StrengthConfig, StrengthRecord, all_strengths, graha_strength};
pub use transit::{SadeSati, SadeSatiZone, TransitDelta, compare_transits, sade_sati};
pub use util::{angular_distance, degrees_in_sign, normalize_360, sign_index};
pub use yoga::{YogaConfig, YogaKind, YogaReport, detect_yogas};
