//! Birth balance for the Vimshottari dasha.
//!
//! The Moon's position within its nakshatra determines how much of the
//! first mahadasha has already elapsed at birth.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::{normalize_360, round4};

use super::types::{DAYS_PER_MONTH, calendar_days};
use super::vimshottari_data::{graha_years, starting_ruler};

/// Remaining first-mahadasha span at birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaBalance {
    /// Ruler of the first mahadasha.
    pub ruler: Graha,
    /// Birth nakshatra, 0-26.
    pub nakshatra_index: u8,
    /// Remaining years, unrounded.
    pub remaining_years: f64,
    pub years: u32,
    pub months: u32,
    pub days: u32,
    /// Share of the nakshatra traversed, percent, 4 decimals.
    pub completed_percent: f64,
    /// Share left, percent, 4 decimals.
    pub remaining_percent: f64,
}

impl DashaBalance {
    /// Whole days of the first mahadasha: `floor(y*365.25 + m*30.44 + d)`.
    pub fn span_days(&self) -> i64 {
        calendar_days(self.years as f64, self.months as f64, self.days as f64)
    }
}

/// Compute nakshatra birth balance.
///
/// Returns `(nakshatra_index, elapsed_fraction)`, the fraction of the
/// nakshatra already traversed in [0, 1).
pub fn nakshatra_elapsed(moon_sidereal_lon: f64) -> (u8, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let position_in_nak = lon - (nak_idx as f64) * NAKSHATRA_SPAN_27;
    (nak_idx, position_in_nak / NAKSHATRA_SPAN_27)
}

/// Vimshottari balance at birth from the birth Moon's sidereal longitude.
pub fn vimshottari_balance(moon_sidereal_lon: f64) -> DashaBalance {
    let (nak_idx, elapsed) = nakshatra_elapsed(moon_sidereal_lon);
    let ruler = starting_ruler(nak_idx);
    let remaining_years = graha_years(ruler) as f64 * (1.0 - elapsed);

    let years = remaining_years.floor();
    let month_part = (remaining_years - years) * 12.0;
    let months = month_part.floor();
    let days = ((month_part - months) * DAYS_PER_MONTH).floor();

    DashaBalance {
        ruler,
        nakshatra_index: nak_idx,
        remaining_years,
        years: years as u32,
        months: months as u32,
        days: days as u32,
        completed_percent: round4(elapsed * 100.0),
        remaining_percent: round4((1.0 - elapsed) * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_at_start_of_nakshatra() {
        // Moon exactly at 0 deg (start of Ashwini): full Ketu period
        let b = vimshottari_balance(0.0);
        assert_eq!(b.ruler, Graha::Ketu);
        assert_eq!(b.nakshatra_index, 0);
        assert!((b.remaining_years - 7.0).abs() < 1e-10);
        assert_eq!((b.years, b.months, b.days), (7, 0, 0));
        assert_eq!(b.span_days(), 2556);
    }

    #[test]
    fn balance_at_midpoint() {
        // Midpoint of Bharani: half of Shukra's 20 years
        let mid = NAKSHATRA_SPAN_27 * 1.5;
        let b = vimshottari_balance(mid);
        assert_eq!(b.ruler, Graha::Shukra);
        assert!((b.remaining_years - 10.0).abs() < 1e-9);
        assert!((b.completed_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn balance_split_into_ymd() {
        // 1/4 into Krittika: Sun 6 * 0.75 = 4.5 years -> 4y 6m 0d
        let b = vimshottari_balance(NAKSHATRA_SPAN_27 * 2.25);
        assert_eq!(b.ruler, Graha::Surya);
        assert_eq!(b.years, 4);
        assert_eq!(b.months, 6);
        assert!(b.days <= 1);
    }

    #[test]
    fn balance_near_end_is_small() {
        let b = vimshottari_balance(NAKSHATRA_SPAN_27 - 0.001);
        assert_eq!(b.ruler, Graha::Ketu);
        assert_eq!(b.years, 0);
        assert!(b.remaining_years < 0.001);
    }

    #[test]
    fn balance_wraps_negative() {
        // -1 -> 359 deg -> Revati (26) -> Buddh
        let b = vimshottari_balance(-1.0);
        assert_eq!(b.nakshatra_index, 26);
        assert_eq!(b.ruler, Graha::Buddh);
    }

    #[test]
    fn moon_at_200_starts_with_guru() {
        let b = vimshottari_balance(200.0);
        assert_eq!(b.nakshatra_index, 15);
        assert_eq!(b.ruler, Graha::Guru);
        assert!(b.completed_percent.abs() < 1e-6);
    }
}
