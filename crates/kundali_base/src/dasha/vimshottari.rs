//! Vimshottari dasha engine.
//!
//! - Level 0: the balance of the birth mahadasha, then the remaining eight
//!   rulers at full length, chained end-to-end from birth.
//! - Levels 1-2: proportional sub-periods via [`expand_to_leaf`].
//! - Snapshot: the chain of periods active at a given instant.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::balance::{DashaBalance, vimshottari_balance};
use super::subperiod::{SubPeriodMethod, expand_to_leaf, proportional_children};
use super::types::{
    ActivePeriod, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot, add_days,
};
use super::vimshottari_data::{VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_YEARS, sequence_position};

/// Full Vimshottari timeline: birth balance plus the three-level tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaTimeline {
    pub birth: NaiveDateTime,
    pub method: SubPeriodMethod,
    pub balance: DashaBalance,
    pub mahadashas: Vec<DashaPeriod>,
}

impl DashaTimeline {
    /// End of the last mahadasha.
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.mahadashas.last().map(|p| p.end)
    }

    /// Active periods at `at`, outermost first.
    pub fn snapshot(&self, at: NaiveDateTime) -> DashaSnapshot {
        DashaSnapshot {
            query: at,
            periods: active_chain(&self.mahadashas, at),
        }
    }
}

/// Generate the nine level-0 (mahadasha) periods, without sub-periods.
pub fn vimshottari_level0(birth: NaiveDateTime, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let balance = vimshottari_balance(moon_sidereal_lon);
    level0_from_balance(birth, &balance)
}

fn level0_from_balance(birth: NaiveDateTime, balance: &DashaBalance) -> Vec<DashaPeriod> {
    let start_idx = sequence_position(balance.ruler);
    let mut periods = Vec::with_capacity(9);
    let mut cursor = birth;

    for offset in 0..9 {
        let seq_idx = (start_idx + offset) % 9;
        let span_days = if offset == 0 {
            balance.span_days()
        } else {
            (VIMSHOTTARI_YEARS[seq_idx] as f64 * DAYS_PER_YEAR).floor() as i64
        };
        let end = add_days(cursor, span_days);
        periods.push(DashaPeriod {
            ruler: VIMSHOTTARI_SEQUENCE[seq_idx],
            level: DashaLevel::Mahadasha,
            order: offset as u16 + 1,
            start: cursor,
            end,
            children: Vec::new(),
        });
        cursor = end;
    }

    periods
}

/// Build the complete three-level timeline from the birth instant and Moon.
///
/// The birth Moon is the only input to the balance; there is no second
/// balance computation anywhere in the tree.
pub fn vimshottari_timeline(
    birth: NaiveDateTime,
    moon_sidereal_lon: f64,
    method: SubPeriodMethod,
) -> DashaTimeline {
    let balance = vimshottari_balance(moon_sidereal_lon);
    let mut mahadashas = level0_from_balance(birth, &balance);
    for md in &mut mahadashas {
        expand_to_leaf(md, method);
    }
    DashaTimeline {
        birth,
        method,
        balance,
        mahadashas,
    }
}

/// Find the active chain without materializing the full tree.
///
/// Generates only the children of each active period.
pub fn vimshottari_snapshot(
    birth: NaiveDateTime,
    moon_sidereal_lon: f64,
    method: SubPeriodMethod,
    at: NaiveDateTime,
) -> DashaSnapshot {
    let mut periods = Vec::with_capacity(3);
    let mut level = vimshottari_level0(birth, moon_sidereal_lon);

    while let Some(active) = find_active_period(&level, at) {
        periods.push(ActivePeriod::from(active));
        level = proportional_children(active, method);
    }

    DashaSnapshot { query: at, periods }
}

/// Find the period whose `[start, end)` contains `at`.
pub fn find_active_period(periods: &[DashaPeriod], at: NaiveDateTime) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(at))
}

fn active_chain(top: &[DashaPeriod], at: NaiveDateTime) -> Vec<ActivePeriod> {
    let mut chain = Vec::with_capacity(3);
    let mut level = top;
    while let Some(active) = find_active_period(level, at) {
        chain.push(ActivePeriod::from(active));
        level = &active.children;
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;
    use chrono::NaiveDate;

    fn birth() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1990, 5, 17)
            .unwrap()
            .and_hms_opt(14, 45, 0)
            .unwrap()
    }

    #[test]
    fn level0_chains_nine_rulers() {
        let periods = vimshottari_level0(birth(), 200.0);
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].ruler, Graha::Guru);
        assert_eq!(periods[0].start, birth());
        assert_eq!(periods[1].ruler, Graha::Shani);
        assert_eq!(periods[8].ruler, Graha::Rahu);
        for pair in periods.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn later_mahadashas_use_full_years() {
        let periods = vimshottari_level0(birth(), 0.0);
        // Ketu balance is a full 7 years; Shukra 20 years = 7305 days
        assert_eq!(periods[0].duration_days(), 2556);
        assert_eq!(periods[1].duration_days(), 7305);
    }

    #[test]
    fn timeline_is_three_levels() {
        let tl = vimshottari_timeline(birth(), 123.4, SubPeriodMethod::CanonicalCycle);
        assert_eq!(tl.mahadashas.len(), 9);
        for md in &tl.mahadashas {
            assert_eq!(md.children.len(), 9);
            assert_eq!(md.children[0].ruler, Graha::Ketu);
            for ad in &md.children {
                assert_eq!(ad.children.len(), 9);
            }
        }
    }

    #[test]
    fn snapshot_matches_tree() {
        let tl = vimshottari_timeline(birth(), 77.7, SubPeriodMethod::FromParent);
        let at = add_days(birth(), 9000);
        let from_tree = tl.snapshot(at);
        let direct = vimshottari_snapshot(birth(), 77.7, SubPeriodMethod::FromParent, at);
        assert_eq!(from_tree, direct);
        assert_eq!(direct.periods.len(), 3);
        assert_eq!(direct.periods[0].level, DashaLevel::Mahadasha);
        assert_eq!(direct.periods[2].level, DashaLevel::Pratyantardasha);
    }

    #[test]
    fn snapshot_outside_timeline_is_empty() {
        let tl = vimshottari_timeline(birth(), 10.0, SubPeriodMethod::CanonicalCycle);
        let before = add_days(birth(), -1);
        assert!(tl.snapshot(before).periods.is_empty());
        let after = add_days(tl.end().unwrap(), 1);
        assert!(tl.snapshot(after).periods.is_empty());
    }
}
