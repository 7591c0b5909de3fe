//! Core types for Vimshottari dasha (planetary period) calculations.
//!
//! A dasha timeline is a three-level tree. Each node is ruled by a graha and
//! covers a half-open civil-time interval `[start, end)`. Children tile their
//! parent end-to-end in whole days.

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::graha::Graha;

/// Year length used for period rollover.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Month length used for the balance-at-birth split.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Depth in the period tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
}

impl DashaLevel {
    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// A single dasha period and, below the leaf level, its sub-periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub ruler: Graha,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Inclusive start, local civil time of birth's zone.
    pub start: NaiveDateTime,
    /// Exclusive end.
    pub end: NaiveDateTime,
    /// Sub-periods in generation order; empty at the leaf level.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DashaPeriod>,
}

impl DashaPeriod {
    /// Whole days in the period.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether `at` falls in `[start, end)`.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at < self.end
    }
}

/// Active periods at a specific instant, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashaSnapshot {
    /// The queried instant.
    pub query: NaiveDateTime,
    /// Active period per level; empty outside the timeline.
    pub periods: Vec<ActivePeriod>,
}

/// One entry of a snapshot chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivePeriod {
    pub ruler: Graha,
    pub level: DashaLevel,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl From<&DashaPeriod> for ActivePeriod {
    fn from(p: &DashaPeriod) -> Self {
        Self {
            ruler: p.ruler,
            level: p.level,
            start: p.start,
            end: p.end,
        }
    }
}

/// Add whole days to a civil instant, saturating at chrono's range.
pub fn add_days(at: NaiveDateTime, days: i64) -> NaiveDateTime {
    TimeDelta::try_days(days)
        .and_then(|d| at.checked_add_signed(d))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Whole days for a `(years, months, days)` span: `floor(y*365.25 + m*30.44 + d)`.
pub fn calendar_days(years: f64, months: f64, days: f64) -> i64 {
    (years * DAYS_PER_YEAR + months * DAYS_PER_MONTH + days).floor() as i64
}
