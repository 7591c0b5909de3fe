//! Vimshottari dasha (planetary period) calculations.
//!
//! Three hierarchical levels (Mahadasha, Antardasha, Pratyantardasha) over a
//! 120-year cycle of nine rulers. Periods are laid out in whole civil days.

pub mod balance;
pub mod subperiod;
pub mod types;
pub mod vimshottari;
pub mod vimshottari_data;

pub use balance::{DashaBalance, nakshatra_elapsed, vimshottari_balance};
pub use subperiod::{
    SubPeriodMethod, child_sequence, child_span_days, expand_to_leaf, proportional_children,
};
pub use types::{
    ActivePeriod, DAYS_PER_MONTH, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot,
    add_days, calendar_days,
};
pub use vimshottari::{
    DashaTimeline, find_active_period, vimshottari_level0, vimshottari_snapshot,
    vimshottari_timeline,
};
pub use vimshottari_data::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, graha_years,
    starting_ruler,
};
