//! Sub-period generation for the Vimshottari tree.
//!
//! Child duration = `floor(parent_days * child_years / 120)` whole days.
//! Children are chained from the parent's start. Truncation means the nine
//! children can fall short of the parent's span by up to 8 days; the gap is
//! left in place, not absorbed into the last child.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

use super::types::{DashaLevel, DashaPeriod, add_days};
use super::vimshottari_data::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, graha_years, sequence_position,
};

/// Where each sub-level starts in the graha sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubPeriodMethod {
    /// Always Ketu first, whatever the parent ruler.
    #[default]
    CanonicalCycle,
    /// Start with the parent's own ruler and continue cyclically.
    FromParent,
}

/// Ordered child rulers for a parent ruled by `parent`.
pub fn child_sequence(parent: Graha, method: SubPeriodMethod) -> [Graha; 9] {
    let start = match method {
        SubPeriodMethod::CanonicalCycle => 0,
        SubPeriodMethod::FromParent => sequence_position(parent),
    };
    std::array::from_fn(|i| VIMSHOTTARI_SEQUENCE[(start + i) % 9])
}

/// Whole-day share of a parent span for one child ruler.
pub fn child_span_days(parent_days: i64, child: Graha) -> i64 {
    parent_days.max(0) * graha_years(child) as i64 / VIMSHOTTARI_TOTAL_YEARS as i64
}

/// Generate the proportional children of a parent period, without descending further.
pub fn proportional_children(parent: &DashaPeriod, method: SubPeriodMethod) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let parent_days = parent.duration_days();
    let mut cursor = parent.start;

    child_sequence(parent.ruler, method)
        .iter()
        .enumerate()
        .map(|(order_0, &ruler)| {
            let end = add_days(cursor, child_span_days(parent_days, ruler));
            let child = DashaPeriod {
                ruler,
                level: child_level,
                order: order_0 as u16 + 1,
                start: cursor,
                end,
                children: Vec::new(),
            };
            cursor = end;
            child
        })
        .collect()
}

/// Fill `parent.children` down to the leaf level.
pub fn expand_to_leaf(parent: &mut DashaPeriod, method: SubPeriodMethod) {
    if parent.level == DashaLevel::Pratyantardasha {
        return;
    }
    let mut children = proportional_children(parent, method);
    for child in &mut children {
        expand_to_leaf(child, method);
    }
    parent.children = children;
}
