//! Error types for chart computation.

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use kundali_config::ConfigError;
use serde::Serialize;
use thiserror::Error;

use crate::ephemeris::EphemerisError;
use crate::input::{GeoLocation, Moment};

/// Rejected birth input.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),
    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),
    /// The wall-clock time falls in a DST gap.
    #[error("local time {local} does not exist in {timezone}")]
    NonexistentLocalTime {
        local: NaiveDateTime,
        timezone: String,
    },
    /// The wall-clock time occurs twice (DST overlap).
    #[error("local time {local} is ambiguous in {timezone}")]
    AmbiguousLocalTime {
        local: NaiveDateTime,
        timezone: String,
    },
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },
}

/// The orchestrator step that called the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    Ascendant,
    NatalLongitudes,
    NatalAyanamsha,
    Retrograde,
    TransitLongitudes,
}

impl Stage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascendant => "ascendant",
            Self::NatalLongitudes => "natal longitudes",
            Self::NatalAyanamsha => "natal ayanamsha",
            Self::Retrograde => "retrograde flags",
            Self::TransitLongitudes => "transit longitudes",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Computation-level failure. No partial chart accompanies it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error("invalid birth input: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid settings: {0}")]
    Settings(#[from] ConfigError),
    /// The ephemeris collaborator failed or returned unusable numbers.
    #[error(
        "ephemeris failed during {stage} at {} (lat {}, lon {})",
        .moment.utc,
        .location.latitude,
        .location.longitude
    )]
    Ephemeris {
        stage: Stage,
        moment: Moment,
        location: GeoLocation,
        #[source]
        source: EphemerisError,
    },
}

impl ChartError {
    /// The failing stage, for dependency errors.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Ephemeris { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
