//! Linear ayanamsha model.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed stars).
//! As the equinox precesses westward, the ayanamsha increases over time.
//!
//! This model is a straight line anchored at the epoch where both zodiacs
//! coincided, advancing at a constant precession rate. It is not
//! astronomically exact but is monotonic and continuous in the date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Year (fractional, proleptic Gregorian) at which the ayanamsha is zero.
pub const DEFAULT_EPOCH_YEAR: f64 = 285.0;

/// Precession rate in arc-seconds per year.
pub const DEFAULT_ARCSEC_PER_YEAR: f64 = 50.290966;

/// Linear ayanamsha anchored at a zero-point year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearAyanamsha {
    pub epoch_year: f64,
    pub arcsec_per_year: f64,
}

impl Default for LinearAyanamsha {
    fn default() -> Self {
        Self {
            epoch_year: DEFAULT_EPOCH_YEAR,
            arcsec_per_year: DEFAULT_ARCSEC_PER_YEAR,
        }
    }
}

impl LinearAyanamsha {
    /// Ayanamsha in degrees at a fractional year.
    pub fn at_year(&self, year: f64) -> f64 {
        (year - self.epoch_year) * self.arcsec_per_year / 3600.0
    }

    /// Ayanamsha in degrees at a calendar date.
    pub fn at_date(&self, date: NaiveDate) -> f64 {
        self.at_year(fractional_year(date))
    }

    /// Convert a tropical longitude to sidereal by subtracting the ayanamsha.
    pub fn to_sidereal(&self, tropical_lon: f64, date: NaiveDate) -> f64 {
        crate::util::normalize_360(tropical_lon - self.at_date(date))
    }
}

/// Fractional year: `year + (month - 1)/12 + (day - 1)/365.25`.
pub fn fractional_year(date: NaiveDate) -> f64 {
    date.year() as f64 + (date.month0() as f64) / 12.0 + (date.day0() as f64) / 365.25
}
