//! Engine settings and their TOML schema.
//!
//! Every section is optional in the file; a missing key keeps its default.
//!
//! ```toml
//! [ayanamsha]
//! epoch_year = 285.0
//! arcsec_per_year = 50.290966
//!
//! [strength]
//! dignity_orb_deg = 1.0
//! combustion_orb_deg = 11.0
//! sign_aware_dignity = false
//!
//! [yoga]
//! conjunction_orb_deg = 8.0
//! isolation_ignores_nodes = false
//!
//! [dasha]
//! sub_period_method = "canonical_cycle"   # or "from_parent"
//!
//! [divisional]
//! harmonics = [7, 9, 10]
//! ```

use std::collections::BTreeSet;
use std::num::NonZeroU16;
use std::path::Path;

use kundali_base::{LinearAyanamsha, StrengthConfig, SubPeriodMethod, YogaConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Dasha options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaSettings {
    /// Ordering of antardasha and pratyantardasha rulers.
    pub sub_period_method: SubPeriodMethod,
}

/// Which divisional charts the engine computes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DivisionalSettings {
    /// Harmonic factors, each >= 1, no repeats.
    pub harmonics: Vec<u16>,
}

impl Default for DivisionalSettings {
    fn default() -> Self {
        Self {
            harmonics: vec![7, 9, 10],
        }
    }
}

/// All tunable constants of a chart computation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KundaliSettings {
    pub ayanamsha: LinearAyanamsha,
    pub strength: StrengthConfig,
    pub yoga: YogaConfig,
    pub dasha: DashaSettings,
    pub divisional: DivisionalSettings,
}

impl KundaliSettings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading kundali settings");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check every value against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("ayanamsha.epoch_year", self.ayanamsha.epoch_year)?;
        finite("ayanamsha.arcsec_per_year", self.ayanamsha.arcsec_per_year)?;
        orb("strength.dignity_orb_deg", self.strength.dignity_orb_deg, 15.0)?;
        orb("strength.combustion_orb_deg", self.strength.combustion_orb_deg, 180.0)?;
        orb("yoga.conjunction_orb_deg", self.yoga.conjunction_orb_deg, 180.0)?;

        let mut seen = BTreeSet::new();
        for &h in &self.divisional.harmonics {
            if h == 0 {
                return Err(invalid("divisional.harmonics", "harmonic must be at least 1"));
            }
            if !seen.insert(h) {
                return Err(invalid(
                    "divisional.harmonics",
                    format!("harmonic {h} listed twice"),
                ));
            }
        }
        Ok(())
    }

    /// Configured harmonics, skipping zeros.
    pub fn harmonics(&self) -> Vec<NonZeroU16> {
        self.divisional
            .harmonics
            .iter()
            .filter_map(|&h| NonZeroU16::new(h))
            .collect()
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is not finite")))
    }
}

fn orb(field: &'static str, value: f64, max: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 && value <= max {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} outside (0, {max}]")))
    }
}
