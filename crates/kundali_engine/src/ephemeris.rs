//! The external ephemeris collaborator.
//!
//! The engine never computes celestial positions itself. Implementors wrap
//! whatever astronomical backend is available and return sidereal
//! longitudes for the seven classical grahas; Rahu and Ketu are derived
//! inside the engine from the Moon.

use thiserror::Error;

use crate::input::{GeoLocation, Moment};

/// Boxed cause from an ephemeris backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure reported by an [`Ephemeris`] implementation.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct EphemerisError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl EphemerisError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a backend error with a message.
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Position provider consumed once per chart computation.
///
/// Longitudes are degrees; the engine normalizes them to [0, 360) and
/// rejects non-finite values.
pub trait Ephemeris {
    /// Sidereal ascendant (lagna) longitude.
    fn ascendant_longitude(
        &self,
        moment: &Moment,
        location: &GeoLocation,
    ) -> Result<f64, EphemerisError>;

    /// Sidereal longitudes of Sun, Moon, Mars, Mercury, Jupiter, Venus,
    /// Saturn, in that order.
    fn sidereal_longitudes(
        &self,
        moment: &Moment,
        location: &GeoLocation,
    ) -> Result<[f64; 7], EphemerisError>;

    /// Ayanamsha in degrees, if the backend has its own model.
    ///
    /// `None` selects the configured linear model.
    fn ayanamsa_offset(&self, _moment: &Moment) -> Result<Option<f64>, EphemerisError> {
        Ok(None)
    }

    /// Retrograde flags in the same order as [`Ephemeris::sidereal_longitudes`].
    fn retrograde_flags(
        &self,
        _moment: &Moment,
        _location: &GeoLocation,
    ) -> Result<[bool; 7], EphemerisError> {
        Ok([false; 7])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "de440.bsp missing");
        let err = EphemerisError::with_source("kernel unavailable", io);
        assert_eq!(err.to_string(), "kernel unavailable");
        assert_eq!(err.source().unwrap().to_string(), "de440.bsp missing");
        assert!(EphemerisError::new("x").source().is_none());
    }
}
