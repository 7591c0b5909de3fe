//! Natal and transit chart engine.
//!
//! Validates birth input, queries an [`Ephemeris`] implementation for the
//! raw longitudes, and sequences every derivation in `kundali_base` into a
//! single serializable [`KundaliResult`].

pub mod ephemeris;
pub mod error;
pub mod input;
pub mod kundali;
pub mod kundali_types;

pub use ephemeris::{BoxError, Ephemeris, EphemerisError};
pub use error::{ChartError, Stage, ValidationError};
pub use input::{BirthInput, GeoLocation, Moment};
pub use kundali::full_kundali;
pub use kundali_types::{
    ChartMeta, DashaSection, DivisionalChart, KundaliResult, MoonInfo, TransitSection,
};
