//! Configuration for the kundali chart engine.
//!
//! Settings are read from TOML. Every section and key is optional; the
//! defaults reproduce the engine's built-in constants.

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{DashaSettings, DivisionalSettings, KundaliSettings};
