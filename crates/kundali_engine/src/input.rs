//! Birth input and its validated form.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValidationError;

/// Raw birth data as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, local civil time.
    pub time: String,
    /// IANA zone name, e.g. `Asia/Kolkata`.
    pub timezone: String,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
}

/// An instant with its civil time in a named zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Moment {
    /// Wall-clock time in `zone`.
    pub local: NaiveDateTime,
    pub utc: DateTime<Utc>,
    #[serde(serialize_with = "serialize_zone")]
    pub zone: Tz,
}

impl Moment {
    /// The civil time of `utc` as seen in `zone`.
    pub fn from_utc(utc: DateTime<Utc>, zone: Tz) -> Self {
        Self {
            local: utc.with_timezone(&zone).naive_local(),
            utc,
            zone,
        }
    }
}

fn serialize_zone<S: Serializer>(zone: &Tz, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(zone.name())
}

/// Observer location on the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Degrees in [-90, 90].
    pub latitude: f64,
    /// Degrees in [-180, 180].
    pub longitude: f64,
}

impl GeoLocation {
    /// Checked constructor.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite() {
            return Err(ValidationError::NonFinite { field: "latitude" });
        }
        if !longitude.is_finite() {
            return Err(ValidationError::NonFinite { field: "longitude" });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl BirthInput {
    /// Parse and check every field; nothing is coerced.
    pub fn validate(&self) -> Result<(Moment, GeoLocation), ValidationError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(self.date.clone()))?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| ValidationError::InvalidTime(self.time.clone()))?;
        let zone: Tz = self
            .timezone
            .trim()
            .parse()
            .map_err(|_| ValidationError::UnknownTimezone(self.timezone.clone()))?;
        let location = GeoLocation::new(self.latitude, self.longitude)?;

        let local = date.and_time(time);
        let utc = match zone.from_local_datetime(&local) {
            LocalResult::Single(dt) => dt.with_timezone(&Utc),
            LocalResult::Ambiguous(..) => {
                return Err(ValidationError::AmbiguousLocalTime {
                    local,
                    timezone: zone.name().to_owned(),
                });
            }
            LocalResult::None => {
                return Err(ValidationError::NonexistentLocalTime {
                    local,
                    timezone: zone.name().to_owned(),
                });
            }
        };

        Ok((Moment { local, utc, zone }, location))
    }
}
