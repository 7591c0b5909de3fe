//! Full chart orchestration.
//!
//! Sequence: validate input, query the ephemeris for the birth instant,
//! derive every natal section from the returned longitudes, then query the
//! ephemeris again for the transit instant. Any failure aborts the whole
//! computation; no partial result is returned.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kundali_base::{
    Graha, GrahaLongitudes, all_strengths, compare_transits, detect_yogas, divisional,
    divisional_label, nakshatra_from_longitude, normalize_360, panchang, rasi_chart, sade_sati,
    vaar_name, vimshottari_timeline,
};
use kundali_config::KundaliSettings;
use tracing::{debug, info, instrument, warn};

use crate::ephemeris::{Ephemeris, EphemerisError};
use crate::error::{ChartError, Stage};
use crate::input::{BirthInput, GeoLocation, Moment};
use crate::kundali_types::{
    ChartMeta, DashaSection, DivisionalChart, KundaliResult, MoonInfo, TransitSection,
};

/// Compute the complete chart for `input`, with transits at `transit_at`.
///
/// Transits are observed from the birth location; the active dasha chain is
/// looked up at `transit_at` expressed in the birth zone's civil time.
#[instrument(
    level = "info",
    skip_all,
    fields(date = %input.date, time = %input.time, timezone = %input.timezone)
)]
pub fn full_kundali<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    input: &BirthInput,
    transit_at: DateTime<Utc>,
    settings: &KundaliSettings,
) -> Result<KundaliResult, ChartError> {
    settings.validate().inspect_err(|e| warn!(error = %e, "settings rejected"))?;
    let (birth, location) = input
        .validate()
        .inspect_err(|e| warn!(error = %e, "birth input rejected"))?;
    debug!(utc = %birth.utc, "birth input validated");

    // Natal positions
    let lagna_lon = call(Stage::Ascendant, &birth, &location, || {
        ephemeris
            .ascendant_longitude(&birth, &location)
            .and_then(|v| finite("ascendant", &[v]).map(|()| v))
    })?;
    let grahas = sapta_longitudes(ephemeris, Stage::NatalLongitudes, &birth, &location)?;
    let retro7 = call(Stage::Retrograde, &birth, &location, || {
        ephemeris.retrograde_flags(&birth, &location)
    })?;
    let ayanamsa = call(Stage::NatalAyanamsha, &birth, &location, || {
        let offset = ephemeris
            .ayanamsa_offset(&birth)?
            .unwrap_or_else(|| settings.ayanamsha.at_date(birth.local.date()));
        finite("ayanamsa", &[offset]).map(|()| offset)
    })?;
    debug!(lagna = lagna_lon, ayanamsa, "natal positions received");

    let moon_sid = grahas.longitude(Graha::Chandra);
    let moon = MoonInfo {
        tropical: normalize_360(moon_sid + ayanamsa),
        sidereal: moon_sid,
        nakshatra: nakshatra_from_longitude(moon_sid),
    };

    let chart = rasi_chart(lagna_lon, &grahas);
    debug!(lagna_sign = chart.lagna.sign_name, "rasi chart built");

    let panchang = panchang(grahas.longitude(Graha::Surya), moon_sid);

    let mut retrograde = [false; 9];
    retrograde[..7].copy_from_slice(&retro7);
    let strengths = all_strengths(&grahas, &retrograde, &settings.strength);

    let yogas = detect_yogas(&chart, &settings.yoga);
    debug!(findings = ?yogas.names(), "yogas detected");

    let vargas = settings
        .harmonics()
        .into_iter()
        .map(|n| DivisionalChart {
            divisions: n.get(),
            label: divisional_label(n),
            lagna: divisional(lagna_lon, n),
            grahas: grahas.iter().map(|(g, lon)| (g, divisional(lon, n))).collect(),
        })
        .collect::<Vec<_>>();

    let timeline = vimshottari_timeline(birth.local, moon_sid, settings.dasha.sub_period_method);
    let transit_moment = Moment::from_utc(transit_at, birth.zone);
    let active = timeline.snapshot(transit_moment.local);
    debug!(
        balance_ruler = timeline.balance.ruler.name(),
        active_depth = active.periods.len(),
        "dasha timeline built"
    );

    // Transit positions
    let current = sapta_longitudes(
        ephemeris,
        Stage::TransitLongitudes,
        &transit_moment,
        &location,
    )?;
    let current_map: BTreeMap<Graha, f64> = current.iter().collect();
    let transits = TransitSection {
        at: transit_moment,
        current,
        comparison: compare_transits(&grahas, &current_map),
        sade_sati: sade_sati(moon_sid, current.longitude(Graha::Shani)),
    };
    debug!(sade_sati = transits.sade_sati.label, "transits compared");

    let result = KundaliResult {
        meta: ChartMeta {
            date: input.date.trim().to_owned(),
            time: input.time.trim().to_owned(),
            timezone: birth.zone.name().to_owned(),
            latitude: location.latitude,
            longitude: location.longitude,
            birth_utc: birth.utc,
            vaar: vaar_name(birth.local.date()),
        },
        ayanamsa,
        moon,
        lagna: chart.lagna,
        grahas,
        rasi_chart: chart,
        panchang,
        dasha: DashaSection { timeline, active },
        strengths,
        yogas,
        divisional: vargas,
        transits,
    };

    info!(
        lagna = result.lagna.sign_name,
        nakshatra = result.moon.nakshatra.name,
        yogas = result.yogas.findings.len(),
        "kundali computed"
    );
    Ok(result)
}

/// Seven classical longitudes from the ephemeris, checked, plus derived nodes.
fn sapta_longitudes<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    stage: Stage,
    moment: &Moment,
    location: &GeoLocation,
) -> Result<GrahaLongitudes, ChartError> {
    let sapta = call(stage, moment, location, || {
        let sapta = ephemeris.sidereal_longitudes(moment, location)?;
        finite("graha longitude", &sapta)?;
        Ok(sapta)
    })?;
    Ok(GrahaLongitudes::from_sapta(sapta))
}

/// Run one ephemeris step, tagging a failure with its stage and context.
fn call<T>(
    stage: Stage,
    moment: &Moment,
    location: &GeoLocation,
    f: impl FnOnce() -> Result<T, EphemerisError>,
) -> Result<T, ChartError> {
    f().map_err(|source| {
        warn!(%stage, error = %source, "ephemeris failure, aborting chart");
        ChartError::Ephemeris {
            stage,
            moment: *moment,
            location: *location,
            source,
        }
    })
}

fn finite(what: &str, values: &[f64]) -> Result<(), EphemerisError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => Err(EphemerisError::new(format!("non-finite {what}: {v}"))),
        None => Ok(()),
    }
}
