use std::num::NonZeroU16;

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_base::{
    GrahaLongitudes, LinearAyanamsha, SHODASHAVARGA, StrengthConfig, SubPeriodMethod, YogaConfig,
    all_strengths, amsha_position, detect_yogas, divisional, nakshatra_from_longitude, panchang,
    rasi_chart, vimshottari_snapshot, vimshottari_timeline,
};

const SAPTA: [f64; 7] = [213.4, 77.7, 301.2, 198.9, 95.3, 240.0, 17.6];

fn zodiac_bench(c: &mut Criterion) {
    let ayanamsha = LinearAyanamsha::default();
    let mut group = c.benchmark_group("zodiac");
    group.bench_function("ayanamsha_at_year", |b| {
        b.iter(|| ayanamsha.at_year(black_box(1990.37)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(123.456)))
    });
    group.bench_function("panchang", |b| {
        b.iter(|| panchang(black_box(213.4), black_box(77.7)))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let positions = GrahaLongitudes::from_sapta(SAPTA);
    let chart = rasi_chart(101.5, &positions);

    let mut group = c.benchmark_group("chart");
    group.bench_function("rasi_chart", |b| {
        b.iter(|| rasi_chart(black_box(101.5), black_box(&positions)))
    });
    group.bench_function("all_strengths", |b| {
        b.iter(|| all_strengths(black_box(&positions), &[false; 9], &StrengthConfig::default()))
    });
    group.bench_function("detect_yogas", |b| {
        b.iter(|| detect_yogas(black_box(&chart), &YogaConfig::default()))
    });
    group.finish();
}

fn amsha_bench(c: &mut Criterion) {
    let d9 = NonZeroU16::new(9).unwrap();
    let mut group = c.benchmark_group("amsha");
    group.bench_function("d9_single", |b| {
        b.iter(|| divisional(black_box(95.0), d9))
    });
    group.bench_function("shodashavarga_single_lon", |b| {
        b.iter(|| {
            for amsha in SHODASHAVARGA {
                black_box(amsha_position(black_box(95.0), amsha));
            }
        })
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1990, 5, 17)
        .unwrap()
        .and_hms_opt(14, 45, 0)
        .unwrap();
    let at = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let mut group = c.benchmark_group("dasha");
    group.bench_function("timeline_3_levels", |b| {
        b.iter(|| {
            vimshottari_timeline(black_box(birth), black_box(77.7), SubPeriodMethod::default())
        })
    });
    group.bench_function("snapshot", |b| {
        b.iter(|| {
            vimshottari_snapshot(
                black_box(birth),
                black_box(77.7),
                SubPeriodMethod::default(),
                black_box(at),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, zodiac_bench, chart_bench, amsha_bench, dasha_bench);
criterion_main!(benches);
