use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panjika_ephem::{AnalyticEphemeris, GeoLocation};
use panjika_search::{
    PanchangConfig, PanchangRequest, elongation_at, next_crossing, next_new_moon,
    panchang_for_date, resolve_day,
};
use panjika_time::{civil_date, local_instant};

fn kolkata_request() -> PanchangRequest {
    PanchangRequest {
        date: civil_date(2024, 10, 31).expect("valid date"),
        location: GeoLocation::new(22.5726, 88.3639, 0.0),
        timezone: chrono_tz::Asia::Kolkata,
    }
}

fn crossing_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let config = PanchangConfig::default();
    let request = kolkata_request();
    let t0 = local_instant(request.date, 6, &request.timezone).expect("valid anchor");
    let mode = config.sidereal_mode;

    let mut group = c.benchmark_group("search_crossing");
    group.sample_size(20);
    group.bench_function("tithi_end", |b| {
        b.iter(|| {
            next_crossing(
                |t| elongation_at(&eph, t, mode),
                black_box(t0),
                black_box(348.0),
                &config.crossing,
            )
            .expect("search should succeed")
            .expect("crossing should exist")
        })
    });
    group.bench_function("next_new_moon", |b| {
        b.iter(|| next_new_moon(&eph, black_box(t0), &config).expect("new moon should exist"))
    });
    group.finish();
}

fn day_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let config = PanchangConfig::default();
    let request = kolkata_request();

    let mut group = c.benchmark_group("search_day");
    group.sample_size(20);
    group.bench_function("resolve_day", |b| {
        b.iter(|| {
            resolve_day(
                &eph,
                black_box(request.date),
                &request.location,
                &request.timezone,
                &config.resolver,
            )
            .expect("day should resolve")
        })
    });
    group.bench_function("panchang_for_date", |b| {
        b.iter(|| {
            panchang_for_date(&eph, black_box(&request), &config).expect("panchang should succeed")
        })
    });
    group.finish();
}

criterion_group!(benches, crossing_bench, day_bench);
criterion_main!(benches);
