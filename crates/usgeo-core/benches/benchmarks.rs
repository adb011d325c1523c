//! Query-path benchmarks over a synthetic dataset.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use usgeo_core::{City, DefaultBackend, GeoDb, State};

const STATE_CODES: [&str; 8] = ["AL", "CA", "IL", "NY", "OH", "TX", "VA", "WA"];

fn synthetic_db(cities: usize) -> GeoDb<DefaultBackend> {
    let cities = (0..cities)
        .map(|i| {
            let code = STATE_CODES[i % STATE_CODES.len()];
            City {
                name: format!("City {i}"),
                state_code: code.to_string(),
                state_name: format!("State {code}"),
                county_name: format!("County {}", i % 97),
                zips: vec![format!("{:05}", i % 100_000)],
                lat: Some(25.0 + (i % 250) as f64 / 10.0),
                lng: Some(-120.0 + (i % 500) as f64 / 10.0),
                population: Some((i as u32 % 90_000) + 1_000),
                density: Some(1000.0),
                timezone: Some("America/Chicago".to_string()),
            }
        })
        .collect();

    let states = STATE_CODES
        .iter()
        .map(|code| State {
            code: code.to_string(),
            name: format!("State {code}"),
        })
        .collect();

    GeoDb::from_tables(cities, Vec::new(), states, Vec::new())
}

fn bench_search_cities(c: &mut Criterion) {
    let db = synthetic_db(10_000);
    c.bench_function("search_cities_substring", |b| {
        b.iter(|| db.search_cities(black_box("ity 42")));
    });
}

fn bench_cities_by_state(c: &mut Criterion) {
    let db = synthetic_db(10_000);
    c.bench_function("cities_by_state", |b| {
        b.iter(|| db.cities_by_state(black_box("ny")));
    });
}

fn bench_cities_nearby(c: &mut Criterion) {
    let db = synthetic_db(10_000);
    c.bench_function("cities_nearby_25mi", |b| {
        b.iter(|| db.cities_nearby(black_box(34.05), black_box(-118.24), black_box(25.0)));
    });
}

fn bench_city_lookup(c: &mut Criterion) {
    let db = synthetic_db(10_000);
    c.bench_function("city_exact_lookup", |b| {
        b.iter(|| db.city(black_box("City 9000"), black_box("IL")));
    });
}

criterion_group!(
    benches,
    bench_search_cities,
    bench_cities_by_state,
    bench_cities_nearby,
    bench_city_lookup
);
criterion_main!(benches);
