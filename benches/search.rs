use criterion::{Criterion, criterion_group, criterion_main};
use jaunt::{
    catalog::{Catalog, Location, Route, RouteKind},
    search::{RouteFilter, compose_results},
    shared::RouteDuration,
};
use std::{hint::black_box, time::Duration};

const CITIES: [&str; 8] = [
    "Berlin", "Oslo", "Kyoto", "Lisbon", "Taipei", "Stockholm", "Vienna", "Porto",
];
const STYLES: [RouteKind; 5] = [
    RouteKind::Walking,
    RouteKind::Hiking,
    RouteKind::Cycling,
    RouteKind::Camper,
    RouteKind::Driving,
];

fn build_catalog(count: usize) -> Catalog {
    let mut catalog = Catalog::new();
    for i in 0..count {
        let city = CITIES[i % CITIES.len()];
        let route = Route::new(
            format!("r{i}"),
            format!("{city} Tour {i}"),
            city,
            format!("A numbered outing around {city}"),
        )
        .with_kind(STYLES[i % STYLES.len()])
        .with_duration(RouteDuration::from_hours((i % 72) as f64))
        .with_points((i % 20) as u32)
        .with_price((i % 40) as f64);
        catalog.upsert_route(route);
    }
    for city in CITIES {
        catalog.add_location(Location::new(city, "Benchmarkia"));
    }
    catalog
}

fn prefix_heavy_query(catalog: &Catalog) {
    let _ = black_box(catalog.search_routes("berlin"));
}

fn needle_query(catalog: &Catalog) {
    let _ = black_box(catalog.search_routes("tour 49999"));
}

fn miss_query(catalog: &Catalog) {
    let _ = black_box(catalog.search_routes("zanzibar"));
}

fn filtered_browse(catalog: &Catalog, filter: &RouteFilter) {
    let _ = black_box(compose_results("berlin", filter, catalog));
}

fn criterion_benchmark(c: &mut Criterion) {
    let catalog = build_catalog(50_000);

    let mut filter = RouteFilter::new();
    filter.kind = Some(RouteKind::Walking);
    filter.max_price = 10.0;

    let mut group = c.benchmark_group("Search");

    group.warm_up_time(Duration::from_secs(5));

    group.measurement_time(Duration::from_secs(15));

    group.bench_function("Prefix heavy query", |b| {
        b.iter(|| prefix_heavy_query(&catalog))
    });

    group.bench_function("Needle query", |b| b.iter(|| needle_query(&catalog)));

    group.bench_function("Miss query", |b| b.iter(|| miss_query(&catalog)));

    group.bench_function("Filtered browse", |b| {
        b.iter(|| filtered_browse(&catalog, &filter))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
