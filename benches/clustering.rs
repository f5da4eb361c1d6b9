use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poppin_cluster::{cluster_events, sort_clusters_by_relevance, EventLocation};
use rand::prelude::*;

fn city_events(n: usize) -> Vec<EventLocation> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|i| {
            let lat = 40.70 + rng.random::<f64>() * 0.1;
            let lng = -74.02 + rng.random::<f64>() * 0.1;
            EventLocation::new(format!("evt-{i}"), lat, lng)
        })
        .collect()
}

fn bench_cluster_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_events");

    for n in [100, 1000] {
        let events = city_events(n);
        group.bench_function(format!("n{n}_r0.5"), |b| {
            b.iter(|| cluster_events(black_box(&events), 0.5, 2))
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let clusters = cluster_events(&city_events(1000), 0.25, 2);
    c.bench_function("sort_clusters_by_relevance", |b| {
        b.iter(|| sort_clusters_by_relevance(black_box(clusters.clone()), 40.75, -73.97))
    });
}

criterion_group!(benches, bench_cluster_events, bench_sort);
criterion_main!(benches);
