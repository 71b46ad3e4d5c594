//! Benchmarking suite comparing k-d tree search with the linear-scan
//! baseline.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use neighbors::{Euclidean, LinearScanKnn, PointData, SpatialTree};

fn random_points(n: usize, dimension: usize, seed: u64) -> Vec<PointData> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            PointData::from_coords(
                (0..dimension).map(|_| rng.gen_range(-1_000.0..1_000.0)).collect(),
            )
        })
        .collect()
}

/// Benchmark tree construction across dataset sizes
fn bench_tree_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_construction");

    for size in [1_000_usize, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let points = random_points(size, 8, 0);
            b.iter(|| {
                let tree = SpatialTree::build(black_box(points.clone()), Euclidean)
                    .expect("bench build failed");
                black_box(tree.len())
            });
        });
    }

    group.finish();
}

/// Benchmark k-NN queries: tree search vs full linear scan
fn bench_knn_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("knn_search");

    let points = random_points(10_000, 8, 0);
    let queries = random_points(100, 8, 1);
    let labels: Vec<usize> = (0..points.len()).collect();
    let tree = SpatialTree::build(points.clone(), Euclidean).expect("bench build failed");
    let scan = LinearScanKnn::new(points, labels, 5, Euclidean).expect("bench scan failed");

    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("kdtree_k5", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(tree.search_knn(query, 5).expect("bench query failed"));
            }
        });
    });

    group.bench_function("linear_scan_k5", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(scan.neighbors(query, 5).expect("bench query failed"));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tree_construction, bench_knn_search);
criterion_main!(benches);
