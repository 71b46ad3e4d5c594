// src/bin/knn_demo.rs

//! Print-based demonstration and timing harness for the `neighbors` crate.
//!
//! Generates a clustered random dataset, times tree construction and a batch
//! of k-NN queries, and cross-checks a sample of results against the
//! linear-scan baseline.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use neighbors::{Euclidean, LinearScanKnn, PointData, SpatialTree};

#[derive(Debug, Parser)]
#[command(name = "knn_demo", about = "k-d tree k-NN timing demo")]
struct Args {
    /// Number of points to index
    #[arg(long, default_value_t = 10_000)]
    points: usize,

    /// Dimensionality of each point
    #[arg(long, default_value_t = 10)]
    dimension: usize,

    /// Number of cluster centers in the generated data
    #[arg(long, default_value_t = 5)]
    centers: usize,

    /// Neighbors per query
    #[arg(long, default_value_t = 5)]
    k: usize,

    /// Number of queries to time
    #[arg(long, default_value_t = 100)]
    queries: usize,

    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// Scatters points around `centers` random cluster centers, labeling each
/// point with its cluster index.
fn generate_clusters(args: &Args) -> (Vec<PointData>, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let centers: Vec<Vec<f32>> = (0..args.centers)
        .map(|_| (0..args.dimension).map(|_| rng.gen_range(-10_000.0..10_000.0)).collect())
        .collect();

    let mut points = Vec::with_capacity(args.points);
    let mut labels = Vec::with_capacity(args.points);
    for i in 0..args.points {
        let cluster = i % centers.len();
        let coords = centers[cluster]
            .iter()
            .map(|c| c + rng.gen_range(-5_000.0..5_000.0))
            .collect();
        points.push(PointData::from_coords(coords));
        labels.push(cluster);
    }
    (points, labels)
}

fn main() -> Result<()> {
    let args = Args::parse();
    anyhow::ensure!(args.points >= 1, "need at least one point");
    anyhow::ensure!(args.dimension >= 1, "need at least one dimension");
    anyhow::ensure!(args.centers >= 1, "need at least one cluster center");

    println!("🌲 neighbors k-d tree demo");
    println!("==========================");
    println!(
        "points: {}, dimension: {}, centers: {}, k: {}, queries: {}",
        args.points, args.dimension, args.centers, args.k, args.queries
    );

    let (points, labels) = generate_clusters(&args);

    let start = Instant::now();
    let tree = SpatialTree::build(points.clone(), Euclidean)?;
    println!("tree construction: {:?}", start.elapsed());

    let query_count = args.queries.min(points.len());
    let start = Instant::now();
    for query in points.iter().take(query_count) {
        tree.search_knn(query, args.k)?;
    }
    println!("{} queries at k = {}: {:?}", query_count, args.k, start.elapsed());

    // Cross-check a handful of queries against the linear-scan baseline.
    let scan = LinearScanKnn::new(points.clone(), labels, args.k.max(1), Euclidean)?;
    let sample = points.len().min(10);
    let mut agreements = 0_usize;
    for query in points.iter().take(sample) {
        let from_tree = tree.search_knn(query, args.k)?;
        let from_scan = scan.neighbors(query, args.k)?;
        let tree_distances: Vec<f32> = from_tree.iter().map(|(_, d)| *d).collect();
        let scan_distances: Vec<f32> = from_scan.iter().map(|(_, d)| *d).collect();
        if tree_distances == scan_distances {
            agreements += 1;
        }
    }
    println!("baseline agreement on {} sampled queries: {}/{}", sample, agreements, sample);

    Ok(())
}
