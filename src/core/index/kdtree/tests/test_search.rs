// src/core/index/kdtree/tests/test_search.rs

#[cfg(test)]
mod search_tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::core::index::kdtree::{KdTreeError, SpatialTree};
    use crate::core::index::linear::LinearScanKnn;
    use crate::core::metric::{Euclidean, Manhattan};
    use crate::core::types::PointData;

    // Helper to create PointData easily
    fn point(data: Vec<f32>) -> PointData {
        PointData::from_coords(data)
    }

    fn random_points(n: usize, dimension: usize, seed: u64) -> Vec<PointData> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| point((0..dimension).map(|_| rng.gen_range(-100.0..100.0)).collect()))
            .collect()
    }

    fn distances(results: &[(PointData, f32)]) -> Vec<f32> {
        results.iter().map(|(_, d)| *d).collect()
    }

    #[test]
    fn test_search_empty_tree() {
        let tree = SpatialTree::build(Vec::new(), Euclidean).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.dimension(), 0);

        let query = point(vec![1.0, 1.0]);
        assert!(tree.search_knn(&query, 3).unwrap().is_empty());
        assert!(tree.search_nn(&query).unwrap().is_none());
    }

    #[test]
    fn test_search_k_zero_yields_empty() {
        let tree = SpatialTree::build(vec![point(vec![1.0, 2.0])], Euclidean).unwrap();
        let results = tree.search_knn(&point(vec![1.0, 1.0]), 0).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_single_point() {
        let tree = SpatialTree::build(vec![point(vec![1.0, 2.0])], Euclidean).unwrap();
        assert_eq!(tree.len(), 1);

        let (nearest, distance) = tree.search_nn(&point(vec![1.0, 1.0])).unwrap().unwrap();
        assert_eq!(nearest, point(vec![1.0, 2.0]));
        assert_relative_eq!(distance, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_search_exact_match() {
        let points = vec![point(vec![1.0, 2.0]), point(vec![5.0, 5.0]), point(vec![9.0, 0.0])];
        let tree = SpatialTree::build(points, Euclidean).unwrap();

        let (nearest, distance) = tree.search_nn(&point(vec![5.0, 5.0])).unwrap().unwrap();
        assert_eq!(nearest, point(vec![5.0, 5.0]));
        assert_relative_eq!(distance, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_k_exceeding_size_returns_all_sorted() {
        let points = vec![point(vec![5.0, 5.0]), point(vec![1.0, 2.0])];
        let tree = SpatialTree::build(points, Euclidean).unwrap();

        let results = tree.search_knn(&point(vec![0.0, 0.0]), 5).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, point(vec![1.0, 2.0]));
        assert_relative_eq!(results[0].1, 5.0_f32.sqrt(), epsilon = 1e-6);
        assert_eq!(results[1].0, point(vec![5.0, 5.0]));
        assert_relative_eq!(results[1].1, 50.0_f32.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_query_dimension_mismatch() {
        let tree = SpatialTree::build(vec![point(vec![1.0, 2.0])], Euclidean).unwrap();
        let result = tree.search_knn(&point(vec![1.0, 2.0, 3.0]), 1);
        assert!(matches!(result, Err(KdTreeError::DimensionMismatch(_))));
    }

    #[test]
    fn test_one_dimensional_tie() {
        let points: Vec<PointData> = [1.0, 2.0, 3.0, 4.0, 5.0]
            .iter()
            .map(|&x| point(vec![x]))
            .collect();
        let tree = SpatialTree::build(points, Euclidean).unwrap();

        let results = tree.search_knn(&point(vec![3.5]), 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_relative_eq!(results[0].1, 0.5, epsilon = 1e-6);
        assert_relative_eq!(results[1].1, 0.5, epsilon = 1e-6);
        let found: Vec<f32> = results.iter().map(|(p, _)| p.data[0]).collect();
        assert!(found.contains(&3.0) && found.contains(&4.0));
    }

    #[test]
    fn test_matches_linear_scan() {
        let points = random_points(200, 3, 42);
        let labels: Vec<usize> = (0..points.len()).collect();
        let tree = SpatialTree::build(points.clone(), Euclidean).unwrap();
        let scan = LinearScanKnn::new(points, labels, 1, Euclidean).unwrap();

        for query in random_points(20, 3, 7) {
            for k in [1_usize, 5, 17] {
                let from_tree = tree.search_knn(&query, k).unwrap();
                let from_scan = scan.neighbors(&query, k).unwrap();
                assert_eq!(from_tree.len(), k);
                // Same metric, same operand order: the distance sequences
                // must agree exactly, ties aside the point sets may permute.
                assert_eq!(distances(&from_tree), distances(&from_scan));
            }
        }
    }

    #[test]
    fn test_matches_linear_scan_manhattan() {
        let points = random_points(120, 2, 11);
        let labels: Vec<usize> = (0..points.len()).collect();
        let tree = SpatialTree::build(points.clone(), Manhattan).unwrap();
        let scan = LinearScanKnn::new(points, labels, 1, Manhattan).unwrap();

        for query in random_points(10, 2, 13) {
            let from_tree = tree.search_knn(&query, 5).unwrap();
            let from_scan = scan.neighbors(&query, 5).unwrap();
            assert_eq!(distances(&from_tree), distances(&from_scan));
        }
    }

    #[test]
    fn test_monotonic_k_prefix() {
        let points = random_points(80, 2, 3);
        let tree = SpatialTree::build(points, Euclidean).unwrap();
        let query = point(vec![10.0, -4.0]);

        let small = tree.search_knn(&query, 3).unwrap();
        let large = tree.search_knn(&query, 9).unwrap();
        assert_eq!(distances(&small), distances(&large)[..3].to_vec());
    }

    #[test]
    fn test_idempotent_queries() {
        let points = random_points(60, 3, 5);
        let tree = SpatialTree::build(points, Euclidean).unwrap();
        let query = point(vec![1.0, 2.0, 3.0]);

        let first = tree.search_knn(&query, 4).unwrap();
        let second = tree.search_knn(&query, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_points_search() {
        let points = vec![point(vec![2.0, 2.0]); 5];
        let tree = SpatialTree::build(points, Euclidean).unwrap();

        let results = tree.search_knn(&point(vec![2.0, 3.0]), 3).unwrap();
        assert_eq!(results.len(), 3);
        for (found, distance) in results {
            assert_eq!(found, point(vec![2.0, 2.0]));
            assert_relative_eq!(distance, 1.0, epsilon = 1e-6);
        }
    }
}
