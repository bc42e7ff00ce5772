use geokmeans::{Error, KMeans, KSweep, Point};
use std::collections::HashSet;

/// Two tight groups of five points each, far apart.
fn two_blob_dataset() -> Vec<Point> {
    let mut points = Vec::new();
    for i in 0..5 {
        let offset = i as f64 * 0.1;
        points.push(Point::new(offset, 0.5 - offset));
        points.push(Point::new(10.0 + offset, 10.5 - offset));
    }
    points
}

#[test]
fn test_seeded_runs_are_deterministic() {
    let points = two_blob_dataset();

    let mut first = KMeans::new(3, points.clone()).random_seed(42);
    let mut second = KMeans::new(3, points).random_seed(42);

    let centroids_a = first.fit().unwrap();
    let centroids_b = second.fit().unwrap();

    assert_eq!(centroids_a, centroids_b);
    assert_eq!(first.points(), second.points());
    assert_eq!(first.n_iter(), second.n_iter());
}

#[test]
fn test_labels_are_valid_after_fit() {
    let points = two_blob_dataset();
    let mut kmeans = KMeans::new(4, points).random_seed(1);
    kmeans.fit().unwrap();

    for point in kmeans.points() {
        let cluster_id = point.cluster_id().expect("every point must be labeled");
        assert!(cluster_id < 4);
    }
}

#[test]
fn test_k_equal_to_dataset_size_converges_in_one_iteration() {
    let points = two_blob_dataset();
    let n = points.len();

    let mut kmeans = KMeans::new(n, points).random_seed(42);
    kmeans.fit().unwrap();

    assert!(kmeans.converged());
    assert_eq!(kmeans.n_iter(), 1);

    // every point is its own cluster
    let labels: HashSet<usize> = kmeans
        .points()
        .iter()
        .map(|p| p.cluster_id().unwrap())
        .collect();
    assert_eq!(labels.len(), n);

    assert!(kmeans.wcss().unwrap().abs() < 1e-12);
}

#[test]
fn test_k_one_converges_to_global_mean() {
    let points = vec![
        Point::new(1.0, 2.0),
        Point::new(3.0, 4.0),
        Point::new(5.0, 6.0),
        Point::new(7.0, 8.0),
    ];

    let mut kmeans = KMeans::new(1, points).random_seed(9);
    let centroids = kmeans.fit().unwrap();

    assert_eq!(centroids.len(), 1);
    assert!((centroids[0].latitude() - 4.0).abs() < 1e-9);
    assert!((centroids[0].longitude() - 5.0).abs() < 1e-9);

    // a single cluster has no defined silhouette
    assert!(matches!(
        kmeans.silhouette_score(),
        Err(Error::InvalidParameter { .. })
    ));
}

#[test]
fn test_two_pair_end_to_end() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(10.0, 10.0),
        Point::new(10.0, 11.0),
    ];

    let mut kmeans = KMeans::new(2, points).random_seed(42);
    let centroids = kmeans.fit().unwrap();

    assert!(kmeans.converged());
    assert!(kmeans.n_iter() <= 3);

    // converged centroids are (0, 0.5) and (10, 10.5), in either order
    let mut features: Vec<[f64; 2]> = centroids.iter().map(|c| c.features()).collect();
    features.sort_by(|a, b| a[0].partial_cmp(&b[0]).unwrap());
    assert!((features[0][0]).abs() < 1e-9 && (features[0][1] - 0.5).abs() < 1e-9);
    assert!((features[1][0] - 10.0).abs() < 1e-9 && (features[1][1] - 10.5).abs() < 1e-9);

    // the two pairs end up in separate clusters
    let labels: Vec<usize> = kmeans
        .points()
        .iter()
        .map(|p| p.cluster_id().unwrap())
        .collect();
    assert_eq!(labels[0], labels[1]);
    assert_eq!(labels[2], labels[3]);
    assert_ne!(labels[0], labels[2]);

    // each point sits 0.5 from its centroid
    assert!((kmeans.wcss().unwrap() - 1.0).abs() < 1e-9);

    // near-perfect separation
    assert!(kmeans.silhouette_score().unwrap() > 0.9);
}

#[test]
fn test_wcss_is_zero_only_for_coincident_points() {
    let points = vec![
        Point::new(2.0, 3.0),
        Point::new(2.0, 3.0),
        Point::new(2.0, 3.0),
    ];

    let mut kmeans = KMeans::new(1, points).random_seed(0);
    kmeans.fit().unwrap();
    assert_eq!(kmeans.wcss().unwrap(), 0.0);

    let mut spread = KMeans::new(1, two_blob_dataset()).random_seed(0);
    spread.fit().unwrap();
    assert!(spread.wcss().unwrap() > 0.0);
}

#[test]
fn test_well_separated_blobs_score_near_one() {
    let points = two_blob_dataset();
    let mut kmeans = KMeans::new(2, points).random_seed(3);
    kmeans.fit().unwrap();

    let score = kmeans.silhouette_score().unwrap();
    assert!(score > 0.8);
    assert!(score <= 1.0);
}

#[test]
fn test_metrics_before_fit_fail() {
    let kmeans = KMeans::new(2, two_blob_dataset());

    assert!(matches!(kmeans.wcss(), Err(Error::NotFitted { .. })));
    assert!(matches!(
        kmeans.silhouette_score(),
        Err(Error::NotFitted { .. })
    ));
}

#[test]
fn test_invalid_configurations_fail() {
    let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];

    // more clusters than points
    assert!(KMeans::new(3, points.clone()).fit().is_err());
    // zero clusters
    assert!(KMeans::new(0, points.clone()).fit().is_err());
    // empty dataset
    assert!(KMeans::new(1, Vec::new()).fit().is_err());
    // non-positive tolerance
    assert!(KMeans::new(2, points.clone())
        .change_threshold(-1.0)
        .fit()
        .is_err());
    // zero iterations
    assert!(KMeans::new(2, points).max_iterations(0).fit().is_err());
}

#[test]
fn test_elbow_sweep_end_to_end() {
    let points = two_blob_dataset();
    let curve = KSweep::new(1, 6).random_seed(42).elbow(&points).unwrap();

    assert_eq!(curve.len(), 6);
    for &(k, wcss) in &curve {
        assert!((1..=6).contains(&k));
        assert!(wcss >= 0.0);
    }

    // k = 1 carries the full spread, well-separated k = 2 collapses most of it
    let wcss_1 = curve[0].1;
    let wcss_2 = curve[1].1;
    assert!(wcss_2 < wcss_1);
}

#[test]
fn test_silhouette_sweep_end_to_end() {
    let points = two_blob_dataset();
    let curve = KSweep::new(2, 5)
        .random_seed(42)
        .silhouette(&points)
        .unwrap();

    assert_eq!(curve.len(), 4);
    for &(_, score) in &curve {
        assert!((-1.0..=1.0).contains(&score));
    }

    // the true structure is two blobs
    assert!(curve[0].1 > 0.8);
}

#[test]
fn test_sweep_does_not_touch_the_input_collection() {
    let points = two_blob_dataset();
    KSweep::new(2, 4).random_seed(42).elbow(&points).unwrap();
    KSweep::new(2, 4).random_seed(42).silhouette(&points).unwrap();

    assert!(points.iter().all(|p| p.cluster_id().is_none()));
}

#[test]
fn test_sweep_determinism_across_modes() {
    let points = two_blob_dataset();

    let parallel = KSweep::new(2, 6).random_seed(11).elbow(&points).unwrap();
    let sequential = KSweep::new(2, 6)
        .random_seed(11)
        .sequential()
        .elbow(&points)
        .unwrap();

    assert_eq!(parallel, sequential);
}
