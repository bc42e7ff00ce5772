//! Utility functions for k-means clustering

use crate::error::{Error, Result};
use crate::point::Point;

/// Validate clustering parameters
pub fn validate_parameters(k: usize, change_threshold: f64, max_iterations: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::invalid_parameter("k must be > 0"));
    }

    if change_threshold.is_nan() || change_threshold <= 0.0 {
        return Err(Error::invalid_parameter("change_threshold must be > 0"));
    }

    if max_iterations == 0 {
        return Err(Error::invalid_parameter("max_iterations must be > 0"));
    }

    Ok(())
}

/// Validate the input dataset
pub fn validate_dataset(points: &[Point]) -> Result<()> {
    if points.is_empty() {
        return Err(Error::invalid_data("Dataset cannot be empty"));
    }

    Ok(())
}

/// Get indices of points assigned to each cluster.
///
/// Points that have not been assigned yet, or carry an out-of-range cluster
/// id, are not listed.
pub fn get_cluster_indices(points: &[Point], n_clusters: usize) -> Vec<Vec<usize>> {
    let mut cluster_indices = vec![Vec::new(); n_clusters];

    for (point_idx, point) in points.iter().enumerate() {
        if let Some(cluster_id) = point.cluster_id() {
            if cluster_id < n_clusters {
                cluster_indices[cluster_id].push(point_idx);
            }
        }
    }

    cluster_indices
}

/// Calculate cluster sizes
pub fn cluster_sizes(points: &[Point], n_clusters: usize) -> Vec<usize> {
    let mut sizes = vec![0; n_clusters];

    for point in points {
        if let Some(cluster_id) = point.cluster_id() {
            if cluster_id < n_clusters {
                sizes[cluster_id] += 1;
            }
        }
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_parameters() {
        assert!(validate_parameters(2, 0.001, 100).is_ok());
        assert!(validate_parameters(0, 0.001, 100).is_err()); // k = 0
        assert!(validate_parameters(2, 0.0, 100).is_err()); // zero threshold
        assert!(validate_parameters(2, -0.1, 100).is_err()); // negative threshold
        assert!(validate_parameters(2, f64::NAN, 100).is_err()); // NaN threshold
        assert!(validate_parameters(2, 0.001, 0).is_err()); // max_iterations = 0
    }

    #[test]
    fn test_validate_dataset() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert!(validate_dataset(&points).is_ok());
        assert!(validate_dataset(&[]).is_err());
    }

    #[test]
    fn test_get_cluster_indices() {
        let points = vec![
            Point::with_cluster(0.0, 0.0, 0),
            Point::with_cluster(0.0, 1.0, 1),
            Point::with_cluster(1.0, 0.0, 0),
            Point::with_cluster(1.0, 1.0, 1),
            Point::with_cluster(2.0, 2.0, 2),
        ];
        let indices = get_cluster_indices(&points, 3);

        assert_eq!(indices[0], vec![0, 2]);
        assert_eq!(indices[1], vec![1, 3]);
        assert_eq!(indices[2], vec![4]);
    }

    #[test]
    fn test_get_cluster_indices_skips_unassigned() {
        let points = vec![Point::new(0.0, 0.0), Point::with_cluster(1.0, 1.0, 0)];
        let indices = get_cluster_indices(&points, 1);

        assert_eq!(indices[0], vec![1]);
    }

    #[test]
    fn test_cluster_sizes() {
        let points = vec![
            Point::with_cluster(0.0, 0.0, 0),
            Point::with_cluster(0.0, 1.0, 1),
            Point::with_cluster(1.0, 0.0, 0),
            Point::with_cluster(1.0, 1.0, 1),
            Point::with_cluster(2.0, 2.0, 2),
        ];
        let sizes = cluster_sizes(&points, 3);

        assert_eq!(sizes, vec![2, 2, 1]);
    }
}
