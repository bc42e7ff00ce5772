//! Centroid initialization for k-means clustering

use crate::error::{Error, Result};
use crate::point::Point;
use rand::seq::index::sample;
use rand::Rng;

/// Select `k` distinct dataset points as the initial centroids.
///
/// Sampling is without replacement, so the starting centroids are real,
/// distinct data points rather than synthetic ones. Each selected point is
/// cloned and labeled with the index of the cluster it seeds. The selection
/// is a pure function of the supplied RNG, which makes seeded runs
/// reproducible end-to-end.
pub fn initialize_centroids<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    rng: &mut R,
) -> Result<Vec<Point>> {
    if k == 0 {
        return Err(Error::invalid_parameter("Number of clusters must be > 0"));
    }

    if k > points.len() {
        return Err(Error::invalid_parameter(
            "Number of clusters cannot exceed number of data points",
        ));
    }

    let centroids = sample(rng, points.len(), k)
        .into_iter()
        .enumerate()
        .map(|(cluster_id, point_idx)| {
            let point = &points[point_idx];
            Point::with_cluster(point.latitude(), point.longitude(), cluster_id)
        })
        .collect();

    Ok(centroids)
}
