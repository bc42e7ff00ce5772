//! Quality metrics over a fitted clustering

use crate::distance::euclidean_distance;
use crate::error::{Error, Result};
use crate::point::Point;

/// Within-cluster sum of squares: the total squared distance from each point
/// to the centroid of its assigned cluster. Lower is tighter clustering.
///
/// Every point must carry a cluster id that indexes into `centroids`;
/// anything else is rejected as invalid data.
pub fn wcss(points: &[Point], centroids: &[Point]) -> Result<f64> {
    let mut total = 0.0;

    for point in points {
        let cluster_id = point
            .cluster_id()
            .ok_or_else(|| Error::invalid_data("Dataset contains an unassigned point"))?;

        let centroid = centroids
            .get(cluster_id)
            .ok_or_else(|| Error::invalid_data("Cluster assignment out of range"))?;

        total += euclidean_distance(point.features(), centroid.features()).powi(2);
    }

    Ok(total)
}

/// Mean silhouette score of the clustering, in [-1, 1].
///
/// For each point: `a` is the mean distance to the other members of its own
/// cluster, `b` the smallest mean distance to the members of any other
/// cluster, and the per-point score is `(b - a) / max(a, b)`.
///
/// A point alone in its cluster has no defined `a` and is skipped; a point
/// whose `a` and `b` are both zero is excluded from the average rather than
/// counted as zero. At least two clusters must be populated, otherwise `b`
/// has no candidates and the computation fails.
///
/// This is the all-pairs formulation: O(n^2) in the dataset size, and the
/// scaling bottleneck of the crate.
pub fn silhouette(points: &[Point], n_clusters: usize) -> Result<f64> {
    let labels: Vec<usize> = points
        .iter()
        .map(|point| {
            let cluster_id = point
                .cluster_id()
                .ok_or_else(|| Error::invalid_data("Dataset contains an unassigned point"))?;
            if cluster_id >= n_clusters {
                return Err(Error::invalid_data("Cluster assignment out of range"));
            }
            Ok(cluster_id)
        })
        .collect::<Result<_>>()?;

    let mut sizes = vec![0usize; n_clusters];
    for &label in &labels {
        sizes[label] += 1;
    }
    let populated = sizes.iter().filter(|&&size| size > 0).count();
    if populated < 2 {
        return Err(Error::invalid_parameter(
            "Silhouette requires at least two populated clusters",
        ));
    }

    let mut total = 0.0;
    let mut counted = 0usize;

    for (i, point) in points.iter().enumerate() {
        let label = labels[i];

        let mut same_sum = 0.0;
        let mut same_count = 0usize;
        let mut other_sums = vec![0.0; n_clusters];
        let mut other_counts = vec![0usize; n_clusters];

        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }

            let distance = euclidean_distance(point.features(), other.features());
            if labels[j] == label {
                same_sum += distance;
                same_count += 1;
            } else {
                other_sums[labels[j]] += distance;
                other_counts[labels[j]] += 1;
            }
        }

        // a is undefined for a point alone in its cluster; skip it
        if same_count == 0 {
            continue;
        }
        let a = same_sum / same_count as f64;

        let b = (0..n_clusters)
            .filter(|&c| c != label && other_counts[c] > 0)
            .map(|c| other_sums[c] / other_counts[c] as f64)
            .fold(f64::INFINITY, f64::min);

        if a.max(b) > 0.0 {
            total += (b - a) / a.max(b);
            counted += 1;
        }
    }

    if counted == 0 {
        return Err(Error::computation_error(
            "No point has a defined silhouette",
        ));
    }

    Ok(total / counted as f64)
}
