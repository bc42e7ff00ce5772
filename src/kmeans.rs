//! K-means clustering engine for 2-D geographic points

use crate::distance::euclidean_distance;
use crate::error::{Error, Result};
use crate::initialization::initialize_centroids;
use crate::metrics;
use crate::point::Point;
use crate::utils::{get_cluster_indices, validate_dataset, validate_parameters};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default convergence tolerance on mean centroid displacement
pub const DEFAULT_CHANGE_THRESHOLD: f64 = 1e-3;

/// Default cap on the number of assignment/update iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 5000;

/// K-means clustering engine.
///
/// The engine takes ownership of its dataset at construction and relabels
/// the points in place on every assignment pass, so two runs can never alias
/// the same mutable collection. Sweeping over several values of `k` requires
/// a fresh engine over a fresh copy of the points per run (see
/// [`crate::sweep::KSweep`]).
///
/// Configuration uses builder-style setters:
///
/// ```
/// use geokmeans::{KMeans, Point};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 11.0),
/// ];
///
/// let mut kmeans = KMeans::new(2, points).random_seed(42);
/// let centroids = kmeans.fit().unwrap();
/// assert_eq!(centroids.len(), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KMeans {
    /// Number of clusters
    pub k: usize,
    /// Convergence tolerance: the run stops once the mean centroid
    /// displacement of an iteration falls below this value
    pub change_threshold: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Random seed for reproducible initialization
    pub random_seed: Option<u64>,
    dataset: Vec<Point>,
    centroids: Option<Vec<Point>>,
    n_iter: usize,
    converged: bool,
}

impl KMeans {
    /// Create a new engine over `dataset` with `k` clusters and default
    /// convergence parameters
    pub fn new(k: usize, dataset: Vec<Point>) -> Self {
        Self {
            k,
            change_threshold: DEFAULT_CHANGE_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            random_seed: None,
            dataset,
            centroids: None,
            n_iter: 0,
            converged: false,
        }
    }

    /// Set the convergence tolerance
    pub fn change_threshold(mut self, change_threshold: f64) -> Self {
        self.change_threshold = change_threshold;
        self
    }

    /// Set the maximum number of iterations
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the random seed for reproducible initialization
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// The dataset owned by this engine
    pub fn points(&self) -> &[Point] {
        &self.dataset
    }

    /// Consume the engine and hand the dataset back, labels included
    pub fn into_points(self) -> Vec<Point> {
        self.dataset
    }

    /// Final centroids of the last completed fit, or `None` before one
    pub fn centroids(&self) -> Option<&[Point]> {
        self.centroids.as_deref()
    }

    /// Number of iterations the last fit ran
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Whether the last fit stopped by convergence rather than by hitting
    /// `max_iterations`
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Run the clustering workflow: seed the RNG, sample initial centroids,
    /// then iterate assignment and update until the mean centroid
    /// displacement drops below `change_threshold` or `max_iterations` is
    /// exhausted.
    ///
    /// Returns the final centroids (index = cluster id) and stores them on
    /// the engine for later metric queries. As a side effect every point in
    /// the dataset carries the cluster id of its nearest centroid from the
    /// last assignment pass.
    pub fn fit(&mut self) -> Result<Vec<Point>> {
        validate_parameters(self.k, self.change_threshold, self.max_iterations)?;
        validate_dataset(&self.dataset)?;

        if self.k > self.dataset.len() {
            return Err(Error::invalid_parameter(
                "Number of clusters cannot exceed number of data points",
            ));
        }

        let mut rng = match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut centroids = initialize_centroids(&self.dataset, self.k, &mut rng)?;

        self.n_iter = 0;
        self.converged = false;

        for iter in 0..self.max_iterations {
            self.n_iter = iter + 1;

            assign_points(&mut self.dataset, &centroids);

            let (new_centroids, mean_shift) = update_centroids(&self.dataset, &centroids);
            centroids = new_centroids;

            if mean_shift < self.change_threshold {
                self.converged = true;
                break;
            }
        }

        self.centroids = Some(centroids.clone());
        Ok(centroids)
    }

    /// Within-cluster sum of squares of the fitted clustering.
    ///
    /// Fails with [`Error::NotFitted`] before a completed [`KMeans::fit`].
    pub fn wcss(&self) -> Result<f64> {
        let centroids = self.fitted_centroids()?;
        metrics::wcss(&self.dataset, centroids)
    }

    /// Mean silhouette score of the fitted clustering.
    ///
    /// Fails with [`Error::NotFitted`] before a completed [`KMeans::fit`],
    /// and with [`Error::InvalidParameter`] when fewer than two clusters are
    /// populated (a single-cluster run has no defined silhouette).
    pub fn silhouette_score(&self) -> Result<f64> {
        let centroids = self.fitted_centroids()?;
        metrics::silhouette(&self.dataset, centroids.len())
    }

    fn fitted_centroids(&self) -> Result<&[Point]> {
        self.centroids
            .as_deref()
            .ok_or_else(|| Error::not_fitted("call fit before computing metrics"))
    }
}

/// Assign every point to the index of its nearest centroid
fn assign_points(points: &mut [Point], centroids: &[Point]) {
    for point in points.iter_mut() {
        let cluster_id = nearest_centroid(point, centroids);
        point.set_cluster(cluster_id);
    }
}

/// Index of the centroid closest to `point`. Ties go to the lowest index:
/// only a strictly smaller distance replaces the current minimum.
fn nearest_centroid(point: &Point, centroids: &[Point]) -> usize {
    let mut min_distance = f64::INFINITY;
    let mut nearest = 0;

    for (i, centroid) in centroids.iter().enumerate() {
        let distance = euclidean_distance(point.features(), centroid.features());
        if distance < min_distance {
            min_distance = distance;
            nearest = i;
        }
    }

    nearest
}

/// Recompute each centroid as the mean of its members and report the mean
/// displacement across all centroids.
///
/// A cluster with no members keeps its previous centroid unchanged; it
/// contributes zero displacement and may re-acquire points later as other
/// centroids move.
fn update_centroids(points: &[Point], centroids: &[Point]) -> (Vec<Point>, f64) {
    let members = get_cluster_indices(points, centroids.len());
    let mut new_centroids = Vec::with_capacity(centroids.len());
    let mut total_shift = 0.0;

    for (cluster_id, indices) in members.iter().enumerate() {
        let new_centroid = if indices.is_empty() {
            centroids[cluster_id].clone()
        } else {
            let n = indices.len() as f64;
            let avg_lat = indices.iter().map(|&i| points[i].latitude()).sum::<f64>() / n;
            let avg_lon = indices.iter().map(|&i| points[i].longitude()).sum::<f64>() / n;
            Point::with_cluster(avg_lat, avg_lon, cluster_id)
        };

        total_shift += euclidean_distance(
            centroids[cluster_id].features(),
            new_centroid.features(),
        );
        new_centroids.push(new_centroid);
    }

    (new_centroids, total_shift / centroids.len() as f64)
}
