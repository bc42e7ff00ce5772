//! Model-selection sweeps across a range of cluster counts

use crate::error::{Error, Result};
use crate::kmeans::{KMeans, DEFAULT_CHANGE_THRESHOLD, DEFAULT_MAX_ITERATIONS};
use crate::point::Point;
use crate::utils::validate_dataset;
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Runs an independent k-means fit for every `k` in a range and records a
/// quality metric per `k`, producing the curves behind elbow and silhouette
/// plots.
///
/// Every run gets its own engine over its own copy of the input points, so
/// runs never contaminate each other's labels and the caller's collection is
/// left untouched. With a `random_seed` set, each `k` derives its own seed
/// (`seed + k`) and the whole sweep is reproducible, in both parallel and
/// sequential mode.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KSweep {
    /// Smallest cluster count to fit (inclusive)
    pub k_min: usize,
    /// Largest cluster count to fit (inclusive)
    pub k_max: usize,
    /// Convergence tolerance passed to every fit
    pub change_threshold: f64,
    /// Iteration cap passed to every fit
    pub max_iterations: usize,
    /// Base seed; run `k` uses `seed + k`
    pub random_seed: Option<u64>,
    /// Fan the runs out over rayon
    pub parallel: bool,
}

impl Default for KSweep {
    fn default() -> Self {
        Self {
            k_min: 1,
            k_max: 14,
            change_threshold: DEFAULT_CHANGE_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            random_seed: None,
            parallel: true,
        }
    }
}

impl KSweep {
    /// Create a sweep over `k_min..=k_max` with default convergence
    /// parameters
    pub fn new(k_min: usize, k_max: usize) -> Self {
        Self {
            k_min,
            k_max,
            ..Default::default()
        }
    }

    /// Set the convergence tolerance for every run
    pub fn change_threshold(mut self, change_threshold: f64) -> Self {
        self.change_threshold = change_threshold;
        self
    }

    /// Set the iteration cap for every run
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the base random seed for reproducible sweeps
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Run sequentially instead of over rayon
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Within-cluster sum of squares per `k`: the elbow curve.
    ///
    /// Returns `(k, wcss)` pairs ordered by `k`.
    pub fn elbow(&self, points: &[Point]) -> Result<Vec<(usize, f64)>> {
        self.validate(points)?;
        self.run(points, |engine| engine.wcss())
    }

    /// Mean silhouette score per `k`.
    ///
    /// Requires `k_min >= 2`: a single-cluster fit has no defined
    /// silhouette, so a sweep that includes k = 1 fails up front instead of
    /// erroring halfway through.
    pub fn silhouette(&self, points: &[Point]) -> Result<Vec<(usize, f64)>> {
        if self.k_min < 2 {
            return Err(Error::invalid_parameter(
                "Silhouette sweep requires k_min >= 2",
            ));
        }
        self.validate(points)?;
        self.run(points, |engine| engine.silhouette_score())
    }

    fn validate(&self, points: &[Point]) -> Result<()> {
        validate_dataset(points)?;

        if self.k_min == 0 {
            return Err(Error::invalid_parameter("k_min must be > 0"));
        }
        if self.k_min > self.k_max {
            return Err(Error::invalid_parameter("k_min cannot exceed k_max"));
        }
        if self.k_max > points.len() {
            return Err(Error::invalid_parameter(
                "k_max cannot exceed number of data points",
            ));
        }

        Ok(())
    }

    fn run<F>(&self, points: &[Point], metric: F) -> Result<Vec<(usize, f64)>>
    where
        F: Fn(&KMeans) -> Result<f64> + Sync,
    {
        let run_one = |k: usize| -> Result<(usize, f64)> {
            let engine = self.fit_one(points, k)?;
            let value = metric(&engine)?;
            Ok((k, value))
        };

        let ks: Vec<usize> = (self.k_min..=self.k_max).collect();
        let results: Vec<Result<(usize, f64)>> = if self.parallel {
            ks.into_par_iter().map(run_one).collect()
        } else {
            ks.into_iter().map(run_one).collect()
        };

        results.into_iter().collect()
    }

    fn fit_one(&self, points: &[Point], k: usize) -> Result<KMeans> {
        // each run clusters a fresh copy of the caller's points
        let mut engine = KMeans::new(k, points.to_vec())
            .change_threshold(self.change_threshold)
            .max_iterations(self.max_iterations);

        if let Some(seed) = self.random_seed {
            engine = engine.random_seed(seed + k as u64);
        }

        engine.fit()?;
        Ok(engine)
    }
}
