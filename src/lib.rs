//! # Geographic K-Means Clustering
//!
//! This crate clusters 2-D geographic point data (latitude/longitude records
//! for a bounded region) into k groups with the classic K-Means algorithm and
//! evaluates cluster quality via elbow and silhouette diagnostics.
//!
//! ## Features
//!
//! - **K-Means**: seeded initialization from real data points, mean-of-members
//!   centroid updates, mean-displacement convergence
//! - **Quality metrics**: within-cluster sum of squares and mean silhouette
//!   score over a fitted clustering
//! - **Model selection**: elbow and silhouette sweeps across a range of k,
//!   with parallel execution via Rayon
//! - Deterministic runs given a random seed
//!
//! ## Example
//!
//! ```rust
//! use geokmeans::{KMeans, Point};
//!
//! // Two tight groups of coordinates, far apart
//! let points = vec![
//!     Point::new(17.38, 78.48),
//!     Point::new(17.40, 78.50),
//!     Point::new(18.10, 79.10),
//!     Point::new(18.12, 79.08),
//! ];
//!
//! // Cluster into two groups with a fixed seed
//! let mut kmeans = KMeans::new(2, points).random_seed(42);
//! let centroids = kmeans.fit().unwrap();
//!
//! assert_eq!(centroids.len(), 2);
//! assert!(kmeans.points().iter().all(|p| p.cluster_id().is_some()));
//! println!("WCSS: {:.4}", kmeans.wcss().unwrap());
//! ```

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
pub mod error;
pub mod initialization;
pub mod kmeans;
pub mod metrics;
pub mod point;
pub mod sweep;
pub mod utils;

pub use distance::euclidean_distance;
pub use error::{Error, Result};
pub use kmeans::{KMeans, DEFAULT_CHANGE_THRESHOLD, DEFAULT_MAX_ITERATIONS};
pub use point::Point;
pub use sweep::KSweep;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_functionality() {
        // Basic smoke test to ensure the crate compiles
        let _point = Point::new(17.38, 78.48);
        let _sweep = KSweep::new(1, 14);
    }
}
