//! Geographic point type with cluster membership

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single 2-D observation: a latitude/longitude pair plus the cluster it
/// currently belongs to.
///
/// Coordinates are fixed at construction time. There are no setters, so the
/// feature vector returned by [`Point::features`] always mirrors the stored
/// coordinates. Cluster membership starts out unset and is written by the
/// engine that owns the point during each assignment pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    latitude: f64,
    longitude: f64,
    cluster_id: Option<usize>,
}

impl Point {
    /// Create an unassigned point from raw coordinates
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            cluster_id: None,
        }
    }

    /// Create a point already labeled with a cluster index.
    ///
    /// Centroids are represented this way: a point whose `cluster_id` is the
    /// index of the cluster it stands for.
    pub fn with_cluster(latitude: f64, longitude: f64, cluster_id: usize) -> Self {
        Self {
            latitude,
            longitude,
            cluster_id: Some(cluster_id),
        }
    }

    /// Latitude coordinate
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude coordinate
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Index of the cluster this point is assigned to, or `None` before the
    /// first assignment pass
    pub fn cluster_id(&self) -> Option<usize> {
        self.cluster_id
    }

    /// Feature vector used for distance computation, always
    /// `[latitude, longitude]`
    pub fn features(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    pub(crate) fn set_cluster(&mut self, cluster_id: usize) {
        self.cluster_id = Some(cluster_id);
    }
}
