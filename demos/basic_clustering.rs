//! Basic k-means clustering example
//!
//! Clusters synthetic household coordinates scattered around three town
//! centers and prints the fitted centroids and quality metrics.

use geokmeans::utils::cluster_sizes;
use geokmeans::{KMeans, Point};
use rand::prelude::*;

/// Jittered coordinates around three town centers in one region
fn synthetic_region(points_per_town: usize) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(7);
    let towns = [(17.38, 78.48), (18.00, 79.58), (16.75, 78.00)];

    let mut points = Vec::with_capacity(towns.len() * points_per_town);
    for &(lat, lon) in &towns {
        for _ in 0..points_per_town {
            points.push(Point::new(
                lat + rng.gen_range(-0.15..0.15),
                lon + rng.gen_range(-0.15..0.15),
            ));
        }
    }
    points
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let points = synthetic_region(40);
    println!("Dataset: {} points around 3 towns", points.len());
    println!();

    println!("=== Fitting k-means with k = 3 ===");
    let mut kmeans = KMeans::new(3, points)
        .change_threshold(0.001)
        .max_iterations(5000)
        .random_seed(42);

    let centroids = kmeans.fit()?;

    println!("Converged: {}", kmeans.converged());
    println!("Iterations: {}", kmeans.n_iter());
    println!("Centroids:");
    for centroid in &centroids {
        println!(
            "  Cluster {}: ({:.4}, {:.4})",
            centroid.cluster_id().unwrap(),
            centroid.latitude(),
            centroid.longitude()
        );
    }
    println!();

    println!("=== Cluster membership ===");
    let sizes = cluster_sizes(kmeans.points(), centroids.len());
    for (cluster_id, size) in sizes.iter().enumerate() {
        println!("  Cluster {}: {} points", cluster_id, size);
    }
    println!();

    println!("=== Quality metrics ===");
    println!("WCSS: {:.4}", kmeans.wcss()?);
    println!("Mean silhouette: {:.4}", kmeans.silhouette_score()?);

    Ok(())
}
