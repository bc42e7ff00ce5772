//! Choosing k with elbow and silhouette sweeps
//!
//! Runs independent fits across a range of cluster counts and prints the
//! WCSS and mean-silhouette curves that elbow/silhouette plots are drawn
//! from.

use geokmeans::{KSweep, Point};
use rand::prelude::*;

fn synthetic_region(points_per_town: usize) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(7);
    let towns = [
        (17.38, 78.48),
        (18.00, 79.58),
        (16.75, 78.00),
        (17.90, 77.60),
    ];

    let mut points = Vec::with_capacity(towns.len() * points_per_town);
    for &(lat, lon) in &towns {
        for _ in 0..points_per_town {
            points.push(Point::new(
                lat + rng.gen_range(-0.12..0.12),
                lon + rng.gen_range(-0.12..0.12),
            ));
        }
    }
    points
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let points = synthetic_region(30);
    println!("Dataset: {} points around 4 towns", points.len());
    println!();

    println!("=== Elbow curve (WCSS vs k) ===");
    let elbow = KSweep::new(1, 8).random_seed(42).elbow(&points)?;
    for (k, wcss) in &elbow {
        println!("  k = {:2}  WCSS = {:10.4}", k, wcss);
    }
    println!();

    println!("=== Silhouette curve (mean score vs k) ===");
    let silhouette = KSweep::new(2, 8).random_seed(42).silhouette(&points)?;
    let (best_k, best_score) = silhouette
        .iter()
        .copied()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
        .unwrap();

    for (k, score) in &silhouette {
        let marker = if *k == best_k { "  <-- best" } else { "" };
        println!("  k = {:2}  silhouette = {:7.4}{}", k, score, marker);
    }
    println!();
    println!(
        "Highest mean silhouette: {:.4} at k = {}",
        best_score, best_k
    );

    Ok(())
}
