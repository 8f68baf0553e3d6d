//! Shared fixtures for the PLANAR benchmarks

use planar::prelude::{Point2D, Pose2D};

/// Deterministic spread of poses covering every quadrant and several turns
pub fn sample_poses(count: usize) -> Vec<Pose2D> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            Pose2D::new((t * 0.37).sin() * 10.0, (t * 0.23).cos() * 10.0, t * 0.173 - 8.0)
        })
        .collect()
}

/// Points on a ring of the given radius
pub fn ring_points(count: usize, radius: f64) -> Vec<Point2D> {
    (0..count)
        .map(|i| {
            let a = i as f64 / count.max(1) as f64 * std::f64::consts::TAU;
            Point2D::new(radius * a.cos(), radius * a.sin())
        })
        .collect()
}
