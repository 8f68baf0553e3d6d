//! PLANAR Transform (TF) System
//!
//! Coordinate frame conversions in the plane.
//!
//! # Overview
//!
//! - [`transform_to_reference`]: local (sensor/robot) point → reference (world) point
//! - [`transform_to_local`]: the inverse mapping
//! - [`Transform2D`]: the underlying rigid transform, with composition and inverse
//!
//! # Example
//!
//! ```rust
//! use planar_library::messages::Point2D;
//! use planar_library::tf::transform_to_reference;
//!
//! // LiDAR sees an obstacle 3m dead ahead; the robot is at (2, 1) facing +Y
//! let world = transform_to_reference(
//!     Point2D::new(3.0, 0.0),
//!     2.0,
//!     1.0,
//!     std::f64::consts::FRAC_PI_2,
//! )
//! .unwrap();
//! assert!((world.x - 2.0).abs() < 1e-10);
//! assert!((world.y - 4.0).abs() < 1e-10);
//! ```

mod transform;

pub use transform::Transform2D;

use crate::messages::Point2D;
use planar_core::{ensure_all_finite, PlanarResult};

/// Express a point given in a local frame in reference-frame coordinates
///
/// The local frame sits at `(origin_x, origin_y)` with heading `theta`
/// (radians, any finite value). The point is rotated by `theta` about the
/// reference origin and then translated by the frame origin.
///
/// Finite inputs whose result overflows the f64 range are rejected with
/// [`PlanarError::NonFiniteResult`](planar_core::PlanarError).
pub fn transform_to_reference(
    point_local: Point2D,
    origin_x: f64,
    origin_y: f64,
    theta: f64,
) -> PlanarResult<Point2D> {
    ensure_all_finite(&[
        ("point.x", point_local.x),
        ("point.y", point_local.y),
        ("origin_x", origin_x),
        ("origin_y", origin_y),
        ("theta", theta),
    ])?;

    Transform2D::from_parts(origin_x, origin_y, theta).apply(point_local, "transform_to_reference")
}

/// Express a reference-frame point in the coordinates of a local frame
///
/// Inverse of [`transform_to_reference`] for the same frame parameters.
/// Overflow is reported the same way.
pub fn transform_to_local(
    point_reference: Point2D,
    origin_x: f64,
    origin_y: f64,
    theta: f64,
) -> PlanarResult<Point2D> {
    ensure_all_finite(&[
        ("point.x", point_reference.x),
        ("point.y", point_reference.y),
        ("origin_x", origin_x),
        ("origin_y", origin_y),
        ("theta", theta),
    ])?;

    Transform2D::from_parts(origin_x, origin_y, theta)
        .apply_inverse(point_reference, "transform_to_local")
}
