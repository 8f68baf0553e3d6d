//! Geometry primitives: points and poses in the plane

use crate::algorithms::angles;
use crate::tf::{self, Transform2D};
use planar_core::PlanarResult;
use serde::{Deserialize, Serialize};

/// A point in some 2D frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64, // meters
    pub y: f64, // meters
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The frame origin
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean distance from the frame origin
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point in the same frame
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2D> for (f64, f64) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}

/// Position and heading of one frame relative to a reference frame
///
/// `theta` is in radians, counterclockwise from the reference +X axis. It is
/// not normalized on construction; any real value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// Pose coincident with the reference frame
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// The rigid transform mapping this frame's coordinates into the reference frame
    pub fn transform(&self) -> PlanarResult<Transform2D> {
        Transform2D::from_pose(self.x, self.y, self.theta)
    }

    /// Express a point given in this frame in reference coordinates
    pub fn to_reference(&self, point: Point2D) -> PlanarResult<Point2D> {
        tf::transform_to_reference(point, self.x, self.y, self.theta)
    }

    /// Express a reference-frame point in this frame's coordinates
    pub fn to_local(&self, point: Point2D) -> PlanarResult<Point2D> {
        tf::transform_to_local(point, self.x, self.y, self.theta)
    }

    /// Bearing from this pose's position to `target`, in the reference frame
    pub fn bearing_to(&self, target: Point2D) -> PlanarResult<f64> {
        angles::bearing(self.x, self.y, target.x, target.y)
    }

    /// Signed turn needed to face `target` from the current heading
    ///
    /// Positive means turn left (counterclockwise).
    pub fn heading_error_to(&self, target: Point2D) -> PlanarResult<f64> {
        let bearing = self.bearing_to(target)?;
        angles::angular_difference(bearing, self.theta)
    }
}
