//! 2D rigid-body transform (SE(2))
//!
//! A transform `T = Translate(x, y) · Rotate(θ)` maps points expressed in a
//! child frame into its parent frame: rotate by the 2×2 matrix
//! `[[cos θ, -sin θ], [sin θ, cos θ]]`, then translate.
//!
//! Every stored component is finite. Operations that would overflow the f64
//! range return [`PlanarError::NonFiniteResult`](planar_core::PlanarError)
//! instead of producing infinities.

use crate::algorithms::angles;
use crate::messages::{Point2D, Pose2D};
use nalgebra::{Matrix3, Rotation2, Vector2};
use planar_core::{ensure_all_finite, ensure_finite_result, PlanarResult};

/// Rigid 2D transform from a child frame into its parent frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    rotation: Rotation2<f64>,
    translation: Vector2<f64>,
}

impl Transform2D {
    /// Assemble a transform from already-validated parts
    pub(crate) fn from_parts(x: f64, y: f64, theta: f64) -> Self {
        Self {
            rotation: Rotation2::new(theta),
            translation: Vector2::new(x, y),
        }
    }

    /// The transform that leaves every point where it is
    pub fn identity() -> Self {
        Self {
            rotation: Rotation2::identity(),
            translation: Vector2::zeros(),
        }
    }

    /// Transform for a child frame at `(x, y)` with heading `theta` (radians)
    pub fn from_pose(x: f64, y: f64, theta: f64) -> PlanarResult<Self> {
        ensure_all_finite(&[("x", x), ("y", y), ("theta", theta)])?;
        Ok(Self::from_parts(x, y, theta))
    }

    /// Pure translation
    pub fn from_translation(x: f64, y: f64) -> PlanarResult<Self> {
        Self::from_pose(x, y, 0.0)
    }

    /// Pure rotation about the parent origin
    pub fn from_rotation(theta: f64) -> PlanarResult<Self> {
        Self::from_pose(0.0, 0.0, theta)
    }

    /// Heading of the child frame in (-π, π]
    pub fn rotation_angle(&self) -> f64 {
        angles::canonicalize(self.rotation.angle())
    }

    /// Position of the child frame origin in the parent frame
    pub fn translation(&self) -> Point2D {
        Point2D::new(self.translation.x, self.translation.y)
    }

    pub fn to_pose(&self) -> Pose2D {
        Pose2D::new(
            self.translation.x,
            self.translation.y,
            self.rotation_angle(),
        )
    }

    /// Compose transforms: `self · other`
    ///
    /// If `other` maps C into B and `self` maps B into A, the result maps C
    /// into A.
    pub fn compose(&self, other: &Transform2D) -> PlanarResult<Transform2D> {
        let translation = self.rotation * other.translation + self.translation;
        ensure_finite_result("compose", translation.as_slice())?;
        Ok(Transform2D {
            rotation: self.rotation * other.rotation,
            translation,
        })
    }

    /// Inverse transform, mapping parent coordinates back into the child frame
    pub fn inverse(&self) -> PlanarResult<Transform2D> {
        let rotation = self.rotation.inverse();
        let translation = -(rotation * self.translation);
        ensure_finite_result("inverse", translation.as_slice())?;
        Ok(Transform2D {
            rotation,
            translation,
        })
    }

    /// Map a child-frame point into the parent frame
    pub fn transform_point(&self, point: Point2D) -> PlanarResult<Point2D> {
        self.apply(point, "transform_point")
    }

    /// Map a batch of child-frame points, e.g. a footprint polygon
    pub fn transform_points(&self, points: &[Point2D]) -> PlanarResult<Vec<Point2D>> {
        points.iter().map(|&p| self.transform_point(p)).collect()
    }

    /// `R·p + t`, reporting overflow against `operation`
    pub(crate) fn apply(&self, point: Point2D, operation: &'static str) -> PlanarResult<Point2D> {
        let p = self.rotation * Vector2::new(point.x, point.y) + self.translation;
        ensure_finite_result(operation, p.as_slice())?;
        Ok(Point2D::new(p.x, p.y))
    }

    /// `Rᵀ·(p - t)`, the inverse mapping without building the inverse first
    pub(crate) fn apply_inverse(
        &self,
        point: Point2D,
        operation: &'static str,
    ) -> PlanarResult<Point2D> {
        let offset = Vector2::new(point.x, point.y) - self.translation;
        let p = self.rotation.inverse() * offset;
        ensure_finite_result(operation, p.as_slice())?;
        Ok(Point2D::new(p.x, p.y))
    }

    /// 3×3 homogeneous matrix `[[R, t], [0, 1]]`
    pub fn to_homogeneous(&self) -> Matrix3<f64> {
        let mut m = self.rotation.to_homogeneous();
        m[(0, 2)] = self.translation.x;
        m[(1, 2)] = self.translation.y;
        m
    }

    /// Element-wise comparison of the homogeneous matrices
    pub fn approx_eq(&self, other: &Transform2D, tolerance: f64) -> bool {
        (self.to_homogeneous() - other.to_homogeneous()).amax() <= tolerance
    }

    pub fn is_identity(&self, tolerance: f64) -> bool {
        self.approx_eq(&Transform2D::identity(), tolerance)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}
