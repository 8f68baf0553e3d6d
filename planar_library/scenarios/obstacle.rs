//! Obstacle localization: where is a sensor detection in the world?

use super::RobotPlacement;
use crate::messages::{Point2D, Pose2D};
use planar_core::config::invalid;
use planar_core::{ensure_all_finite, PlanarResult};
use serde::{Deserialize, Serialize};

/// Default footprint triangle size (meters)
const DEFAULT_FOOTPRINT_SIZE: f64 = 0.5;

/// A robot that has detected an obstacle in its sensor frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleScenario {
    pub robot: RobotPlacement,
    /// Detection in the sensor frame (+X is straight ahead)
    pub point: Point2D,
    /// Size of the triangular robot outline; no outline when absent
    #[serde(default)]
    pub footprint_size: Option<f64>,
}

impl Default for ObstacleScenario {
    fn default() -> Self {
        Self {
            robot: RobotPlacement::new(2.0, 2.0, 60.0),
            point: Point2D::new(3.0, 0.0),
            footprint_size: Some(DEFAULT_FOOTPRINT_SIZE),
        }
    }
}

/// Result of localizing one detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleReport {
    pub robot: Pose2D,
    pub obstacle_sensor: Point2D,
    pub obstacle_world: Point2D,
    /// Distance from the robot to the obstacle
    pub range: f64,
    /// Robot outline vertices in the world frame, nose first
    pub footprint_world: Vec<Point2D>,
}

/// Triangle pointing along +X: nose, left rear, right rear
pub fn footprint_triangle(size: f64) -> Vec<Point2D> {
    vec![
        Point2D::new(size, 0.0),
        Point2D::new(-size / 2.0, size / 2.0),
        Point2D::new(-size / 2.0, -size / 2.0),
    ]
}

impl ObstacleScenario {
    pub fn validate(&self) -> PlanarResult<()> {
        self.robot.validate()?;
        ensure_all_finite(&[("point.x", self.point.x), ("point.y", self.point.y)])?;

        if let Some(size) = self.footprint_size {
            if !size.is_finite() || size <= 0.0 {
                return Err(invalid(format!(
                    "footprint_size must be positive, got {}",
                    size
                )));
            }
        }
        Ok(())
    }

    pub fn evaluate(&self) -> PlanarResult<ObstacleReport> {
        let robot = self.robot.pose();
        let obstacle_world = robot.to_reference(self.point)?;

        let footprint_world = match self.footprint_size {
            Some(size) => robot.transform()?.transform_points(&footprint_triangle(size))?,
            None => Vec::new(),
        };

        log::debug!(
            "Obstacle at sensor ({:.3}, {:.3}) -> world ({:.3}, {:.3})",
            self.point.x,
            self.point.y,
            obstacle_world.x,
            obstacle_world.y
        );

        Ok(ObstacleReport {
            robot,
            obstacle_sensor: self.point,
            obstacle_world,
            range: self.point.norm(),
            footprint_world,
        })
    }
}
