//! Target sweep: bearing and turn from one robot pose to many targets

use super::RobotPlacement;
use crate::algorithms::angles;
use crate::messages::Point2D;
use planar_core::config::invalid;
use planar_core::{ensure_all_finite, PlanarResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A labelled target position in the world frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTarget {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl NamedTarget {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// A robot pose and the targets to compute bearings for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepScenario {
    pub robot: RobotPlacement,
    pub targets: Vec<NamedTarget>,
}

impl Default for SweepScenario {
    fn default() -> Self {
        Self {
            robot: RobotPlacement::new(0.0, 0.0, 30.0),
            targets: compass_targets(),
        }
    }
}

/// Eight compass points around the origin
pub fn compass_targets() -> Vec<NamedTarget> {
    vec![
        NamedTarget::new("East", 4.0, 0.0),
        NamedTarget::new("NE", 3.0, 3.0),
        NamedTarget::new("North", 0.0, 4.0),
        NamedTarget::new("NW", -3.0, 3.0),
        NamedTarget::new("West", -4.0, 0.0),
        NamedTarget::new("SW", -3.0, -3.0),
        NamedTarget::new("South", 0.0, -4.0),
        NamedTarget::new("SE", 3.0, -3.0),
    ]
}

/// Bearing and required turn for one target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetReport {
    pub name: String,
    pub target: Point2D,
    /// World-frame angle from robot to target, radians
    pub bearing: f64,
    /// Signed turn from the robot heading, radians (+ = left)
    pub turn: f64,
}

impl TargetReport {
    pub fn bearing_deg(&self) -> f64 {
        self.bearing.to_degrees()
    }

    pub fn turn_deg(&self) -> f64 {
        self.turn.to_degrees()
    }
}

impl SweepScenario {
    pub fn validate(&self) -> PlanarResult<()> {
        self.robot.validate()?;

        if self.targets.is_empty() {
            return Err(invalid("sweep needs at least one target"));
        }

        let mut seen = HashSet::new();
        for target in &self.targets {
            if target.name.trim().is_empty() {
                return Err(invalid("target names cannot be empty"));
            }
            if !seen.insert(target.name.as_str()) {
                return Err(invalid(format!("duplicate target name '{}'", target.name)));
            }
            ensure_all_finite(&[("target.x", target.x), ("target.y", target.y)])?;
        }
        Ok(())
    }

    pub fn evaluate(&self) -> PlanarResult<Vec<TargetReport>> {
        let robot = self.robot.pose();

        self.targets
            .iter()
            .map(|target| {
                let position = target.position();
                let bearing = robot.bearing_to(position)?;
                let turn = angles::angular_difference(bearing, robot.theta)?;

                log::debug!(
                    "Target '{}': bearing {:.1} deg, turn {:+.1} deg",
                    target.name,
                    bearing.to_degrees(),
                    turn.to_degrees()
                );

                Ok(TargetReport {
                    name: target.name.clone(),
                    target: position,
                    bearing,
                    turn,
                })
            })
            .collect()
    }
}
