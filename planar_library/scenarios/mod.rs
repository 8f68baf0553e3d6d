//! Worked frame-transform scenarios
//!
//! Two classic exercises, evaluated to plain numbers instead of plots:
//!
//! - **obstacle**: a detection in the sensor frame, localized in the world
//! - **sweep**: bearings and turn commands from one pose to a ring of targets
//!
//! Scenarios are described in TOML. Headings are written in degrees, which is
//! how people think about them; everything downstream works in radians.
//!
//! ```toml
//! [obstacle]
//! robot = { x = 2.0, y = 2.0, heading_deg = 60.0 }
//! point = { x = 3.0, y = 0.0 }
//! footprint_size = 0.5
//!
//! [sweep]
//! robot = { x = 0.0, y = 0.0, heading_deg = 30.0 }
//! targets = [
//!     { name = "East", x = 4.0, y = 0.0 },
//!     { name = "North", x = 0.0, y = 4.0 },
//! ]
//! ```
//!
//! Either table may be left out, in which case the built-in default is used.

mod obstacle;
mod sweep;

pub use obstacle::{footprint_triangle, ObstacleReport, ObstacleScenario};
pub use sweep::{compass_targets, NamedTarget, SweepScenario, TargetReport};

use crate::messages::Pose2D;
use planar_core::{ensure_all_finite, PlanarResult, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Robot pose as written in scenario files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobotPlacement {
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
}

impl RobotPlacement {
    pub fn new(x: f64, y: f64, heading_deg: f64) -> Self {
        Self { x, y, heading_deg }
    }

    /// Pose with the heading converted to radians
    pub fn pose(&self) -> Pose2D {
        Pose2D::new(self.x, self.y, self.heading_deg.to_radians())
    }

    pub fn validate(&self) -> PlanarResult<()> {
        ensure_all_finite(&[
            ("robot.x", self.x),
            ("robot.y", self.y),
            ("robot.heading_deg", self.heading_deg),
        ])
    }
}

/// Complete scenario file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub obstacle: ObstacleScenario,
    #[serde(default)]
    pub sweep: SweepScenario,
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> PlanarResult<()> {
        self.obstacle.validate()?;
        self.sweep.validate()
    }
}

impl ScenarioConfig {
    pub fn from_toml_str(content: &str) -> PlanarResult<Self> {
        planar_core::from_toml_str(content)
    }

    pub fn load(path: impl AsRef<Path>) -> PlanarResult<Self> {
        planar_core::load_toml(path)
    }

    /// Run both scenarios
    pub fn evaluate(&self) -> PlanarResult<ScenarioReport> {
        self.validate()?;

        let report = ScenarioReport {
            obstacle: self.obstacle.evaluate()?,
            sweep: self.sweep.evaluate()?,
        };
        log::debug!(
            "Evaluated scenario: obstacle range {:.3}, {} sweep targets",
            report.obstacle.range,
            report.sweep.len()
        );
        Ok(report)
    }
}

/// Numbers produced by a scenario run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub obstacle: ObstacleReport,
    pub sweep: Vec<TargetReport>,
}

impl ScenarioReport {
    pub fn to_json(&self) -> PlanarResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use planar_core::PlanarError;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ScenarioConfig::from_toml_str("").unwrap();
        assert_eq!(config, ScenarioConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = ScenarioConfig::from_toml_str(
            r#"
            [obstacle]
            robot = { x = 1.0, y = -1.0, heading_deg = 90.0 }
            point = { x = 2.0, y = 0.0 }

            [sweep]
            robot = { x = 0.0, y = 0.0, heading_deg = 0.0 }
            targets = [
                { name = "ahead", x = 5.0, y = 0.0 },
                { name = "left", x = 0.0, y = 5.0 },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(config.obstacle.footprint_size, None);
        assert_eq!(config.sweep.targets.len(), 2);

        let report = config.evaluate().unwrap();
        assert_abs_diff_eq!(report.obstacle.obstacle_world.x, 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(report.obstacle.obstacle_world.y, 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(report.sweep[1].turn_deg(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nan_in_config_rejected() {
        let result = ScenarioConfig::from_toml_str(
            r#"
            [obstacle]
            robot = { x = nan, y = 0.0, heading_deg = 0.0 }
            point = { x = 1.0, y = 0.0 }
            "#,
        );
        assert!(matches!(result, Err(PlanarError::NonFinite { .. })));
    }

    #[test]
    fn test_missing_field_rejected() {
        let result = ScenarioConfig::from_toml_str(
            r#"
            [obstacle]
            robot = { x = 0.0, y = 0.0 }
            point = { x = 1.0, y = 0.0 }
            "#,
        );
        assert!(matches!(result, Err(PlanarError::TomlParse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sweep]").unwrap();
        writeln!(file, "robot = {{ x = 0.0, y = 0.0, heading_deg = 45.0 }}").unwrap();
        writeln!(file, "targets = [{{ name = \"T\", x = 1.0, y = 1.0 }}]").unwrap();

        let config = ScenarioConfig::load(file.path()).unwrap();
        let report = config.evaluate().unwrap();
        assert_abs_diff_eq!(report.sweep[0].turn, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_report_json() {
        let json = ScenarioConfig::default().evaluate().unwrap().to_json().unwrap();
        assert!(json.contains("\"obstacle_world\""));
        assert!(json.contains("\"SE\""));

        let back: ScenarioReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sweep.len(), 8);
    }
}
