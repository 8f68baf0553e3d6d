//! Scenario files end to end: load, evaluate, render

use approx::assert_abs_diff_eq;
use planar::prelude::*;
use std::io::Write;

#[test]
fn default_scenarios_reproduce_worked_numbers() {
    let report = ScenarioConfig::default().evaluate().unwrap();

    // Robot at (2, 2) facing 60°, obstacle 3m ahead
    assert_abs_diff_eq!(report.obstacle.obstacle_world.x, 3.5, epsilon = 1e-10);
    assert_abs_diff_eq!(
        report.obstacle.obstacle_world.y,
        2.0 + 1.5 * 3f64.sqrt(),
        epsilon = 1e-10
    );

    let north = report.sweep.iter().find(|t| t.name == "North").unwrap();
    assert_abs_diff_eq!(north.turn_deg(), 60.0, epsilon = 1e-9);
}

#[test]
fn scenario_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[obstacle]
robot = {{ x = 0.0, y = 0.0, heading_deg = 180.0 }}
point = {{ x = 3.0, y = 0.0 }}
footprint_size = 1.0

[sweep]
robot = {{ x = 0.0, y = 0.0, heading_deg = -170.0 }}
targets = [{{ name = "behind-left", x = -1.0, y = 0.1763269807 }}]
"#
    )
    .unwrap();

    let config = ScenarioConfig::load(file.path()).unwrap();
    let report = config.evaluate().unwrap();

    assert_abs_diff_eq!(report.obstacle.obstacle_world.x, -3.0, epsilon = 1e-10);
    assert_abs_diff_eq!(report.obstacle.obstacle_world.y, 0.0, epsilon = 1e-10);
    assert_eq!(report.obstacle.footprint_world.len(), 3);

    // Target sits at 170°; from -170° the short way is 20° to the right
    assert_abs_diff_eq!(report.sweep[0].turn_deg(), -20.0, epsilon = 1e-6);

    let json = report.to_json().unwrap();
    assert!(json.contains("behind-left"));
}

#[test]
fn invalid_scenario_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[sweep]
robot = {{ x = 0.0, y = 0.0, heading_deg = 0.0 }}
targets = []
"#
    )
    .unwrap();

    let err = ScenarioConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, PlanarError::InvalidConfig(_)));
}
