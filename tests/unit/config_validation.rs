//! Unit tests for configuration validation.

use waypoint_player::config::{validate_config, ControllerConfig};
use waypoint_player::error::{ConfigError, Error};

const VALID: &str = r#"
joints = ["joint1", "joint2"]
pos_names = ["pos1", "pos2"]
vel_names = ["vel1", "vel2"]

[positions]
pos1 = [0.0, 0.0]
pos2 = [1.0, 2.0]

[velocities]
vel1 = [0.5, 0.5]
vel2 = [0.5, 0.5]
"#;

fn parse(toml_str: &str) -> ControllerConfig {
    toml::from_str(toml_str).expect("Failed to parse TOML")
}

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    assert!(validate_config(&parse(VALID)).is_ok());
}

/// Test validation fails when no joints are configured.
#[test]
fn test_empty_joints() {
    let config = parse(&VALID.replace(r#"joints = ["joint1", "joint2"]"#, "joints = []"));
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::NoJoints))
    ));
}

/// Test validation fails for a position goal that is never defined.
#[test]
fn test_missing_position_goal() {
    let config = parse(&VALID.replace("pos2 = [1.0, 2.0]", ""));
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::GoalNotFound(name))) if name.as_str() == "pos2"
    ));
}

/// Test validation fails for an empty position goal.
#[test]
fn test_empty_position_goal() {
    let config = parse(&VALID.replace("pos1 = [0.0, 0.0]", "pos1 = []"));
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::EmptyGoal(name))) if name.as_str() == "pos1"
    ));
}

/// Test validation fails for an empty velocity goal even though it is unused.
#[test]
fn test_empty_velocity_goal() {
    let config = parse(&VALID.replace("vel2 = [0.5, 0.5]", "vel2 = []"));
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::EmptyGoal(name))) if name.as_str() == "vel2"
    ));
}

/// Test validation fails when a position does not cover every joint.
#[test]
fn test_position_joint_mismatch() {
    let config = parse(&VALID.replace("pos2 = [1.0, 2.0]", "pos2 = [1.0, 2.0, 3.0]"));
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::AxisCountMismatch {
            index: 1,
            expected: 2,
            found: 3
        }))
    ));
}

/// Test validation fails for a negative wait.
#[test]
fn test_negative_wait() {
    let config = parse(&format!("wait_sec_between_profiles = -1.0\n{VALID}"));
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidWaitDuration(_)))
    ));
}

/// Test that a zero wait is accepted.
#[test]
fn test_zero_wait_is_valid() {
    let config = parse(&format!("wait_sec_between_profiles = 0.0\n{VALID}"));
    assert!(validate_config(&config).is_ok());
}

/// Test that the default configuration, which names goals but defines none, is invalid.
#[test]
fn test_default_config_needs_goals() {
    assert!(matches!(
        validate_config(&ControllerConfig::default()),
        Err(Error::Config(ConfigError::GoalNotFound(_)))
    ));
}
