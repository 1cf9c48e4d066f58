//! Unit tests for TOML configuration parsing.

use waypoint_player::config::{parse_config, ControllerConfig, Hertz, Seconds};

/// Test parsing a full controller configuration from TOML.
#[test]
fn test_parse_controller_config() {
    let toml_str = r#"
controller_name = "wheel_controller"
publishing_rate_hz = 50.0
wait_sec_between_profiles = 2.5
segment_duration_s = 0.5
joints = ["left", "right", "rear"]
pos_names = ["a", "b"]
vel_names = ["va"]

[positions]
a = [0.0, 0.0, 0.0]
b = [0.1, -0.1, 0.2]

[velocities]
va = [1.0, 1.0, 1.0]
"#;

    let config: ControllerConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.controller_name.as_str(), "wheel_controller");
    assert_eq!(config.publishing_rate, Hertz(50.0));
    assert_eq!(config.wait_between_profiles, Seconds(2.5));
    assert_eq!(config.segment_duration, Seconds(0.5));
    assert!(config.joint_names().eq(["left", "right", "rear"]));
    assert_eq!(config.position("b"), Some(&[0.1, -0.1, 0.2][..]));
    assert_eq!(config.velocity("va"), Some(&[1.0, 1.0, 1.0][..]));
    assert_eq!(config.command_topic().as_str(), "/wheel_controller/commands");
}

/// Test that omitted scalars fall back to the steering controller defaults.
#[test]
fn test_parse_applies_defaults() {
    let toml_str = r#"
[positions]
pos1 = [0.0, 0.0]
pos2 = [1.0, 1.0]

[velocities]
vel1 = [0.1, 0.1]
vel2 = [0.1, 0.1]
"#;

    let config = parse_config(toml_str).expect("Defaults should validate");

    assert_eq!(config.controller_name.as_str(), "steering_controller");
    assert_eq!(config.publishing_rate, Hertz(25.0));
    assert_eq!(config.wait_between_profiles, Seconds(1.0));
    assert_eq!(config.segment_duration, Seconds(1.0));
    assert!(config.joint_names().eq(["joint1", "joint2"]));
    assert!(config.position_names().eq(["pos1", "pos2"]));
}

/// Test that integer-valued scalars are accepted for rate and wait.
#[test]
fn test_parse_integer_scalars() {
    let toml_str = r#"
publishing_rate_hz = 25
wait_sec_between_profiles = 1
vel_names = []

[positions]
pos1 = [0, 0]
pos2 = [1, 2]
"#;

    let config = parse_config(toml_str).expect("Integer scalars should parse");
    assert_eq!(config.publishing_rate, Hertz(25.0));
    assert_eq!(config.wait_between_profiles, Seconds(1.0));
    assert_eq!(config.position("pos2"), Some(&[1.0, 2.0][..]));
}

/// Test that goal lists longer than the axis capacity fail to parse.
#[test]
fn test_parse_rejects_oversized_goal() {
    let values = vec!["0.0"; 17].join(", ");
    let toml_str = format!("[positions]\npos1 = [{values}]\n");
    assert!(toml::from_str::<ControllerConfig>(&toml_str).is_err());
}
