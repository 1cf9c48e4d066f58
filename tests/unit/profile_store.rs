//! Unit tests for building profiles from configuration.

use waypoint_player::config::parse_config;
use waypoint_player::error::{ConfigError, Error};
use waypoint_player::ProfileStore;

/// Test waypoint order follows `pos_names`, not table order.
#[test]
fn test_waypoints_follow_name_order() {
    let config = parse_config(
        r#"
joints = ["joint1"]
pos_names = ["second", "first"]
vel_names = []

[positions]
first = [1.0]
second = [2.0]
"#,
    )
    .expect("Config should parse");

    let store = ProfileStore::from_config(&config).expect("Profile should build");
    assert_eq!(store.waypoint(0).map(|w| w.as_slice()), Some(&[2.0][..]));
    assert_eq!(store.waypoint(1).map(|w| w.as_slice()), Some(&[1.0][..]));
}

/// Test velocities are retained alongside positions.
#[test]
fn test_velocities_retained() {
    let config = parse_config(
        r#"
pos_names = ["pos1", "pos2"]
vel_names = ["vel1"]

[positions]
pos1 = [0.0, 0.0]
pos2 = [1.0, 2.0]

[velocities]
vel1 = [0.25, 0.5]
"#,
    )
    .expect("Config should parse");

    let store = ProfileStore::from_config(&config).expect("Profile should build");
    assert_eq!(store.velocity_count(), 1);
    assert_eq!(store.velocity(0).map(|v| v.as_slice()), Some(&[0.25, 0.5][..]));
}

/// Test an empty waypoint list is a configuration error.
#[test]
fn test_no_position_goals() {
    let config = parse_config(
        r#"
pos_names = []
vel_names = []
"#,
    );
    assert!(matches!(
        config,
        Err(Error::Config(ConfigError::EmptyProfile))
    ));
}
