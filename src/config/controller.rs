//! Controller configuration - root configuration structure.

use core::fmt::Write;

use heapless::{FnvIndexMap, String, Vec};
use serde::Deserialize;

use super::units::{Hertz, Seconds};
use crate::profile::{MAX_AXES, MAX_WAYPOINTS};

/// Scalar values of one named goal, one per joint.
pub type GoalValues = Vec<f32, MAX_AXES>;

/// Named goal tables keyed by goal name.
pub type GoalTable = FnvIndexMap<String<32>, GoalValues, MAX_WAYPOINTS>;

/// Root configuration structure from TOML.
///
/// Goals are listed by name in `pos_names`/`vel_names`; their values live in
/// the `positions`/`velocities` tables. List order defines waypoint order.
#[derive(Debug, Clone, Deserialize)]
pub struct ControllerConfig {
    /// Controller name, used to derive the command topic.
    #[serde(default = "default_controller_name")]
    pub controller_name: String<32>,

    /// Rate at which setpoints are computed and published.
    #[serde(default = "default_publishing_rate", rename = "publishing_rate_hz")]
    pub publishing_rate: Hertz,

    /// Pause after a full profile traversal before restarting.
    #[serde(default = "default_wait", rename = "wait_sec_between_profiles")]
    pub wait_between_profiles: Seconds,

    /// Time allotted to each segment between consecutive waypoints.
    #[serde(default = "default_segment_duration", rename = "segment_duration_s")]
    pub segment_duration: Seconds,

    /// Controlled joint names, one per axis.
    #[serde(default = "default_joints")]
    pub joints: Vec<String<32>, MAX_AXES>,

    /// Ordered position goal names.
    #[serde(default = "default_pos_names")]
    pub pos_names: Vec<String<32>, MAX_WAYPOINTS>,

    /// Ordered velocity goal names.
    #[serde(default = "default_vel_names")]
    pub vel_names: Vec<String<32>, MAX_WAYPOINTS>,

    /// Position values by goal name.
    #[serde(default)]
    pub positions: GoalTable,

    /// Velocity values by goal name.
    #[serde(default)]
    pub velocities: GoalTable,
}

fn names<const N: usize>(list: &[&str]) -> Vec<String<32>, N> {
    list.iter()
        .filter_map(|name| String::try_from(*name).ok())
        .take(N)
        .collect()
}

fn default_controller_name() -> String<32> {
    String::try_from("steering_controller").unwrap_or_default()
}

fn default_publishing_rate() -> Hertz {
    Hertz(25.0)
}

fn default_wait() -> Seconds {
    Seconds(1.0)
}

fn default_segment_duration() -> Seconds {
    Seconds(1.0)
}

fn default_joints() -> Vec<String<32>, MAX_AXES> {
    names(&["joint1", "joint2"])
}

fn default_pos_names() -> Vec<String<32>, MAX_WAYPOINTS> {
    names(&["pos1", "pos2"])
}

fn default_vel_names() -> Vec<String<32>, MAX_WAYPOINTS> {
    names(&["vel1", "vel2"])
}

/// Find a goal's values by name.
pub(crate) fn lookup<'a>(table: &'a GoalTable, name: &str) -> Option<&'a [f32]> {
    table
        .iter()
        .find(|(k, _)| k.as_str() == name)
        .map(|(_, v)| v.as_slice())
}

impl ControllerConfig {
    /// Get position values for a named goal.
    pub fn position(&self, name: &str) -> Option<&[f32]> {
        lookup(&self.positions, name)
    }

    /// Get velocity values for a named goal.
    pub fn velocity(&self, name: &str) -> Option<&[f32]> {
        lookup(&self.velocities, name)
    }

    /// Number of controlled axes.
    pub fn axis_count(&self) -> usize {
        self.joints.len()
    }

    /// List joint names in axis order.
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.iter().map(|s| s.as_str())
    }

    /// List position goal names in waypoint order.
    pub fn position_names(&self) -> impl Iterator<Item = &str> {
        self.pos_names.iter().map(|s| s.as_str())
    }

    /// List velocity goal names in waypoint order.
    pub fn velocity_names(&self) -> impl Iterator<Item = &str> {
        self.vel_names.iter().map(|s| s.as_str())
    }

    /// Topic the computed setpoints are published on: `/<controller_name>/commands`.
    pub fn command_topic(&self) -> String<64> {
        let mut topic = String::new();
        // Cannot overflow: 32-byte name plus 11 bytes of decoration.
        let _ = write!(topic, "/{}/commands", self.controller_name.as_str());
        topic
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            controller_name: default_controller_name(),
            publishing_rate: default_publishing_rate(),
            wait_between_profiles: default_wait(),
            segment_duration: default_segment_duration(),
            joints: default_joints(),
            pos_names: default_pos_names(),
            vel_names: default_vel_names(),
            positions: FnvIndexMap::new(),
            velocities: FnvIndexMap::new(),
        }
    }
}
