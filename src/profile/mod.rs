//! Profile module for waypoint-player.
//!
//! Provides the immutable waypoint store the playback engine reads from,
//! and a builder for assembling one in code.

mod builder;
mod store;
mod waypoint;

pub use builder::ProfileBuilder;
pub use store::ProfileStore;
pub use waypoint::{Setpoint, Waypoint, MAX_AXES, MAX_WAYPOINTS};
