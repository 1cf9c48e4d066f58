//! Profile builder for programmatic profile creation.

use heapless::Vec;

use crate::config::units::Seconds;
use crate::error::{ConfigError, Error, Result};

use super::store::ProfileStore;
use super::waypoint::{Waypoint, MAX_WAYPOINTS};

/// Builder for creating a [`ProfileStore`] in code.
///
/// Segment and wait durations default to one second each.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    waypoints: Vec<Waypoint, MAX_WAYPOINTS>,
    segment_duration: Seconds,
    wait_duration: Seconds,
    overflow: Option<ConfigError>,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileBuilder {
    /// Create a new profile builder.
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
            segment_duration: Seconds(1.0),
            wait_duration: Seconds(1.0),
            overflow: None,
        }
    }

    /// Append a waypoint.
    pub fn waypoint(mut self, values: &[f32]) -> Self {
        if self.overflow.is_some() {
            return self;
        }
        let Some(waypoint) = Waypoint::from_slice(values) else {
            self.overflow = Some(ConfigError::TooManyAxes(values.len()));
            return self;
        };
        if self.waypoints.push(waypoint).is_err() {
            self.overflow = Some(ConfigError::TooManyWaypoints(MAX_WAYPOINTS + 1));
        }
        self
    }

    /// Append several waypoints in order.
    pub fn waypoints<W: AsRef<[f32]>>(self, list: &[W]) -> Self {
        list.iter().fold(self, |builder, values| builder.waypoint(values.as_ref()))
    }

    /// Set the time allotted to each segment.
    pub fn segment_duration(mut self, duration: Seconds) -> Self {
        self.segment_duration = duration;
        self
    }

    /// Set the pause between profile cycles.
    pub fn wait(mut self, duration: Seconds) -> Self {
        self.wait_duration = duration;
        self
    }

    /// Build the profile.
    ///
    /// # Errors
    ///
    /// Returns an error if capacity was exceeded while adding waypoints or if
    /// [`ProfileStore::new`] rejects the profile.
    pub fn build(self) -> Result<ProfileStore> {
        if let Some(err) = self.overflow {
            return Err(Error::Config(err));
        }

        ProfileStore::new(
            self.waypoints.iter().map(Waypoint::as_slice),
            self.segment_duration,
            self.wait_duration,
        )
    }
}
