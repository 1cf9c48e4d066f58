//! Immutable waypoint profile with derived timing.

use heapless::Vec;

use crate::config::units::Seconds;
use crate::config::{require_goal, validate_config, ControllerConfig};
use crate::error::{ConfigError, Error, Result};

use super::waypoint::{Waypoint, MAX_WAYPOINTS};

/// Ordered waypoints plus the durations derived from them.
///
/// Built once at startup and never mutated afterwards, so a single store can
/// be shared by reference between any number of engines or threads.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    waypoints: Vec<Waypoint, MAX_WAYPOINTS>,
    velocities: Vec<Waypoint, MAX_WAYPOINTS>,
    axis_count: usize,
    segment_duration: Seconds,
    wait_duration: Seconds,
    profile_duration: Seconds,
    cycle_duration: Seconds,
}

impl ProfileStore {
    /// Build a profile from ordered waypoint value lists.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if there are no waypoints, a waypoint is empty,
    /// waypoint lengths differ, capacity is exceeded, or a duration is out of
    /// range.
    pub fn new<I, W>(waypoints: I, segment_duration: Seconds, wait_duration: Seconds) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[f32]>,
    {
        check_durations(segment_duration, wait_duration)?;

        let mut stored: Vec<Waypoint, MAX_WAYPOINTS> = Vec::new();
        let mut axis_count = None;

        for (index, values) in waypoints.into_iter().enumerate() {
            let values = values.as_ref();
            if values.is_empty() {
                return Err(Error::Config(ConfigError::EmptyWaypoint(index)));
            }

            let expected = *axis_count.get_or_insert(values.len());
            if values.len() != expected {
                return Err(Error::Config(ConfigError::AxisCountMismatch {
                    index,
                    expected,
                    found: values.len(),
                }));
            }

            let waypoint = Waypoint::from_slice(values)
                .ok_or(Error::Config(ConfigError::TooManyAxes(values.len())))?;
            stored
                .push(waypoint)
                .map_err(|_| Error::Config(ConfigError::TooManyWaypoints(index + 1)))?;
        }

        let axis_count = axis_count.ok_or(Error::Config(ConfigError::EmptyProfile))?;

        let profile_duration = segment_duration * stored.len() as f32;
        let cycle_duration = profile_duration + wait_duration;

        Ok(Self {
            waypoints: stored,
            velocities: Vec::new(),
            axis_count,
            segment_duration,
            wait_duration,
            profile_duration,
            cycle_duration,
        })
    }

    /// Build a profile from a controller configuration.
    ///
    /// Position goals become waypoints in `pos_names` order. Velocity goals
    /// are validated and retained but playback never reads them.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration fails validation.
    pub fn from_config(config: &ControllerConfig) -> Result<Self> {
        validate_config(config)?;

        let mut positions: Vec<&[f32], MAX_WAYPOINTS> = Vec::new();
        for name in config.position_names() {
            debug!("Extracting positions for goal {}", name);
            let values = require_goal(&config.positions, name)?;
            positions
                .push(values)
                .map_err(|_| Error::Config(ConfigError::TooManyWaypoints(positions.len() + 1)))?;
        }

        let mut store = Self::new(
            positions,
            config.segment_duration,
            config.wait_between_profiles,
        )?;

        for name in config.velocity_names() {
            debug!("Extracting velocities for goal {}", name);
            let values = require_goal(&config.velocities, name)?;
            let velocity = Waypoint::from_slice(values)
                .ok_or(Error::Config(ConfigError::TooManyAxes(values.len())))?;
            store
                .velocities
                .push(velocity)
                .map_err(|_| Error::Config(ConfigError::TooManyWaypoints(MAX_WAYPOINTS + 1)))?;
        }

        info!("Profile duration set to: {} s", store.profile_duration.0);
        info!("Profile and wait duration set to: {} s", store.cycle_duration.0);

        Ok(store)
    }

    /// Number of waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`: construction rejects empty profiles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Get a waypoint by index.
    #[inline]
    pub fn waypoint(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Iterate over waypoints in order.
    pub fn waypoints(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    /// Get velocity values for a goal by index.
    #[inline]
    pub fn velocity(&self, index: usize) -> Option<&Waypoint> {
        self.velocities.get(index)
    }

    /// Number of velocity goals loaded alongside the positions.
    #[inline]
    pub fn velocity_count(&self) -> usize {
        self.velocities.len()
    }

    /// Number of controlled axes (length of every waypoint).
    #[inline]
    pub fn axis_count(&self) -> usize {
        self.axis_count
    }

    /// Time allotted to each segment.
    #[inline]
    pub fn segment_duration(&self) -> Seconds {
        self.segment_duration
    }

    /// Pause after the profile before restarting.
    #[inline]
    pub fn wait_duration(&self) -> Seconds {
        self.wait_duration
    }

    /// Segment duration times waypoint count.
    #[inline]
    pub fn profile_duration(&self) -> Seconds {
        self.profile_duration
    }

    /// Profile duration plus wait duration.
    #[inline]
    pub fn cycle_duration(&self) -> Seconds {
        self.cycle_duration
    }
}

fn check_durations(segment: Seconds, wait: Seconds) -> Result<()> {
    if !segment.0.is_finite() || segment.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidSegmentDuration(segment.0)));
    }
    if !wait.0.is_finite() || wait.0 < 0.0 {
        return Err(Error::Config(ConfigError::InvalidWaitDuration(wait.0)));
    }
    Ok(())
}
