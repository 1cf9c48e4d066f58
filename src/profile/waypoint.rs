//! Fixed-capacity waypoint and setpoint vectors.

use core::ops::Deref;

use heapless::Vec;

/// Maximum number of controlled axes per waypoint.
pub const MAX_AXES: usize = 16;

/// Maximum number of waypoints in a profile.
pub const MAX_WAYPOINTS: usize = 32;

/// One configured position: a scalar per controlled axis.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Waypoint(Vec<f32, MAX_AXES>);

impl Waypoint {
    /// Copy values into a waypoint.
    ///
    /// Returns `None` if there are more than [`MAX_AXES`] values.
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        Vec::from_slice(values).ok().map(Self)
    }

    /// Get the values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.0.as_slice()
    }

    /// Linear blend towards `end`: `self + fraction * (end - self)`.
    ///
    /// Both waypoints must have the same length; extra values on either side
    /// are ignored.
    pub fn lerp(&self, end: &Waypoint, fraction: f32) -> Setpoint {
        self.0
            .iter()
            .zip(end.0.iter())
            .map(|(start, end)| start + fraction * (end - start))
            .collect()
    }
}

impl Deref for Waypoint {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        self.as_slice()
    }
}

/// Interpolated output vector, one per successful tick.
///
/// Holds at most [`MAX_AXES`] values. Collecting from an iterator keeps the
/// first [`MAX_AXES`] items and discards the rest.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Setpoint(Vec<f32, MAX_AXES>);

impl Setpoint {
    /// Get the values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.0.as_slice()
    }

    /// Consume the setpoint, returning its values.
    #[inline]
    pub fn into_inner(self) -> Vec<f32, MAX_AXES> {
        self.0
    }
}

impl Deref for Setpoint {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        self.as_slice()
    }
}

impl From<&Waypoint> for Setpoint {
    fn from(waypoint: &Waypoint) -> Self {
        Self(waypoint.0.clone())
    }
}

impl FromIterator<f32> for Setpoint {
    /// Collects the first [`MAX_AXES`] values; any further items are dropped.
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self(iter.into_iter().take(MAX_AXES).collect())
    }
}
