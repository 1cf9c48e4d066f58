//! Playback phases and per-tick outcomes.

use crate::profile::Setpoint;

/// Phase the engine was in when evaluating a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackPhase {
    /// Full profile-and-wait cycle elapsed; sequence start was reset.
    Restarting,
    /// Profile traversed; pausing before the next cycle.
    Waiting,
    /// Segment index below zero (time went backwards).
    OutOfRangeLow,
    /// No waypoint after the current segment.
    OutOfRangeHigh,
    /// Between two waypoints; a setpoint was produced.
    Interpolating,
}

impl PlaybackPhase {
    /// Whether this phase produces output.
    #[inline]
    pub fn emits(self) -> bool {
        self == PlaybackPhase::Interpolating
    }
}

/// Position within the profile: segment index and fraction through it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPosition {
    /// Index of the segment's starting waypoint (may be negative).
    pub index: i64,
    /// Fraction through the segment, in `[0, 1)`.
    pub fraction: f32,
}

/// Outcome of a single tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Sequence start was reset to the tick time.
    Restarting,
    /// In the wait period after the profile.
    Waiting {
        /// Elapsed time since sequence start, in seconds.
        elapsed: f32,
    },
    /// Starting waypoint index below zero.
    OutOfRangeLow {
        /// Computed segment index.
        index: i64,
    },
    /// Ending waypoint index past the last waypoint.
    OutOfRangeHigh {
        /// Computed index of the segment's ending waypoint.
        next_index: i64,
    },
    /// A setpoint was interpolated.
    Interpolating {
        /// Segment and fraction used.
        segment: SegmentPosition,
        /// Interpolated output vector.
        setpoint: Setpoint,
    },
}

impl Tick {
    /// Get the phase of this tick.
    pub fn phase(&self) -> PlaybackPhase {
        match self {
            Tick::Restarting => PlaybackPhase::Restarting,
            Tick::Waiting { .. } => PlaybackPhase::Waiting,
            Tick::OutOfRangeLow { .. } => PlaybackPhase::OutOfRangeLow,
            Tick::OutOfRangeHigh { .. } => PlaybackPhase::OutOfRangeHigh,
            Tick::Interpolating { .. } => PlaybackPhase::Interpolating,
        }
    }

    /// Get the produced setpoint, if any.
    pub fn setpoint(&self) -> Option<&Setpoint> {
        match self {
            Tick::Interpolating { setpoint, .. } => Some(setpoint),
            _ => None,
        }
    }

    /// Consume the tick, returning the produced setpoint, if any.
    pub fn into_setpoint(self) -> Option<Setpoint> {
        match self {
            Tick::Interpolating { setpoint, .. } => Some(setpoint),
            _ => None,
        }
    }
}
