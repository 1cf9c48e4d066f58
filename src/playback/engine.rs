//! Playback engine - maps elapsed time onto the waypoint profile.

use libm::floorf;

use crate::config::units::{Instant, Seconds};
use crate::profile::{ProfileStore, Setpoint};

use super::state::{SegmentPosition, Tick};

/// Locate `elapsed` seconds within a profile of fixed-length segments.
///
/// The index is `floor(elapsed / segment_duration)`; the fraction is the
/// remainder scaled to the segment, in `[0, 1)`.
pub fn locate(elapsed: f32, segment_duration: Seconds) -> SegmentPosition {
    let segment = segment_duration.0;
    let index = floorf(elapsed / segment);
    SegmentPosition {
        index: index as i64,
        fraction: (elapsed - index * segment) / segment,
    }
}

/// Open-loop trajectory playback state machine.
///
/// The only mutable state is the sequence start time. It moves forward to
/// the tick time once a full profile-and-wait cycle has elapsed.
#[derive(Debug, Clone)]
pub struct PlaybackEngine<'a> {
    profile: &'a ProfileStore,
    sequence_start: Instant,
}

impl<'a> PlaybackEngine<'a> {
    /// Create an engine whose first sequence starts at `start`.
    pub fn new(profile: &'a ProfileStore, start: Instant) -> Self {
        Self {
            profile,
            sequence_start: start,
        }
    }

    /// Get the profile being played.
    #[inline]
    pub fn profile(&self) -> &'a ProfileStore {
        self.profile
    }

    /// Get the start time of the current sequence.
    #[inline]
    pub fn sequence_start(&self) -> Instant {
        self.sequence_start
    }

    /// Seconds elapsed in the current sequence at `now`.
    #[inline]
    pub fn elapsed(&self, now: Instant) -> f32 {
        now.seconds_since(self.sequence_start)
    }

    /// Start a new sequence at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.sequence_start = now;
    }

    /// Evaluate one tick, returning the setpoint to emit, if any.
    pub fn tick(&mut self, now: Instant) -> Option<Setpoint> {
        self.step(now).into_setpoint()
    }

    /// Evaluate one tick, returning the full outcome.
    ///
    /// Boundaries use strict comparisons: a tick exactly at the cycle end
    /// still counts as waiting, one exactly at the profile end still
    /// locates a segment.
    pub fn step(&mut self, now: Instant) -> Tick {
        let elapsed = self.elapsed(now);
        trace!("Current trajectory duration {} s", elapsed);

        if elapsed > self.profile.cycle_duration().0 {
            self.sequence_start = now;
            debug!("Trajectory finished, resetting start time to {} ns", now.as_nanos());
            return Tick::Restarting;
        }

        if elapsed > self.profile.profile_duration().0 {
            trace!(
                "Trajectory completed, waiting for restart. Current duration {} s of {} s",
                elapsed,
                self.profile.cycle_duration().0
            );
            return Tick::Waiting { elapsed };
        }

        let segment = locate(elapsed, self.profile.segment_duration());
        if segment.index < 0 {
            debug!("Starting profile index out of range. Index is {}. Ignoring", segment.index);
            return Tick::OutOfRangeLow {
                index: segment.index,
            };
        }

        let next_index = segment.index + 1;
        let (start, end) = match (
            self.profile.waypoint(segment.index as usize),
            self.profile.waypoint(next_index as usize),
        ) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                trace!("Ending profile index out of range. Index is {}. Ignoring", next_index);
                return Tick::OutOfRangeHigh { next_index };
            }
        };

        let setpoint = start.lerp(end, segment.fraction);
        trace!(
            "Segment {} at fraction {} -> {:?}",
            segment.index,
            segment.fraction,
            setpoint.as_slice()
        );

        Tick::Interpolating { segment, setpoint }
    }
}
