//! Periodic player - drives the engine from a clock into a sink.

use embedded_hal::delay::DelayNs;

use crate::config::units::Hertz;
use crate::error::{ConfigError, Error, OutputError, Result};
use crate::profile::ProfileStore;

use super::engine::PlaybackEngine;
use super::io::{Clock, SetpointSink};
use super::state::PlaybackPhase;

/// Runs a [`PlaybackEngine`] at a fixed cadence.
///
/// Generic over:
/// - `C`: timestamp source (must implement [`Clock`])
/// - `S`: setpoint destination (must implement [`SetpointSink`])
/// - `D`: delay provider between ticks (must implement `DelayNs`)
///
/// The cadence is best effort. Playback position always follows the clock,
/// so late ticks skip ahead rather than accumulate drift.
pub struct Player<'a, C, S, D>
where
    C: Clock,
    S: SetpointSink,
    D: DelayNs,
{
    engine: PlaybackEngine<'a>,
    clock: C,
    sink: S,
    delay: D,
    period_ns: u64,
}

impl<'a, C, S, D> Player<'a, C, S, D>
where
    C: Clock,
    S: SetpointSink,
    D: DelayNs,
{
    /// Create a player; the first sequence starts at the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPublishRate` if `rate` is not positive.
    pub fn new(profile: &'a ProfileStore, rate: Hertz, mut clock: C, sink: S, delay: D) -> Result<Self> {
        let period_ns = rate
            .period_ns()
            .ok_or(Error::Config(ConfigError::InvalidPublishRate(rate.0)))?;
        let start = clock.now();

        info!(
            "Playing {} goals over {} axes at {} Hz",
            profile.len(),
            profile.axis_count(),
            rate.0
        );

        Ok(Self {
            engine: PlaybackEngine::new(profile, start),
            clock,
            sink,
            delay,
            period_ns,
        })
    }

    /// Get the engine.
    #[inline]
    pub fn engine(&self) -> &PlaybackEngine<'a> {
        &self.engine
    }

    /// Get the sink.
    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get the sink mutably.
    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tick period in nanoseconds.
    #[inline]
    pub fn period_ns(&self) -> u64 {
        self.period_ns
    }

    /// Run one tick now, emitting a setpoint if one is produced.
    ///
    /// # Errors
    ///
    /// Returns `OutputError::SinkFailed` if the sink rejects the setpoint.
    pub fn poll(&mut self) -> Result<PlaybackPhase> {
        let now = self.clock.now();
        let tick = self.engine.step(now);
        let phase = tick.phase();

        if let Some(setpoint) = tick.setpoint() {
            debug!("Publishing movement command {:?}", setpoint.as_slice());
            if self.sink.emit(setpoint).is_err() {
                warn!("Setpoint sink failed at {} ns", now.as_nanos());
                return Err(Error::Output(OutputError::SinkFailed));
            }
        }

        Ok(phase)
    }

    /// Poll then wait one period, `ticks` times.
    ///
    /// # Errors
    ///
    /// Stops at the first sink failure.
    pub fn run_for(&mut self, ticks: u32) -> Result<()> {
        for _ in 0..ticks {
            self.poll()?;
            self.wait_period();
        }
        Ok(())
    }

    /// Poll then wait one period, forever.
    ///
    /// # Errors
    ///
    /// Returns only when the sink fails.
    pub fn run(&mut self) -> Result<core::convert::Infallible> {
        loop {
            self.poll()?;
            self.wait_period();
        }
    }

    /// Wait one period; periods longer than `u32::MAX` ns are split.
    fn wait_period(&mut self) {
        let mut remaining = self.period_ns;
        while remaining > 0 {
            let chunk = u32::try_from(remaining).unwrap_or(u32::MAX);
            self.delay.delay_ns(chunk);
            remaining -= u64::from(chunk);
        }
    }

    /// Release the clock, sink and delay.
    pub fn release(self) -> (C, S, D) {
        (self.clock, self.sink, self.delay)
    }
}
