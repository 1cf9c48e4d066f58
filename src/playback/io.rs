//! Collaborator traits: the clock the player reads and the sink it feeds.

use crate::config::units::Instant;
use crate::profile::Setpoint;

/// Source of monotonic timestamps.
///
/// Implemented for any `FnMut() -> Instant`, so a closure is enough for
/// simulated time.
pub trait Clock {
    /// Current time. Must never go backwards.
    fn now(&mut self) -> Instant;
}

impl<F> Clock for F
where
    F: FnMut() -> Instant,
{
    fn now(&mut self) -> Instant {
        self()
    }
}

/// Destination for computed setpoints.
pub trait SetpointSink {
    /// Error reported when a setpoint cannot be delivered.
    type Error;

    /// Deliver one setpoint.
    fn emit(&mut self, setpoint: &Setpoint) -> Result<(), Self::Error>;
}

/// Buffers setpoints; fails once the buffer is full.
impl<const N: usize> SetpointSink for heapless::Vec<Setpoint, N> {
    type Error = Setpoint;

    fn emit(&mut self, setpoint: &Setpoint) -> Result<(), Self::Error> {
        self.push(setpoint.clone())
    }
}

#[cfg(feature = "std")]
impl SetpointSink for std::vec::Vec<Setpoint> {
    type Error = core::convert::Infallible;

    fn emit(&mut self, setpoint: &Setpoint) -> Result<(), Self::Error> {
        self.push(setpoint.clone());
        Ok(())
    }
}

/// Monotonic clock backed by `std::time::Instant`.
///
/// Timestamps count from the moment the clock was created.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now(&mut self) -> Instant {
        let nanos = self.origin.elapsed().as_nanos();
        Instant::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

/// Blocking delay backed by `std::thread::sleep`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl embedded_hal::delay::DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}
