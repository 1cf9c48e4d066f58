//! Unit types for time quantities.
//!
//! Provides type-safe representations of durations, rates and monotonic
//! timestamps so seconds, hertz and nanoseconds are never confused.

use core::ops::{Add, Mul};

use serde::Deserialize;

/// Nanoseconds per second.
pub const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Seconds(pub f32);

impl Seconds {
    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Add for Seconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f32> for Seconds {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Frequency in hertz.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Hertz(pub f32);

impl Hertz {
    /// Create a new Hertz value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Period of one cycle in nanoseconds, rounded to the nearest nanosecond.
    ///
    /// Returns `None` for non-positive or non-finite rates.
    pub fn period_ns(self) -> Option<u64> {
        if !self.0.is_finite() || self.0 <= 0.0 {
            return None;
        }
        Some(libm::round(NANOS_PER_SEC as f64 / self.0 as f64) as u64)
    }
}

/// Monotonic timestamp in nanoseconds since an arbitrary origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(pub u64);

impl Instant {
    /// Create an instant from nanoseconds.
    #[inline]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Create an instant from milliseconds, saturating at `u64::MAX` ns.
    #[inline]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis.saturating_mul(1_000_000))
    }

    /// Get the raw nanosecond value.
    #[inline]
    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    /// Signed elapsed time from `earlier` to `self` in seconds.
    ///
    /// Negative when `self` precedes `earlier`.
    pub fn seconds_since(self, earlier: Instant) -> f32 {
        let delta = if self.0 >= earlier.0 {
            (self.0 - earlier.0) as f64
        } else {
            -((earlier.0 - self.0) as f64)
        };
        (delta / NANOS_PER_SEC as f64) as f32
    }
}

impl Add<Seconds> for Instant {
    type Output = Self;

    fn add(self, rhs: Seconds) -> Self::Output {
        let nanos = libm::round(rhs.0 as f64 * NANOS_PER_SEC as f64);
        if nanos <= 0.0 {
            self
        } else {
            Self(self.0.saturating_add(nanos as u64))
        }
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Seconds.
    fn seconds(self) -> Seconds;
    /// Convert to Hertz.
    fn hertz(self) -> Hertz;
}

impl UnitExt for f32 {
    #[inline]
    fn seconds(self) -> Seconds {
        Seconds(self)
    }

    #[inline]
    fn hertz(self) -> Hertz {
        Hertz(self)
    }
}
