//! Error types for waypoint-player library.
//!
//! Configuration problems are fatal and surface at startup. Tick-time
//! conditions are never errors; only a failing output sink is reported
//! while playing.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all waypoint-player operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Output sink error
    Output(OutputError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// No joints configured
    NoJoints,
    /// Too many joints (axes) for the fixed-capacity profile
    TooManyAxes(usize),
    /// Profile contains no waypoints
    EmptyProfile,
    /// Too many waypoints for the fixed-capacity profile
    TooManyWaypoints(usize),
    /// Waypoint at the given index has no values
    EmptyWaypoint(usize),
    /// Waypoint length differs from the profile's axis count
    AxisCountMismatch {
        /// Index of the offending waypoint
        index: usize,
        /// Expected number of values (axis count)
        expected: usize,
        /// Number of values found
        found: usize,
    },
    /// Named goal not present in its table
    GoalNotFound(heapless::String<32>),
    /// Named goal present but has no values
    EmptyGoal(heapless::String<32>),
    /// Invalid segment duration (must be finite and > 0)
    InvalidSegmentDuration(f32),
    /// Invalid wait duration (must be finite and >= 0)
    InvalidWaitDuration(f32),
    /// Invalid publishing rate (must be finite and > 0)
    InvalidPublishRate(f32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Output sink errors.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputError {
    /// Sink rejected or failed to deliver a setpoint
    SinkFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Output(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::NoJoints => write!(f, "\"joints\" parameter is not set"),
            ConfigError::TooManyAxes(n) => write!(f, "Too many axes: {}", n),
            ConfigError::EmptyProfile => write!(f, "Profile has no waypoints"),
            ConfigError::TooManyWaypoints(n) => write!(f, "Too many waypoints: {}", n),
            ConfigError::EmptyWaypoint(index) => write!(f, "Waypoint {} has no values", index),
            ConfigError::AxisCountMismatch { index, expected, found } => write!(
                f,
                "Waypoint {} has {} values, expected {}",
                index, found, expected
            ),
            ConfigError::GoalNotFound(name) => write!(f, "Values for goal '{}' not set", name),
            ConfigError::EmptyGoal(name) => write!(f, "Values for goal '{}' are empty", name),
            ConfigError::InvalidSegmentDuration(v) => {
                write!(f, "Invalid segment duration: {}. Must be > 0", v)
            }
            ConfigError::InvalidWaitDuration(v) => {
                write!(f, "Invalid wait duration: {}. Must be >= 0", v)
            }
            ConfigError::InvalidPublishRate(v) => {
                write!(f, "Invalid publishing rate: {}. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::SinkFailed => write!(f, "Setpoint sink failed"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<OutputError> for Error {
    fn from(e: OutputError) -> Self {
        Error::Output(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for OutputError {}
