//! # waypoint-player
//!
//! Open-loop waypoint trajectory playback for actuator arrays.
//!
//! A profile is an ordered list of waypoints, one scalar per axis. On every
//! tick the engine works out how far into the current sequence it is,
//! linearly blends the two waypoints around that time, and hands the result
//! to an output sink. After the last segment and a configurable pause the
//! sequence starts over.
//!
//! ## Features
//!
//! - **Configuration-driven**: Define joints, goals and timing in TOML files
//! - **Explicit state machine**: Every tick reports its playback phase
//! - **no_std compatible**: Core library works without standard library
//! - **Clock-driven**: Jittery ticks skip ahead instead of accumulating drift
//! - **embedded-hal 1.0**: Uses `DelayNs` to pace the player
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waypoint_player::{Player, ProfileStore, StdClock, StdDelay};
//!
//! let config = waypoint_player::load_config("steering.toml")?;
//! let profile = ProfileStore::from_config(&config)?;
//!
//! let mut player = Player::new(
//!     &profile,
//!     config.publishing_rate,
//!     StdClock::new(),
//!     Vec::new(),
//!     StdDelay,
//! )?;
//! player.run_for(100)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and std clock/delay
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets
//! - `tracing`: Enables tracing logging on hosts
//! - `cli`: Builds the `waypoint-player` binary

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible to later modules.
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod playback;
pub mod profile;

// Re-exports for ergonomic API
pub use config::{validate_config, ControllerConfig};
pub use error::{Error, Result};
pub use playback::{Clock, PlaybackEngine, PlaybackPhase, Player, SetpointSink, Tick};
pub use profile::{ProfileBuilder, ProfileStore, Setpoint, Waypoint};

#[cfg(feature = "std")]
pub use playback::{StdClock, StdDelay};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Hertz, Instant, Seconds};
