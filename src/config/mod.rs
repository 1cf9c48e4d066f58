//! Configuration module for waypoint-player.
//!
//! Provides the typed controller configuration loaded from TOML files
//! (with `std` feature) or built in code, and its eager validation.

mod controller;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use controller::{ControllerConfig, GoalTable, GoalValues};
pub use validation::validate_config;

pub(crate) use validation::require_goal;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Hertz, Instant, Seconds};
