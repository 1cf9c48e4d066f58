//! Unit test harness for waypoint-player.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
mod profile_store;
