//! Playback module for waypoint-player.
//!
//! Provides the time-driven playback state machine and the periodic player
//! that drives it from a clock into an output sink.

mod engine;
mod io;
mod player;
mod state;

pub use engine::{locate, PlaybackEngine};
pub use io::{Clock, SetpointSink};
#[cfg(feature = "std")]
pub use io::{StdClock, StdDelay};
pub use player::Player;
pub use state::{PlaybackPhase, SegmentPosition, Tick};
