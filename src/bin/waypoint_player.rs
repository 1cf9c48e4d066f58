//! Waypoint player command-line runner.
//!
//! Loads a controller configuration, then plays its profile on the host
//! clock, logging every setpoint against the controller's command topic.
//!
//! Run with: `cargo run --features cli -- --config steering.toml`

use std::convert::Infallible;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};

use waypoint_player::{
    load_config, Player, ProfileStore, Result, Setpoint, SetpointSink, StdClock, StdDelay,
};

#[derive(Parser, Debug)]
#[command(name = "waypoint-player")]
#[command(about = "Open-loop waypoint trajectory player", long_about = None)]
struct Args {
    /// Controller configuration (TOML)
    #[arg(short, long)]
    config: PathBuf,

    /// Stop after this many ticks (runs forever if omitted)
    #[arg(long)]
    ticks: Option<u32>,

    /// Log every tick decision
    #[arg(short, long)]
    verbose: bool,
}

/// Logs each setpoint as a command on the controller topic.
struct TopicSink {
    topic: heapless::String<64>,
}

impl SetpointSink for TopicSink {
    type Error = Infallible;

    fn emit(&mut self, setpoint: &Setpoint) -> core::result::Result<(), Self::Error> {
        info!(topic = %self.topic, data = ?setpoint.as_slice(), "command");
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::TRACE } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = load_config(&args.config)?;
    let profile = ProfileStore::from_config(&config)?;

    let topic = config.command_topic();
    info!(
        "Publishing {} goals on topic \"{}\" at {} Hz",
        config.pos_names.len(),
        topic,
        config.publishing_rate.0
    );

    let mut player = Player::new(
        &profile,
        config.publishing_rate,
        StdClock::new(),
        TopicSink { topic },
        StdDelay,
    )?;

    match args.ticks {
        Some(ticks) => player.run_for(ticks),
        None => player.run().map(|never| match never {}),
    }
}
