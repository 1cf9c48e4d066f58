//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::ControllerConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use waypoint_player::load_config;
///
/// let config = load_config("steering.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ControllerConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        Error::Config(ConfigError::IoError(message(&e.to_string())))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<ControllerConfig> {
    let config: ControllerConfig = toml::from_str(content).map_err(|e| {
        Error::Config(ConfigError::ParseError(message(e.message())))
    })?;

    super::validation::validate_config(&config)?;

    debug!(
        "Loaded controller '{}' with {} joints and {} goals",
        config.controller_name.as_str(),
        config.axis_count(),
        config.pos_names.len()
    );

    Ok(config)
}

fn message(msg: &str) -> heapless::String<128> {
    heapless::String::try_from(truncate(msg, 128)).unwrap_or_default()
}

fn truncate(msg: &str, max: usize) -> &str {
    if msg.len() <= max {
        return msg;
    }
    let mut end = max;
    while !msg.is_char_boundary(end) {
        end -= 1;
    }
    &msg[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEERING: &str = r#"
controller_name = "steering_controller"
publishing_rate_hz = 25.0
wait_sec_between_profiles = 1.0
joints = ["joint1", "joint2"]
pos_names = ["pos1", "pos2", "pos3"]
vel_names = ["vel1"]

[positions]
pos1 = [0.0, 0.0]
pos2 = [1.0, 2.0]
pos3 = [2.0, 4.0]

[velocities]
vel1 = [0.5, 0.5]
"#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(STEERING).unwrap();
        assert_eq!(config.axis_count(), 2);
        assert_eq!(config.pos_names.len(), 3);
        assert_eq!(config.position("pos3"), Some(&[2.0, 4.0][..]));
        assert_eq!(config.velocity("vel1"), Some(&[0.5, 0.5][..]));
    }

    #[test]
    fn test_parse_rejects_missing_goal() {
        let toml = r#"
pos_names = ["pos1", "pos2"]
vel_names = []

[positions]
pos1 = [0.0, 0.0]
"#;
        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::GoalNotFound(_)))
        ));
    }

    #[test]
    fn test_parse_syntax_error() {
        assert!(matches!(
            parse_config("joints = [\"joint1\""),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/waypoint-player.toml"),
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        assert_eq!(truncate("abc", 8), "abc");
        assert_eq!(truncate("aé", 2), "a");
    }

    #[test]
    fn test_long_message_is_truncated_not_dropped() {
        let long = "x".repeat(200);
        let msg = message(&long);
        assert_eq!(msg.len(), 128);
        assert_eq!(msg.as_str(), &long[..128]);
    }
}
