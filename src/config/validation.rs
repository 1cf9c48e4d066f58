//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::controller::{lookup, GoalTable};
use super::ControllerConfig;

/// Validate a controller configuration.
///
/// Checks:
/// - At least one joint is configured
/// - Publishing rate, wait and segment durations are in range
/// - Every position goal exists, is non-empty and has one value per joint
/// - Every velocity goal exists and is non-empty
pub fn validate_config(config: &ControllerConfig) -> Result<()> {
    if config.joints.is_empty() {
        return Err(Error::Config(ConfigError::NoJoints));
    }

    validate_timing(config)?;

    if config.pos_names.is_empty() {
        return Err(Error::Config(ConfigError::EmptyProfile));
    }

    let expected = config.axis_count();
    for (index, name) in config.pos_names.iter().enumerate() {
        let values = require_goal(&config.positions, name.as_str())?;
        if values.len() != expected {
            return Err(Error::Config(ConfigError::AxisCountMismatch {
                index,
                expected,
                found: values.len(),
            }));
        }
    }

    // Velocities are only checked for presence; playback does not read them.
    for name in config.vel_names.iter() {
        require_goal(&config.velocities, name.as_str())?;
    }

    Ok(())
}

fn validate_timing(config: &ControllerConfig) -> Result<()> {
    let rate = config.publishing_rate.0;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidPublishRate(rate)));
    }

    let wait = config.wait_between_profiles.0;
    if !wait.is_finite() || wait < 0.0 {
        return Err(Error::Config(ConfigError::InvalidWaitDuration(wait)));
    }

    let segment = config.segment_duration.0;
    if !segment.is_finite() || segment <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidSegmentDuration(segment)));
    }

    Ok(())
}

pub(crate) fn require_goal<'a>(table: &'a GoalTable, name: &str) -> Result<&'a [f32]> {
    let values = lookup(table, name).ok_or_else(|| {
        Error::Config(ConfigError::GoalNotFound(
            heapless::String::try_from(name).unwrap_or_default(),
        ))
    })?;

    if values.is_empty() {
        return Err(Error::Config(ConfigError::EmptyGoal(
            heapless::String::try_from(name).unwrap_or_default(),
        )));
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::controller::GoalValues;
    use crate::config::units::{Hertz, Seconds};

    fn goal(values: &[f32]) -> GoalValues {
        values.iter().copied().collect()
    }

    fn valid_config() -> ControllerConfig {
        let mut config = ControllerConfig::default();
        for (name, values) in [("pos1", [0.0, 0.0]), ("pos2", [1.0, 2.0])] {
            config
                .positions
                .insert(heapless::String::try_from(name).unwrap(), goal(&values))
                .unwrap();
        }
        for name in ["vel1", "vel2"] {
            config
                .velocities
                .insert(heapless::String::try_from(name).unwrap(), goal(&[0.5, 0.5]))
                .unwrap();
        }
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_no_joints() {
        let mut config = valid_config();
        config.joints.clear();
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::NoJoints))
        ));
    }

    #[test]
    fn test_invalid_timing() {
        let mut config = valid_config();
        config.publishing_rate = Hertz(0.0);
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidPublishRate(_)))
        ));

        let mut config = valid_config();
        config.wait_between_profiles = Seconds(-0.5);
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidWaitDuration(_)))
        ));

        let mut config = valid_config();
        config.segment_duration = Seconds(0.0);
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidSegmentDuration(_)))
        ));
    }

    #[test]
    fn test_missing_and_empty_goals() {
        let mut config = valid_config();
        config
            .positions
            .remove(&heapless::String::<32>::try_from("pos2").unwrap());
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::GoalNotFound(name))) if name.as_str() == "pos2"
        ));

        let mut config = valid_config();
        config
            .velocities
            .insert(heapless::String::try_from("vel1").unwrap(), GoalValues::new())
            .unwrap();
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::EmptyGoal(name))) if name.as_str() == "vel1"
        ));
    }

    #[test]
    fn test_position_length_must_match_joints() {
        let mut config = valid_config();
        config
            .positions
            .insert(heapless::String::try_from("pos2").unwrap(), goal(&[1.0]))
            .unwrap();
        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::AxisCountMismatch {
                index: 1,
                expected: 2,
                found: 1,
            }))
        );
    }
}
