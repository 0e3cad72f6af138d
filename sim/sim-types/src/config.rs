//! Configuration for joint drive control.
//!
//! This module controls how often the drive targets are updated and what
//! settings controllers start with before the controlling authority sends its
//! first command.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::command::{Direction, DriveCommand};

/// Main configuration for joint drive control.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControlConfig {
    /// Fixed timestep between target updates (seconds).
    pub timestep: f64,
    /// Initial jog speed (rad/s or m/s).
    pub speed: f64,
    /// Initial drive torque (Nm or N).
    pub torque: f64,
    /// Initial drive acceleration.
    pub acceleration: f64,
    /// Whether prismatic joints are driven like revolute ones.
    ///
    /// Off by default: prismatic targets pass through unchanged.
    pub drive_prismatic: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            timestep: 0.02, // 50 Hz fixed step
            speed: 1.0,
            torque: 10.0,
            acceleration: 10.0,
            drive_prismatic: false,
        }
    }
}

impl ControlConfig {
    /// Create a new control config with the given timestep.
    #[must_use]
    pub fn with_timestep(timestep: f64) -> Self {
        Self {
            timestep,
            ..Default::default()
        }
    }

    /// Create a configuration for display-rate control (60 Hz).
    #[must_use]
    pub fn realtime() -> Self {
        Self::with_timestep(1.0 / 60.0)
    }

    /// Create a configuration for hardware-rate control (1000 Hz).
    #[must_use]
    pub fn high_rate() -> Self {
        Self::with_timestep(1.0 / 1000.0)
    }

    /// Set the initial jog speed.
    #[must_use]
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the initial drive torque.
    #[must_use]
    pub fn torque(mut self, torque: f64) -> Self {
        self.torque = torque;
        self
    }

    /// Set the initial drive acceleration.
    #[must_use]
    pub fn acceleration(mut self, acceleration: f64) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Drive prismatic joints as well as revolute ones.
    #[must_use]
    pub fn with_prismatic(mut self) -> Self {
        self.drive_prismatic = true;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(crate::SimError::InvalidTimestep(self.timestep));
        }

        if self.timestep > 1.0 {
            return Err(crate::SimError::invalid_config(
                "timestep > 1 second is likely an error",
            ));
        }

        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(crate::SimError::invalid_config(format!(
                "initial speed must be finite and non-negative, got {}",
                self.speed
            )));
        }

        if !self.torque.is_finite() || !self.acceleration.is_finite() {
            return Err(crate::SimError::invalid_config(
                "initial torque and acceleration must be finite",
            ));
        }

        Ok(())
    }

    /// Get the update frequency in Hz.
    #[must_use]
    pub fn frequency(&self) -> f64 {
        1.0 / self.timestep
    }

    /// Command a controller starts with: stopped, with the initial settings.
    #[must_use]
    pub fn initial_command(&self) -> DriveCommand {
        DriveCommand::new(Direction::None, self.speed)
            .with_torque(self.torque)
            .with_acceleration(self.acceleration)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::SimError;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = ControlConfig::default();
        assert!(config.validate().is_ok());
        assert_relative_eq!(config.frequency(), 50.0, epsilon = 1e-10);
        assert!(!config.drive_prismatic);
    }

    #[test]
    fn test_presets() {
        assert_relative_eq!(ControlConfig::realtime().frequency(), 60.0, epsilon = 1e-9);
        assert_relative_eq!(ControlConfig::high_rate().frequency(), 1000.0, epsilon = 1e-9);
        assert!(ControlConfig::high_rate().validate().is_ok());
    }

    #[test]
    fn test_invalid_timestep() {
        let config = ControlConfig::with_timestep(0.0);
        assert_eq!(config.validate(), Err(SimError::InvalidTimestep(0.0)));

        let config = ControlConfig::with_timestep(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidTimestep(_))
        ));

        let config = ControlConfig::with_timestep(2.0);
        assert!(config.validate().unwrap_err().is_config_error());
    }

    #[test]
    fn test_invalid_speed() {
        let config = ControlConfig::default().speed(-1.0);
        let err = config.validate().unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("-1"));

        let config = ControlConfig::default().torque(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = ControlConfig::with_timestep(0.01).speed(0.5).with_prismatic();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ControlConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        // Missing fields fall back to defaults.
        let parsed: ControlConfig = serde_json::from_str(r#"{"speed": 2.0}"#).unwrap();
        assert_eq!(parsed, ControlConfig::default().speed(2.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_joint_state_serialization() {
        use crate::{DofLock, DriveLimits, JointState, JointType};

        let state = JointState::new(
            DriveCommand::new(Direction::Negative, 1.5).with_torque(12.0),
            0.25,
            DriveLimits::new(-1.0, 1.0),
            DofLock::Limited,
            JointType::Prismatic,
        );
        let json = serde_json::to_string(&state).unwrap();
        let parsed: JointState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_initial_command() {
        let config = ControlConfig::default()
            .speed(2.0)
            .torque(30.0)
            .acceleration(4.0)
            .with_prismatic();
        let command = config.initial_command();

        assert_eq!(command.direction, Direction::None);
        assert_eq!(command.speed, 2.0);
        assert_eq!(command.torque, 30.0);
        assert_eq!(command.acceleration, 4.0);
        assert!(config.drive_prismatic);
    }
}
