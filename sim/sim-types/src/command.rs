//! Drive commands sent to a joint each tick.
//!
//! A command is an immutable snapshot taken from the controlling authority:
//! which way to jog the joint, how fast, and the torque and acceleration the
//! physics drive should use while doing it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Jog direction of a driven axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Decrease the target.
    Negative,
    /// Hold the target.
    #[default]
    None,
    /// Increase the target.
    Positive,
}

impl Direction {
    /// Get the direction as a multiplier: -1, 0 or +1.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Negative => -1.0,
            Self::None => 0.0,
            Self::Positive => 1.0,
        }
    }

    /// Get the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::None => Self::None,
            Self::Positive => Self::Negative,
        }
    }
}

impl From<i8> for Direction {
    fn from(sign: i8) -> Self {
        match sign {
            i8::MIN..=-1 => Self::Negative,
            0 => Self::None,
            1..=i8::MAX => Self::Positive,
        }
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Negative => -1,
            Direction::None => 0,
            Direction::Positive => 1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative => write!(f, "negative"),
            Self::None => write!(f, "none"),
            Self::Positive => write!(f, "positive"),
        }
    }
}

/// Per-tick command from the controlling authority.
///
/// `speed` is in target units per second (rad/s or m/s). `torque` and
/// `acceleration` are forwarded to the physics drive untouched.
///
/// Values are not validated: a negative speed simply jogs the other way.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriveCommand {
    /// Jog direction.
    pub direction: Direction,
    /// Jog speed.
    pub speed: f64,
    /// Torque (or force) the drive may apply.
    pub torque: f64,
    /// Acceleration the drive may use.
    pub acceleration: f64,
}

impl DriveCommand {
    /// Create a command with zero torque and acceleration.
    #[must_use]
    pub fn new(direction: Direction, speed: f64) -> Self {
        Self {
            direction,
            speed,
            torque: 0.0,
            acceleration: 0.0,
        }
    }

    /// Create a command that holds the target.
    #[must_use]
    pub fn stopped() -> Self {
        Self::default()
    }

    /// Set the direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the speed.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the torque.
    #[must_use]
    pub fn with_torque(mut self, torque: f64) -> Self {
        self.torque = torque;
        self
    }

    /// Set the acceleration.
    #[must_use]
    pub fn with_acceleration(mut self, acceleration: f64) -> Self {
        self.acceleration = acceleration;
        self
    }
}
