//! Joint types for driven articulations.
//!
//! A driven joint exposes exactly one axis to the controller: a rotation for
//! revolute joints, a translation for prismatic ones. This module describes
//! that axis: what kind of joint it belongs to, how its motion is locked, and
//! the bounds of its drive target.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::command::DriveCommand;

/// Unique identifier for a joint in the articulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointId(pub u64);

impl JointId {
    /// Create a new joint ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for JointId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for JointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Joint({})", self.0)
    }
}

/// Kind of joint the drive belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JointType {
    /// Fixed joint - no relative motion, nothing to drive.
    Fixed,
    /// Revolute joint - rotation around a single axis.
    #[default]
    Revolute,
    /// Prismatic joint - translation along a single axis.
    Prismatic,
    /// Spherical joint - rotation around all axes (ball joint).
    Spherical,
}

impl JointType {
    /// Get the number of degrees of freedom for this joint type.
    #[must_use]
    pub const fn dof(self) -> usize {
        match self {
            Self::Fixed => 0,
            Self::Revolute | Self::Prismatic => 1,
            Self::Spherical => 3,
        }
    }
}

impl std::fmt::Display for JointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Revolute => write!(f, "revolute"),
            Self::Prismatic => write!(f, "prismatic"),
            Self::Spherical => write!(f, "spherical"),
        }
    }
}

/// Lock mode of a driven axis.
///
/// Only [`DofLock::Limited`] bounds the drive target. A [`DofLock::Locked`]
/// axis is held by the physics engine itself; the target updater treats it
/// like a free axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DofLock {
    /// Axis cannot move.
    Locked,
    /// Axis moves within `[lower, upper]`.
    Limited,
    /// Axis moves without bounds (continuous joints).
    #[default]
    Free,
}

impl DofLock {
    /// Check if targets on this axis are bounded.
    #[must_use]
    pub const fn is_limited(self) -> bool {
        matches!(self, Self::Limited)
    }
}

/// Bounds of a drive target.
///
/// Angles in radians for revolute joints, distances in meters for prismatic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriveLimits {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl Default for DriveLimits {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl DriveLimits {
    /// Create drive limits, stored exactly as given.
    ///
    /// Reversed or `NaN` bounds are kept; [`clamp_candidate`](Self::clamp_candidate)
    /// then checks the upper bound first, then the lower one.
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Create drive limits with reversed bounds swapped.
    #[must_use]
    pub fn ordered(a: f64, b: f64) -> Self {
        if b < a {
            Self::new(b, a)
        } else {
            Self::new(a, b)
        }
    }

    /// Create symmetric limits around zero.
    #[must_use]
    pub fn symmetric(bound: f64) -> Self {
        Self::new(-bound.abs(), bound.abs())
    }

    /// Create unbounded limits.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    /// Check if a target is within the limits (inclusive).
    #[must_use]
    pub fn contains(&self, target: f64) -> bool {
        target >= self.lower && target <= self.upper
    }

    /// Get the range of motion.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.upper - self.lower
    }

    /// Clamp a candidate target to the limits.
    ///
    /// Unlike [`f64::clamp`] this never panics and lets `NaN` through
    /// unchanged, so malformed inputs degrade instead of aborting the tick.
    #[must_use]
    pub fn clamp_candidate(&self, candidate: f64) -> f64 {
        if candidate > self.upper {
            self.upper
        } else if candidate < self.lower {
            self.lower
        } else {
            candidate
        }
    }
}

/// Snapshot of one driven joint for a single tick.
///
/// Combines the command from the controlling authority with what the joint
/// itself reports. Torque and acceleration ride along in [`DriveCommand`] and
/// are not consumed by target computation.
///
/// # Example
///
/// ```
/// use sim_types::{Direction, DofLock, DriveCommand, DriveLimits, JointState, JointType};
///
/// let state = JointState::new(
///     DriveCommand::new(Direction::Positive, 1.0),
///     0.5,
///     DriveLimits::new(-1.0, 1.0),
///     DofLock::Limited,
///     JointType::Revolute,
/// );
/// assert!(state.is_limited());
/// assert_eq!(state.delta(0.5), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointState {
    /// Command for this tick.
    pub command: DriveCommand,
    /// Drive target before the update.
    pub target: f64,
    /// Target bounds.
    pub limits: DriveLimits,
    /// Lock mode of the driven axis.
    pub lock: DofLock,
    /// Kind of joint.
    pub joint_type: JointType,
}

impl JointState {
    /// Create a joint state snapshot.
    #[must_use]
    pub fn new(
        command: DriveCommand,
        target: f64,
        limits: DriveLimits,
        lock: DofLock,
        joint_type: JointType,
    ) -> Self {
        Self {
            command,
            target,
            limits,
            lock,
            joint_type,
        }
    }

    /// Check if the driven axis is limit-locked.
    #[must_use]
    pub fn is_limited(&self) -> bool {
        self.lock.is_limited()
    }

    /// Target change requested for a tick of length `dt`.
    #[must_use]
    pub fn delta(&self, dt: f64) -> f64 {
        self.command.direction.sign() * dt * self.command.speed
    }
}
