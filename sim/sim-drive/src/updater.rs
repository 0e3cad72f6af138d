//! Joint target updates.
//!
//! Each fixed tick a driven joint's target moves by
//!
//! ```text
//! delta  = direction * dt * speed
//! target = clamp(target + delta, lower, upper)   (limited axis)
//! target = target + delta                        (free axis)
//! ```
//!
//! Joints without a drivable axis keep their target. Inputs are not
//! validated: a `NaN` limit or a negative speed flows straight into the
//! result.

use sim_types::{ControlConfig, JointState, JointType};

/// How a tick changed the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetUpdate {
    /// Joint kind is not driven; target unchanged.
    PassThrough,
    /// Target moved by the full delta (possibly zero).
    Moved,
    /// Candidate overshot the upper limit and was held there.
    ClampedUpper,
    /// Candidate undershot the lower limit and was held there.
    ClampedLower,
}

impl TargetUpdate {
    /// Check if a limit stopped the motion.
    #[must_use]
    pub fn is_clamped(self) -> bool {
        matches!(self, Self::ClampedUpper | Self::ClampedLower)
    }
}

/// Computes the next drive target of one joint.
///
/// # Example
///
/// ```
/// use sim_drive::TargetUpdater;
/// use sim_types::{Direction, DofLock, DriveCommand, DriveLimits, JointState, JointType};
///
/// let state = JointState::new(
///     DriveCommand::new(Direction::Positive, 1.0),
///     1.5,
///     DriveLimits::new(-1.5, 1.5),
///     DofLock::Limited,
///     JointType::Revolute,
/// );
///
/// // Already at the upper limit: no overshoot.
/// assert_eq!(TargetUpdater::default().update(&state, 0.02), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TargetUpdater {
    drive_prismatic: bool,
}

impl TargetUpdater {
    /// Create an updater that drives revolute joints only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an updater following the configuration's joint policy.
    #[must_use]
    pub fn from_config(config: &ControlConfig) -> Self {
        Self {
            drive_prismatic: config.drive_prismatic,
        }
    }

    /// Also drive prismatic joints.
    #[must_use]
    pub fn with_prismatic(mut self, enabled: bool) -> Self {
        self.drive_prismatic = enabled;
        self
    }

    /// Check if prismatic joints are driven.
    #[must_use]
    pub fn drives_prismatic(&self) -> bool {
        self.drive_prismatic
    }

    /// Check if joints of this kind get their target updated.
    #[must_use]
    pub fn drives(&self, joint_type: JointType) -> bool {
        match joint_type {
            JointType::Revolute => true,
            JointType::Prismatic => self.drive_prismatic,
            JointType::Fixed | JointType::Spherical => false,
        }
    }

    /// Compute the next target.
    #[must_use]
    pub fn update(&self, state: &JointState, dt: f64) -> f64 {
        self.classify(state, dt).0
    }

    /// Compute the next target and report how it was reached.
    #[must_use]
    pub fn classify(&self, state: &JointState, dt: f64) -> (f64, TargetUpdate) {
        if !self.drives(state.joint_type) {
            return (state.target, TargetUpdate::PassThrough);
        }

        let candidate = state.target + state.delta(dt);
        if !state.is_limited() {
            return (candidate, TargetUpdate::Moved);
        }

        let target = state.limits.clamp_candidate(candidate);
        let outcome = if target.to_bits() == candidate.to_bits() {
            TargetUpdate::Moved
        } else if candidate > state.limits.upper {
            TargetUpdate::ClampedUpper
        } else {
            TargetUpdate::ClampedLower
        };
        (target, outcome)
    }
}

/// Compute the next target with the default policy (revolute joints only).
#[must_use]
pub fn compute_target(state: &JointState, dt: f64) -> f64 {
    TargetUpdater::default().update(state, dt)
}
