//! Drive capability interface.
//!
//! The engine that owns a joint exposes its drive through [`JointDrive`]: a
//! reading of the joint kind, lock mode, limits and current target, and a
//! sink that accepts the next [`DriveOutput`]. Target computation never
//! touches engine types directly.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sim_types::{DofLock, DriveLimits, JointType};

/// What the controller hands to the drive each tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriveOutput {
    /// New drive target.
    pub target: f64,
    /// Torque (or force) forwarded from the command.
    pub torque: f64,
    /// Acceleration forwarded from the command.
    pub acceleration: f64,
}

/// Minimal view of an engine-owned joint drive.
pub trait JointDrive {
    /// Kind of joint this drive belongs to.
    fn joint_type(&self) -> JointType;

    /// Lock mode of the driven axis.
    fn lock(&self) -> DofLock;

    /// Current drive target.
    fn target(&self) -> f64;

    /// Target bounds (only enforced when the axis is limited).
    fn limits(&self) -> DriveLimits;

    /// Write the next tick's output into the drive.
    fn apply(&mut self, output: DriveOutput);
}

impl<D: JointDrive + ?Sized> JointDrive for &mut D {
    fn joint_type(&self) -> JointType {
        (**self).joint_type()
    }

    fn lock(&self) -> DofLock {
        (**self).lock()
    }

    fn target(&self) -> f64 {
        (**self).target()
    }

    fn limits(&self) -> DriveLimits {
        (**self).limits()
    }

    fn apply(&mut self, output: DriveOutput) {
        (**self).apply(output);
    }
}

/// In-memory joint drive record.
///
/// Holds the same fields an articulation engine keeps per driven axis. Use it
/// headless, in tests, or as the buffer a host copies into its own drive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArticulationDrive {
    joint_type: JointType,
    lock: DofLock,
    limits: DriveLimits,
    target: f64,
    force_limit: f64,
    acceleration: f64,
}

impl ArticulationDrive {
    /// Create a drive for the given joint kind, free and targeting zero.
    #[must_use]
    pub fn new(joint_type: JointType) -> Self {
        Self {
            joint_type,
            lock: DofLock::Free,
            limits: DriveLimits::unlimited(),
            target: 0.0,
            force_limit: 0.0,
            acceleration: 0.0,
        }
    }

    /// Create a revolute drive limited to `[lower, upper]`.
    #[must_use]
    pub fn revolute(lower: f64, upper: f64) -> Self {
        Self::new(JointType::Revolute).with_limits(DriveLimits::new(lower, upper))
    }

    /// Create an unbounded revolute drive (continuous joint).
    #[must_use]
    pub fn continuous() -> Self {
        Self::new(JointType::Revolute)
    }

    /// Create a prismatic drive limited to `[lower, upper]`.
    #[must_use]
    pub fn prismatic(lower: f64, upper: f64) -> Self {
        Self::new(JointType::Prismatic).with_limits(DriveLimits::new(lower, upper))
    }

    /// Set limits and lock the axis to them.
    #[must_use]
    pub fn with_limits(mut self, limits: DriveLimits) -> Self {
        self.limits = limits;
        self.lock = DofLock::Limited;
        self
    }

    /// Set the lock mode.
    #[must_use]
    pub fn with_lock(mut self, lock: DofLock) -> Self {
        self.lock = lock;
        self
    }

    /// Set the starting target.
    #[must_use]
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    /// Overwrite the target without going through a controller.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Last torque limit written by a controller.
    #[must_use]
    pub fn force_limit(&self) -> f64 {
        self.force_limit
    }

    /// Last acceleration written by a controller.
    #[must_use]
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }
}

impl Default for ArticulationDrive {
    fn default() -> Self {
        Self::continuous()
    }
}

impl JointDrive for ArticulationDrive {
    fn joint_type(&self) -> JointType {
        self.joint_type
    }

    fn lock(&self) -> DofLock {
        self.lock
    }

    fn target(&self) -> f64 {
        self.target
    }

    fn limits(&self) -> DriveLimits {
        self.limits
    }

    fn apply(&mut self, output: DriveOutput) {
        self.target = output.target;
        self.force_limit = output.torque;
        self.acceleration = output.acceleration;
    }
}
