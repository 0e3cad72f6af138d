//! Fixed-tick joint drive control.
//!
//! This crate moves a driven joint's target a little every physics tick,
//! the way a jog pendant or teleop panel moves a robot arm one axis at a time.
//!
//! # Pieces
//!
//! - [`JointDrive`]: capability interface over an engine-owned joint drive
//! - [`ArticulationDrive`]: in-memory drive record implementing it
//! - [`TargetUpdater`]: pure next-target computation with limit clamping
//! - [`JointController`]: per-joint controller that runs the update each tick
//!   and writes the result into the drive
//!
//! # Update Rule
//!
//! ```text
//! delta     = direction * dt * speed
//! candidate = target + delta
//! target    = clamp(candidate, lower, upper)   if the axis is limited
//!           = candidate                        otherwise
//! ```
//!
//! Revolute joints are always driven. Prismatic joints are driven only when
//! [`ControlConfig::drive_prismatic`](sim_types::ControlConfig) is set; every
//! other joint kind keeps its target.
//!
//! # Example
//!
//! ```
//! use sim_drive::{ArticulationDrive, JointController, JointDrive, TargetUpdate};
//! use sim_types::{ControlConfig, Direction, DriveCommand, JointId};
//!
//! let config = ControlConfig::default();
//! let drive = ArticulationDrive::revolute(-1.0, 1.0);
//! let mut elbow = JointController::new(JointId::new(3), drive, &config)?;
//!
//! // The authority sends a fresh command every tick.
//! let command = DriveCommand::new(Direction::Negative, 50.0).with_torque(40.0);
//! assert_eq!(elbow.fixed_update(&command), TargetUpdate::Moved);
//! assert_eq!(elbow.drive().target(), -1.0);
//! assert_eq!(elbow.fixed_update(&command), TargetUpdate::ClampedLower);
//! # Ok::<(), sim_types::SimError>(())
//! ```
//!
//! # Logging
//!
//! Updates are reported through `tracing`: every target change at `trace`,
//! limit hits at `debug`, and the first non-finite target per controller at
//! `warn`. Installing a subscriber is left to the application.

#![doc(html_root_url = "https://docs.rs/sim-drive/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs)]
#![allow(clippy::missing_const_for_fn)]

mod controller;
mod drive;
mod updater;

pub use controller::JointController;
pub use drive::{ArticulationDrive, DriveOutput, JointDrive};
pub use updater::{compute_target, TargetUpdate, TargetUpdater};

// Re-export types needed to build commands and snapshots
pub use sim_types::{
    ControlConfig, Direction, DofLock, DriveCommand, DriveLimits, JointId, JointState, JointType,
    SimError,
};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_and_updater_agree() {
        let drive = ArticulationDrive::revolute(-0.5, 0.5).with_target(0.45);
        let mut ctrl = JointController::new(JointId::new(0), drive, &ControlConfig::default())
            .unwrap();
        ctrl.set_direction(Direction::Positive);

        let expected = compute_target(&ctrl.snapshot(), ctrl.timestep());
        ctrl.step();
        assert_eq!(ctrl.drive().target(), expected);
    }

    #[test]
    fn test_clamped_outcome_on_limit() {
        let drive = ArticulationDrive::revolute(-0.5, 0.5).with_target(0.5);
        let mut ctrl = JointController::new(JointId::new(0), drive, &ControlConfig::default())
            .unwrap();
        ctrl.set_direction(Direction::Positive);
        assert!(ctrl.step().is_clamped());
    }
}
