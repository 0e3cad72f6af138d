//! Core types for joint drive control.
//!
//! This crate provides the data a joint drive controller works with:
//!
//! - [`JointType`] / [`DofLock`] - What kind of joint, and how its axis is locked
//! - [`DriveLimits`] - Bounds of the drive target
//! - [`DriveCommand`] - Per-tick jog command (direction, speed, torque, acceleration)
//! - [`JointState`] - Snapshot of one joint for a single tick
//! - [`ControlConfig`] - Timestep and initial drive settings
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They have no physics and no integration.
//! They're the common language between the controlling authority (a teleop
//! panel, a policy, a script) and whatever engine owns the joint.
//!
//! # Example
//!
//! ```
//! use sim_types::{Direction, DriveCommand, DriveLimits};
//!
//! let command = DriveCommand::new(Direction::Positive, 0.5).with_torque(20.0);
//! let limits = DriveLimits::symmetric(1.0);
//!
//! assert_eq!(command.direction.sign(), 1.0);
//! assert_eq!(limits.clamp_candidate(3.0), 1.0);
//! ```

#![doc(html_root_url = "https://docs.rs/sim-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc,
)]

mod command;
mod config;
mod error;
mod joint;

pub use command::{Direction, DriveCommand};
pub use config::ControlConfig;
pub use error::SimError;
pub use joint::{DofLock, DriveLimits, JointId, JointState, JointType};

/// Result type for drive control operations.
pub type Result<T> = std::result::Result<T, SimError>;
