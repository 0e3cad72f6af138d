//! Error types for joint drive control.
//!
//! Target computation itself never fails. These errors come from setting up
//! control: validating configuration and attaching controllers to joints.

use thiserror::Error;

use crate::joint::{JointId, JointType};

/// Errors that can occur while configuring joint drive control.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Invalid timestep.
    #[error("invalid timestep: {0} (must be positive and finite)")]
    InvalidTimestep(f64),

    /// Invalid configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },

    /// Joint has no axis a controller could drive.
    #[error("{joint} is a {kind} joint and has no drivable axis")]
    UnsupportedJoint {
        /// The joint that was rejected.
        joint: JointId,
        /// Its kind.
        kind: JointType,
    },
}

impl SimError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an unsupported joint error.
    #[must_use]
    pub fn unsupported_joint(joint: JointId, kind: JointType) -> Self {
        Self::UnsupportedJoint { joint, kind }
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. } | Self::InvalidTimestep(_))
    }
}
