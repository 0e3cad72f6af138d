//! Per-joint jog controller.
//!
//! A [`JointController`] owns one joint drive. Each fixed tick it takes the
//! latest command from the controlling authority, computes the next target
//! and writes it, together with the forwarded torque and acceleration, into
//! the drive.

use sim_types::{ControlConfig, Direction, DriveCommand, JointId, JointState, Result, SimError};
use tracing::{debug, trace, warn};

use crate::drive::{DriveOutput, JointDrive};
use crate::updater::{TargetUpdate, TargetUpdater};

/// Jog controller for a single driven joint.
///
/// # Example
///
/// ```
/// use sim_drive::{ArticulationDrive, JointController, JointDrive};
/// use sim_types::{ControlConfig, Direction, JointId};
///
/// let drive = ArticulationDrive::revolute(-1.0, 1.0);
/// let mut controller = JointController::new(JointId::new(0), drive, &ControlConfig::default())?;
///
/// controller.set_direction(Direction::Positive);
/// for _ in 0..100 {
///     controller.step();
/// }
/// assert_eq!(controller.drive().target(), 1.0);
/// # Ok::<(), sim_types::SimError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JointController<D> {
    id: JointId,
    drive: D,
    updater: TargetUpdater,
    command: DriveCommand,
    timestep: f64,
    warned_non_finite: bool,
}

impl<D: JointDrive> JointController<D> {
    /// Attach a controller to a drive.
    ///
    /// The controller starts stopped, with the configuration's initial
    /// speed, torque and acceleration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the joint has no
    /// degrees of freedom.
    pub fn new(id: JointId, drive: D, config: &ControlConfig) -> Result<Self> {
        config.validate()?;

        let joint_type = drive.joint_type();
        if joint_type.dof() == 0 {
            return Err(SimError::unsupported_joint(id, joint_type));
        }

        let updater = TargetUpdater::from_config(config);
        if !updater.drives(joint_type) {
            debug!(joint = %id, %joint_type, "joint kind is not driven; targets will pass through");
        }

        Ok(Self {
            id,
            drive,
            updater,
            command: config.initial_command(),
            timestep: config.timestep,
            warned_non_finite: false,
        })
    }

    /// Get the joint this controller drives.
    #[must_use]
    pub fn id(&self) -> JointId {
        self.id
    }

    /// Get the fixed timestep (seconds).
    #[must_use]
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Get the current jog direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.command.direction
    }

    /// Set the jog direction used by [`step`](Self::step).
    pub fn set_direction(&mut self, direction: Direction) {
        self.command.direction = direction;
    }

    /// Stop jogging. The target holds where it is.
    pub fn stop(&mut self) {
        self.command.direction = Direction::None;
    }

    /// Get the command applied on the last tick.
    #[must_use]
    pub fn command(&self) -> &DriveCommand {
        &self.command
    }

    /// Get the drive.
    #[must_use]
    pub fn drive(&self) -> &D {
        &self.drive
    }

    /// Get the drive mutably.
    pub fn drive_mut(&mut self) -> &mut D {
        &mut self.drive
    }

    /// Detach the controller, returning the drive.
    #[must_use]
    pub fn into_drive(self) -> D {
        self.drive
    }

    /// Snapshot the joint as the updater sees it this tick.
    #[must_use]
    pub fn snapshot(&self) -> JointState {
        JointState::new(
            self.command,
            self.drive.target(),
            self.drive.limits(),
            self.drive.lock(),
            self.drive.joint_type(),
        )
    }

    /// Run one tick with a fresh command from the controlling authority.
    pub fn fixed_update(&mut self, command: &DriveCommand) -> TargetUpdate {
        self.command = *command;
        self.step()
    }

    /// Run one tick with the current direction and settings.
    pub fn step(&mut self) -> TargetUpdate {
        let state = self.snapshot();
        let (target, outcome) = self.updater.classify(&state, self.timestep);

        match outcome {
            TargetUpdate::PassThrough => {}
            TargetUpdate::Moved => {
                trace!(joint = %self.id, from = state.target, to = target, "drive target updated");
            }
            TargetUpdate::ClampedUpper | TargetUpdate::ClampedLower => {
                debug!(
                    joint = %self.id,
                    target,
                    direction = %state.command.direction,
                    "drive target held at limit"
                );
            }
        }

        if !target.is_finite() && !self.warned_non_finite {
            warn!(joint = %self.id, target, "drive target is not finite");
            self.warned_non_finite = true;
        }

        self.drive.apply(DriveOutput {
            target,
            torque: self.command.torque,
            acceleration: self.command.acceleration,
        });

        outcome
    }
}
