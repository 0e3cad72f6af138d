//! Joint Sweep Demo
//!
//! Jogs a limited elbow and a continuous wrist for a few seconds of fixed
//! ticks, reversing the elbow whenever it hits a limit, and prints the drive
//! targets as a table.

use anyhow::Context;
use sim_drive::{
    ArticulationDrive, ControlConfig, Direction, DriveCommand, JointController, JointDrive,
    JointId,
};

const TICKS: usize = 150;
const PRINT_EVERY: usize = 10;

fn main() -> anyhow::Result<()> {
    println!("=== CortenForge Demo: Joint Sweep ===");
    println!();

    let config = ControlConfig::default().speed(1.2).torque(40.0);
    let elbow_drive = ArticulationDrive::revolute(-0.8, 0.8);
    let wrist_drive = ArticulationDrive::continuous();

    let mut elbow = JointController::new(JointId::new(3), elbow_drive, &config)
        .context("attaching elbow controller")?;
    let mut wrist = JointController::new(JointId::new(5), wrist_drive, &config)
        .context("attaching wrist controller")?;

    let mut elbow_command = config
        .initial_command()
        .with_direction(Direction::Positive);
    let wrist_command = DriveCommand::new(Direction::Negative, 0.5)
        .with_torque(config.torque)
        .with_acceleration(config.acceleration);

    println!("Timestep: {:.3} s ({:.0} Hz)", config.timestep, config.frequency());
    println!();
    println!("{:>6} {:>8} {:>10} {:>10}", "tick", "time", "elbow", "wrist");

    for tick in 0..TICKS {
        if elbow.fixed_update(&elbow_command).is_clamped() {
            elbow_command.direction = elbow_command.direction.reversed();
        }
        wrist.fixed_update(&wrist_command);

        if tick % PRINT_EVERY == 0 {
            let time = tick as f64 * config.timestep;
            println!(
                "{:>6} {:>8.2} {:>10.4} {:>10.4}",
                tick,
                time,
                elbow.drive().target(),
                wrist.drive().target()
            );
        }
    }

    println!();
    println!(
        "Final: elbow {:.4} rad (limits ±0.8), wrist {:.4} rad (unbounded)",
        elbow.drive().target(),
        wrist.drive().target()
    );

    Ok(())
}
