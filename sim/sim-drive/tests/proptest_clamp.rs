//! Property-based tests for jog target updates.
//!
//! Run with: cargo test -p sim-drive -- proptest

use proptest::prelude::*;
use sim_drive::{
    Direction, DofLock, DriveCommand, DriveLimits, JointState, JointType, TargetUpdater,
};

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Negative),
        Just(Direction::None),
        Just(Direction::Positive),
    ]
}

fn arb_limits() -> impl Strategy<Value = DriveLimits> {
    (-10.0..10.0f64, 0.0..20.0f64)
        .prop_map(|(lower, range)| DriveLimits::new(lower, lower + range))
}

fn arb_lock() -> impl Strategy<Value = DofLock> {
    prop_oneof![
        Just(DofLock::Locked),
        Just(DofLock::Limited),
        Just(DofLock::Free),
    ]
}

fn state(
    direction: Direction,
    speed: f64,
    target: f64,
    limits: DriveLimits,
    lock: DofLock,
    joint_type: JointType,
) -> JointState {
    JointState::new(
        DriveCommand::new(direction, speed),
        target,
        limits,
        lock,
        joint_type,
    )
}

proptest! {
    #[test]
    fn proptest_limited_target_stays_in_range(
        direction in arb_direction(),
        speed in 0.0..1.0e4f64,
        dt in 0.0..1.0f64,
        limits in arb_limits(),
        offset in 0.0..1.0f64,
    ) {
        let target = limits.clamp_candidate(limits.lower + offset * limits.range());
        let s = state(direction, speed, target, limits, DofLock::Limited, JointType::Revolute);
        let next = TargetUpdater::new().update(&s, dt);
        prop_assert!(limits.contains(next), "{next} outside [{}, {}]", limits.lower, limits.upper);
    }

    #[test]
    fn proptest_limited_target_recovers_from_outside(
        direction in arb_direction(),
        speed in 0.0..1.0e4f64,
        dt in 0.0..1.0f64,
        limits in arb_limits(),
        target in -1.0e3..1.0e3f64,
    ) {
        let s = state(direction, speed, target, limits, DofLock::Limited, JointType::Revolute);
        let next = TargetUpdater::new().update(&s, dt);
        prop_assert!(limits.contains(next), "{next} outside [{}, {}]", limits.lower, limits.upper);
    }

    #[test]
    fn proptest_free_target_is_exact_sum(
        direction in arb_direction(),
        speed in 0.0..100.0f64,
        dt in 0.0..1.0f64,
        target in -1.0e3..1.0e3f64,
    ) {
        let limits = DriveLimits::unlimited();
        let s = state(direction, speed, target, limits, DofLock::Free, JointType::Revolute);
        let next = TargetUpdater::new().update(&s, dt);
        prop_assert_eq!(next, target + direction.sign() * dt * speed);
    }

    #[test]
    fn proptest_no_direction_no_drift(
        speed in 0.0..1.0e3f64,
        dt in 0.0..1.0f64,
        limits in arb_limits(),
        offset in 0.0..1.0f64,
        lock in arb_lock(),
    ) {
        let target = limits.clamp_candidate(limits.lower + offset * limits.range());
        let s = state(Direction::None, speed, target, limits, lock, JointType::Revolute);
        prop_assert_eq!(TargetUpdater::new().update(&s, dt), target);
    }

    #[test]
    fn proptest_undriven_kinds_pass_through(
        direction in arb_direction(),
        speed in 0.0..1.0e3f64,
        dt in 0.0..1.0f64,
        target in -100.0..100.0f64,
        lock in arb_lock(),
        joint_type in prop_oneof![
            Just(JointType::Fixed),
            Just(JointType::Prismatic),
            Just(JointType::Spherical),
        ],
    ) {
        let s = state(direction, speed, target, DriveLimits::symmetric(1.0), lock, joint_type);
        prop_assert_eq!(TargetUpdater::new().update(&s, dt), target);
    }
}
