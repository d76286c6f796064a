//! Named pose library
//!
//! Reference poses from the fighting game these figures were authored for.

use super::pose::{DEFAULT_POSE, Pose};

pub const IDLE_POSE1: Pose = DEFAULT_POSE;

pub const IDLE_LEFT_POSE: Pose = Pose {
    facing: false,
    ..DEFAULT_POSE
};

pub const IDLE_POSE2: Pose = Pose {
    right_upper_leg: 20.0,
    right_lower_leg: -50.0,
    left_upper_leg: 50.0,
    left_lower_leg: -60.0,
    ..DEFAULT_POSE
};

pub const RUNNING_POSE1: Pose = Pose {
    facing: true,
    head: 0.0,
    body: -10.0,
    right_upper_arm: -60.0,
    right_lower_arm: 90.0,
    right_upper_leg: 100.0,
    right_lower_leg: -90.0,
    left_upper_arm: 60.0,
    left_lower_arm: 90.0,
    left_upper_leg: -30.0,
    left_lower_leg: -50.0,
};

pub const RUNNING_POSE2: Pose = Pose {
    facing: true,
    head: 0.0,
    body: -10.0,
    right_upper_arm: 60.0,
    right_lower_arm: 90.0,
    right_upper_leg: -30.0,
    right_lower_leg: -50.0,
    left_upper_arm: -60.0,
    left_lower_arm: 90.0,
    left_upper_leg: 100.0,
    left_lower_leg: -90.0,
};

pub const JUMPING_POSE1: Pose = Pose {
    facing: true,
    head: 0.0,
    body: 0.0,
    right_upper_arm: 20.0,
    right_lower_arm: -20.0,
    right_upper_leg: 10.0,
    right_lower_leg: -10.0,
    left_upper_arm: -20.0,
    left_lower_arm: 10.0,
    left_upper_leg: 60.0,
    left_lower_leg: -70.0,
};

pub const JUMPING_POSE2: Pose = Pose {
    right_upper_arm: 40.0,
    left_upper_arm: -40.0,
    left_lower_arm: 20.0,
    ..JUMPING_POSE1
};

pub const JUMPING_KICK_POSE: Pose = Pose {
    facing: true,
    head: 0.0,
    body: -10.0,
    right_upper_arm: -10.0,
    right_lower_arm: 20.0,
    right_upper_leg: 70.0,
    right_lower_leg: -110.0,
    left_upper_arm: -20.0,
    left_lower_arm: 10.0,
    left_upper_leg: 10.0,
    left_lower_leg: -10.0,
};

pub const KICK_POSE: Pose = Pose {
    body: 10.0,
    right_upper_leg: 100.0,
    right_lower_leg: 10.0,
    left_upper_leg: -20.0,
    left_lower_leg: -10.0,
    ..DEFAULT_POSE
};

pub const HIGH_KICK_POSE: Pose = Pose {
    right_upper_leg: 150.0,
    ..KICK_POSE
};

pub const PUNCH_POSE: Pose = Pose {
    right_upper_arm: 90.0,
    right_lower_arm: 0.0,
    ..DEFAULT_POSE
};

pub const UPPER_PUNCH_POSE1: Pose = PUNCH_POSE;

pub const UPPER_PUNCH_POSE2: Pose = Pose {
    right_lower_arm: 90.0,
    ..PUNCH_POSE
};

static PRESETS: [(&str, Pose); 14] = [
    ("idle", IDLE_POSE1),
    ("idle_left", IDLE_LEFT_POSE),
    ("idle2", IDLE_POSE2),
    ("running1", RUNNING_POSE1),
    ("running2", RUNNING_POSE2),
    ("jumping1", JUMPING_POSE1),
    ("jumping2", JUMPING_POSE2),
    ("jumping_kick", JUMPING_KICK_POSE),
    ("kick", KICK_POSE),
    ("high_kick", HIGH_KICK_POSE),
    ("punch", PUNCH_POSE),
    ("upper_punch1", UPPER_PUNCH_POSE1),
    ("upper_punch2", UPPER_PUNCH_POSE2),
    ("default", DEFAULT_POSE),
];

/// Look up a preset by name
pub fn lookup(name: &str) -> Option<Pose> {
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, pose)| *pose)
}

/// Names of all presets, in library order
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}
