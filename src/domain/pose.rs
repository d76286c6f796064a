//! Pose model: ten joint angles plus a facing flag
//!
//! Angles are in degrees, relative to the parent segment's resultant
//! direction. The model never clamps; any finite value is accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PoseError;

/// Slider range offered to UI hosts. The model itself does not clamp.
pub const SLIDER_RANGE: (f32, f32) = (-180.0, 180.0);

/// Key of the facing flag in the pose file
pub const FACING_KEY: &str = "facing";

/// A stick-figure pose
///
/// Field order here is the order fields are written to pose files.
/// Deserializing goes through [`Pose::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Pose {
    /// true = facing right, false = facing left
    pub facing: bool,
    pub head: f32,
    pub body: f32,
    pub right_upper_arm: f32,
    pub right_lower_arm: f32,
    pub right_upper_leg: f32,
    pub right_lower_leg: f32,
    pub left_upper_arm: f32,
    pub left_lower_arm: f32,
    pub left_upper_leg: f32,
    pub left_lower_leg: f32,
}

/// The idle pose used at startup and as the reset target
pub const DEFAULT_POSE: Pose = Pose {
    facing: true,
    head: 0.0,
    body: 0.0,
    right_upper_arm: 10.0,
    right_lower_arm: 90.0,
    right_upper_leg: 10.0,
    right_lower_leg: -40.0,
    left_upper_arm: 30.0,
    left_lower_arm: 90.0,
    left_upper_leg: 40.0,
    left_lower_leg: -50.0,
};

impl Default for Pose {
    fn default() -> Self {
        DEFAULT_POSE
    }
}

impl TryFrom<Value> for Pose {
    type Error = PoseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Pose::validate(&value)
    }
}

impl Pose {
    /// Validate untyped pose data (e.g. a parsed pose file)
    ///
    /// Checks `facing` first, then every angle in file order, and reports the
    /// first field that is missing, mistyped or non-finite.
    pub fn validate(candidate: &Value) -> Result<Pose, PoseError> {
        let Some(map) = candidate.as_object() else {
            return Err(PoseError::malformed("pose", "must be a key-value mapping"));
        };

        let facing = match map.get(FACING_KEY) {
            None => return Err(PoseError::malformed(FACING_KEY, "is missing")),
            Some(Value::Bool(b)) => *b,
            Some(_) => return Err(PoseError::malformed(FACING_KEY, "must be a boolean")),
        };

        let mut pose = Pose {
            facing,
            ..DEFAULT_POSE
        };
        for field in PoseField::ALL {
            let key = field.key();
            let value = match map.get(key) {
                None => return Err(PoseError::malformed(key, "is missing")),
                Some(v) => v
                    .as_f64()
                    .ok_or_else(|| PoseError::malformed(key, "must be a number"))?,
            };
            // Values beyond f32 range become infinite here and are rejected below
            let value = value as f32;
            if !value.is_finite() {
                return Err(PoseError::malformed(key, "must be a finite number"));
            }
            *pose.field_mut(field) = value;
        }

        for key in map.keys() {
            if key != FACING_KEY && key.parse::<PoseField>().is_err() {
                log::debug!("Ignoring unknown pose key '{}'", key);
            }
        }

        Ok(pose)
    }

    /// Check that every angle is finite
    pub fn check(&self) -> Result<(), PoseError> {
        match PoseField::ALL.into_iter().find(|f| !self.get(*f).is_finite()) {
            Some(field) => Err(PoseError::InvalidPose(field.key().to_string())),
            None => Ok(()),
        }
    }

    pub fn get(&self, field: PoseField) -> f32 {
        match field {
            PoseField::Head => self.head,
            PoseField::Body => self.body,
            PoseField::RightUpperArm => self.right_upper_arm,
            PoseField::RightLowerArm => self.right_lower_arm,
            PoseField::RightUpperLeg => self.right_upper_leg,
            PoseField::RightLowerLeg => self.right_lower_leg,
            PoseField::LeftUpperArm => self.left_upper_arm,
            PoseField::LeftLowerArm => self.left_lower_arm,
            PoseField::LeftUpperLeg => self.left_upper_leg,
            PoseField::LeftLowerLeg => self.left_lower_leg,
        }
    }

    fn field_mut(&mut self, field: PoseField) -> &mut f32 {
        match field {
            PoseField::Head => &mut self.head,
            PoseField::Body => &mut self.body,
            PoseField::RightUpperArm => &mut self.right_upper_arm,
            PoseField::RightLowerArm => &mut self.right_lower_arm,
            PoseField::RightUpperLeg => &mut self.right_upper_leg,
            PoseField::RightLowerLeg => &mut self.right_lower_leg,
            PoseField::LeftUpperArm => &mut self.left_upper_arm,
            PoseField::LeftLowerArm => &mut self.left_lower_arm,
            PoseField::LeftUpperLeg => &mut self.left_upper_leg,
            PoseField::LeftLowerLeg => &mut self.left_lower_leg,
        }
    }

    /// Update one angle in place; NaN and infinities are rejected and the
    /// pose is left unchanged
    pub fn set(&mut self, field: PoseField, value: f32) -> Result<(), PoseError> {
        if !value.is_finite() {
            return Err(PoseError::NonFiniteAngle {
                field: field.key().to_string(),
                value,
            });
        }
        *self.field_mut(field) = value;
        Ok(())
    }

    /// Sign applied to every limb angle: -1 when facing right, +1 when facing left
    pub fn flip(&self) -> f32 {
        if self.facing { -1.0 } else { 1.0 }
    }

    /// (upper, lower) angles of a limb
    pub fn limb(&self, limb: Limb) -> (f32, f32) {
        (self.get(limb.upper()), self.get(limb.lower()))
    }
}

/// One of the ten angle fields of a [`Pose`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseField {
    Head,
    Body,
    RightUpperArm,
    RightLowerArm,
    RightUpperLeg,
    RightLowerLeg,
    LeftUpperArm,
    LeftLowerArm,
    LeftUpperLeg,
    LeftLowerLeg,
}

impl PoseField {
    /// All angle fields in pose-file order
    pub const ALL: [PoseField; 10] = [
        PoseField::Head,
        PoseField::Body,
        PoseField::RightUpperArm,
        PoseField::RightLowerArm,
        PoseField::RightUpperLeg,
        PoseField::RightLowerLeg,
        PoseField::LeftUpperArm,
        PoseField::LeftLowerArm,
        PoseField::LeftUpperLeg,
        PoseField::LeftLowerLeg,
    ];

    /// Key used in pose files
    pub fn key(self) -> &'static str {
        match self {
            PoseField::Head => "head",
            PoseField::Body => "body",
            PoseField::RightUpperArm => "right_upper_arm",
            PoseField::RightLowerArm => "right_lower_arm",
            PoseField::RightUpperLeg => "right_upper_leg",
            PoseField::RightLowerLeg => "right_lower_leg",
            PoseField::LeftUpperArm => "left_upper_arm",
            PoseField::LeftLowerArm => "left_lower_arm",
            PoseField::LeftUpperLeg => "left_upper_leg",
            PoseField::LeftLowerLeg => "left_lower_leg",
        }
    }

    /// Human-readable label for slider rows
    pub fn label(self) -> &'static str {
        match self {
            PoseField::Head => "Head",
            PoseField::Body => "Body",
            PoseField::RightUpperArm => "Right Upper Arm",
            PoseField::RightLowerArm => "Right Lower Arm",
            PoseField::RightUpperLeg => "Right Upper Leg",
            PoseField::RightLowerLeg => "Right Lower Leg",
            PoseField::LeftUpperArm => "Left Upper Arm",
            PoseField::LeftLowerArm => "Left Lower Arm",
            PoseField::LeftUpperLeg => "Left Upper Leg",
            PoseField::LeftLowerLeg => "Left Lower Leg",
        }
    }

    /// Numeric readout shown next to a slider
    pub fn readout(value: f32) -> String {
        format!("{value:.1}°")
    }
}

impl fmt::Display for PoseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PoseField {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PoseField::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| PoseError::UnknownField(s.to_string()))
    }
}

/// A two-segment limb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Limb {
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

impl Limb {
    pub const ALL: [Limb; 4] = [Limb::RightArm, Limb::LeftArm, Limb::RightLeg, Limb::LeftLeg];

    pub fn upper(self) -> PoseField {
        match self {
            Limb::RightArm => PoseField::RightUpperArm,
            Limb::LeftArm => PoseField::LeftUpperArm,
            Limb::RightLeg => PoseField::RightUpperLeg,
            Limb::LeftLeg => PoseField::LeftUpperLeg,
        }
    }

    pub fn lower(self) -> PoseField {
        match self {
            Limb::RightArm => PoseField::RightLowerArm,
            Limb::LeftArm => PoseField::LeftLowerArm,
            Limb::RightLeg => PoseField::RightLowerLeg,
            Limb::LeftLeg => PoseField::LeftLowerLeg,
        }
    }

    /// Arms hang from the neck, legs from the end of the body
    pub fn is_arm(self) -> bool {
        matches!(self, Limb::RightArm | Limb::LeftArm)
    }
}
