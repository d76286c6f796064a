//! Render scene produced by the kinematics renderer
//!
//! A scene is recomputed from scratch on every render and never mutated
//! afterwards. Every primitive carries a style tag naming the body part that
//! produced it, so hosts can re-color or hit-test individual parts.

use serde::Serialize;

use super::geometry::Point;
use super::pose::{Limb, PoseField};

/// Style tag identifying one of the ten named body parts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
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

impl BodyPart {
    /// Whether this part is the upper segment of a limb
    pub fn is_upper_limb(self) -> bool {
        matches!(
            self,
            BodyPart::RightUpperArm
                | BodyPart::LeftUpperArm
                | BodyPart::RightUpperLeg
                | BodyPart::LeftUpperLeg
        )
    }

    /// Whether this part is the lower segment of a limb
    pub fn is_lower_limb(self) -> bool {
        matches!(
            self,
            BodyPart::RightLowerArm
                | BodyPart::LeftLowerArm
                | BodyPart::RightLowerLeg
                | BodyPart::LeftLowerLeg
        )
    }

    /// The pose field that drives this part
    pub fn field(self) -> PoseField {
        match self {
            BodyPart::Head => PoseField::Head,
            BodyPart::Body => PoseField::Body,
            BodyPart::RightUpperArm => PoseField::RightUpperArm,
            BodyPart::RightLowerArm => PoseField::RightLowerArm,
            BodyPart::RightUpperLeg => PoseField::RightUpperLeg,
            BodyPart::RightLowerLeg => PoseField::RightLowerLeg,
            BodyPart::LeftUpperArm => PoseField::LeftUpperArm,
            BodyPart::LeftLowerArm => PoseField::LeftLowerArm,
            BodyPart::LeftUpperLeg => PoseField::LeftUpperLeg,
            BodyPart::LeftLowerLeg => PoseField::LeftLowerLeg,
        }
    }
}

impl From<PoseField> for BodyPart {
    fn from(field: PoseField) -> Self {
        match field {
            PoseField::Head => BodyPart::Head,
            PoseField::Body => BodyPart::Body,
            PoseField::RightUpperArm => BodyPart::RightUpperArm,
            PoseField::RightLowerArm => BodyPart::RightLowerArm,
            PoseField::RightUpperLeg => BodyPart::RightUpperLeg,
            PoseField::RightLowerLeg => BodyPart::RightLowerLeg,
            PoseField::LeftUpperArm => BodyPart::LeftUpperArm,
            PoseField::LeftLowerArm => BodyPart::LeftLowerArm,
            PoseField::LeftUpperLeg => BodyPart::LeftUpperLeg,
            PoseField::LeftLowerLeg => BodyPart::LeftLowerLeg,
        }
    }
}

/// Straight segment between two canvas points
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
    pub part: BodyPart,
}

/// Head outline
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeadCircle {
    pub center: Point,
    pub radius: f32,
}

/// Filled marker drawn at an elbow or knee
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct JointMarker {
    pub center: Point,
    pub radius: f32,
    pub limb: Limb,
}

/// A drawable primitive
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Primitive {
    Segment(LineSegment),
    Head(HeadCircle),
    Joint(JointMarker),
}

/// Result of hit-testing a scene
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    Part(BodyPart),
    Joint(Limb),
}

/// Ordered list of primitives plus the two anchor points of the skeleton
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderScene {
    pub primitives: Vec<Primitive>,
    /// Root of the hierarchy; arms and head attach here
    pub neck: Point,
    /// End of the body segment; legs attach here
    pub body_end: Point,
}

impl RenderScene {
    pub fn segments(&self) -> impl Iterator<Item = &LineSegment> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Segment(s) => Some(s),
            _ => None,
        })
    }

    pub fn segment(&self, part: BodyPart) -> Option<&LineSegment> {
        self.segments().find(|s| s.part == part)
    }

    pub fn head(&self) -> Option<&HeadCircle> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Head(h) => Some(h),
            _ => None,
        })
    }

    pub fn joints(&self) -> impl Iterator<Item = &JointMarker> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Joint(j) => Some(j),
            _ => None,
        })
    }

    pub fn joint(&self, limb: Limb) -> Option<&JointMarker> {
        self.joints().find(|j| j.limb == limb)
    }

    /// Find what lies under `point`
    ///
    /// Joint markers win over everything, then the head disc, then the
    /// nearest segment within `tolerance`.
    pub fn hit_test(&self, point: Point, tolerance: f32) -> Option<Hit> {
        if let Some(joint) = self
            .joints()
            .find(|j| point.distance_to(j.center) <= j.radius + tolerance)
        {
            return Some(Hit::Joint(joint.limb));
        }

        if self
            .head()
            .is_some_and(|h| point.distance_to(h.center) <= h.radius + tolerance)
        {
            return Some(Hit::Part(BodyPart::Head));
        }

        self.segments()
            .map(|s| (s.part, point.distance_to_segment(s.start, s.end)))
            .filter(|(_, d)| *d <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(part, _)| Hit::Part(part))
    }
}
