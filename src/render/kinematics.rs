//! Forward kinematics for the stick figure
//!
//! Walks the fixed hierarchy from the neck outward. Every node takes its
//! parent's resultant angle and endpoint, adds its own relative angle and
//! emits canvas-space primitives.
//!
//! Angles are measured from the downward vertical and negated before use,
//! so a positive pose angle turns clockwise on screen (y grows down). Limb
//! angles are additionally multiplied by the facing flip; head and body
//! are not.

use super::geometry::skeleton::{
    BODY_LENGTH, HEAD_RADIUS, JOINT_RADIUS, LIMB_SEGMENT_LENGTH, NECK_OFFSET,
};
use crate::domain::{
    BodyPart, HeadCircle, JointMarker, Limb, LineSegment, Point, Pose, Primitive, RenderScene,
};
use crate::error::PoseError;

/// Endpoint and resultant angle of a single segment
#[derive(Clone, Copy, Debug)]
struct Bone {
    end: Point,
    angle: f32,
}

/// Rotate `relative` degrees off the parent's resultant angle and extend
/// `length` from `start`
fn extend(start: Point, parent_angle: f32, relative: f32, length: f32) -> Bone {
    let angle = relative + parent_angle;
    Bone {
        end: start + Point::from_angle(angle) * length,
        angle,
    }
}

/// Compute the render scene for `pose` on a canvas of the given size
///
/// Pure and cheap (fixed ten-node hierarchy), meant to be called on every
/// pose change or resize.
///
/// # Errors
///
/// - `InvalidCanvasSize` if either dimension is not strictly positive
/// - `InvalidScale` if `scale` is not positive and finite
/// - `InvalidPose` if any angle is not finite
pub fn compute(
    pose: &Pose,
    canvas_width: f32,
    canvas_height: f32,
    scale: f32,
) -> Result<RenderScene, PoseError> {
    // Written to also reject NaN
    if !(canvas_width > 0.0 && canvas_height > 0.0) {
        return Err(PoseError::InvalidCanvasSize {
            width: canvas_width,
            height: canvas_height,
        });
    }
    if !(scale.is_finite() && scale > 0.0) {
        return Err(PoseError::InvalidScale(scale));
    }
    pose.check()?;

    let mut primitives = Vec::with_capacity(14);

    let neck = Point::new(canvas_width / 2.0, canvas_height / 2.0 - NECK_OFFSET);

    let body = extend(neck, 0.0, -pose.body, BODY_LENGTH * scale);
    primitives.push(Primitive::Segment(LineSegment {
        start: neck,
        end: body.end,
        part: BodyPart::Body,
    }));

    // The head sits opposite the body direction, one radius up from the neck
    let head_angle = -pose.head + body.angle;
    let head_radius = HEAD_RADIUS * scale;
    primitives.push(Primitive::Head(HeadCircle {
        center: neck - Point::from_angle(head_angle) * head_radius,
        radius: head_radius,
    }));

    let flip = pose.flip();
    for limb in Limb::ALL {
        let start = if limb.is_arm() { neck } else { body.end };
        emit_limb(&mut primitives, pose, limb, start, body.angle, flip, scale);
    }

    log::debug!(
        "Computed scene: neck=({:.1}, {:.1}) body_end=({:.1}, {:.1}) primitives={}",
        neck.x,
        neck.y,
        body.end.x,
        body.end.y,
        primitives.len()
    );

    Ok(RenderScene {
        primitives,
        neck,
        body_end: body.end,
    })
}

/// Two-segment limb shared by arms and legs
fn emit_limb(
    out: &mut Vec<Primitive>,
    pose: &Pose,
    limb: Limb,
    start: Point,
    parent_angle: f32,
    flip: f32,
    scale: f32,
) {
    let (upper_field, lower_field) = pose.limb(limb);
    let length = LIMB_SEGMENT_LENGTH * scale;

    let upper = extend(start, parent_angle, -upper_field * flip, length);
    let lower = extend(upper.end, upper.angle, -lower_field * flip, length);

    out.push(Primitive::Segment(LineSegment {
        start,
        end: upper.end,
        part: limb.upper().into(),
    }));
    out.push(Primitive::Segment(LineSegment {
        start: upper.end,
        end: lower.end,
        part: limb.lower().into(),
    }));
    out.push(Primitive::Joint(JointMarker {
        center: upper.end,
        radius: JOINT_RADIUS,
        limb,
    }));
}
