//! Skeleton and stroke constants
//!
//! Lengths are in skeleton units and get multiplied by the render scale;
//! pixel values are canvas pixels and never scale.

/// Fixed skeleton dimensions
pub mod skeleton {
    /// Neck to hip
    pub const BODY_LENGTH: f32 = 50.0;
    pub const HEAD_RADIUS: f32 = 15.0;
    /// Every arm and leg segment, upper and lower alike
    pub const LIMB_SEGMENT_LENGTH: f32 = 40.0;
    /// How far the neck sits above the canvas center, in pixels.
    /// Not multiplied by the scale.
    pub const NECK_OFFSET: f32 = 50.0;
    /// Joint marker radius in pixels, not multiplied by the scale
    pub const JOINT_RADIUS: f32 = 4.0;
}

/// Stroke widths used when rasterizing a scene
pub mod stroke {
    pub const SEGMENT_WIDTH: f32 = 3.0;
    pub const HEAD_WIDTH: f32 = 2.0;
    pub const GRID_WIDTH: f32 = 1.0;
}

/// Canvas-space positions of the grid lines along one axis
pub fn grid_lines(extent: u32, spacing: u32) -> impl Iterator<Item = f32> {
    let step = spacing.max(1) as usize;
    (0..extent).step_by(step).map(|i| i as f32)
}
