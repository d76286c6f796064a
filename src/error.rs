//! Error taxonomy for pose handling and rendering

use thiserror::Error;

/// Errors raised by the pose model and the kinematics renderer.
///
/// File and config I/O is reported through `anyhow` at the call site; these
/// variants cover the domain contract itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoseError {
    /// Loaded data is missing a field, has the wrong type, or holds a
    /// non-finite number.
    #[error("Malformed pose: field '{field}' {reason}")]
    MalformedPose { field: String, reason: String },

    #[error("Invalid canvas size {width}x{height} (both must be > 0)")]
    InvalidCanvasSize { width: f32, height: f32 },

    #[error("Invalid scale: {0} (must be positive and finite)")]
    InvalidScale(f32),

    /// A pose handed to the renderer failed validation.
    #[error("Invalid pose: field '{0}' is not finite")]
    InvalidPose(String),

    #[error("Rejected non-finite value {value} for '{field}'")]
    NonFiniteAngle { field: String, value: f32 },

    #[error("Unknown pose field: {0}")]
    UnknownField(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

impl PoseError {
    pub(crate) fn malformed(field: &str, reason: impl Into<String>) -> Self {
        Self::MalformedPose {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
