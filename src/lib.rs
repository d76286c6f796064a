//! Forward-kinematics core of a 2D stick-figure pose editor
//!
//! A [`Pose`] holds ten joint angles and a facing flag. The kinematics
//! renderer walks the fixed skeleton (head, body, two arms, two legs) and
//! produces a [`RenderScene`] of tagged line segments and circles that any
//! UI layer can draw. [`PoseEditor`] wraps this into the mutate-then-render
//! contract a host UI needs, plus pose-file load and save.

pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod session;

pub use domain::{BodyPart, Pose, PoseField, RenderScene};
pub use error::PoseError;
pub use render::kinematics::compute;
pub use session::PoseEditor;
