//! Scene rendering
//!
//! This module contains:
//! - Skeleton and stroke constants shared by everything below
//! - Forward kinematics turning a pose into a render scene
//! - Raster output of a scene using tiny-skia

pub mod geometry;
pub mod image;
pub mod kinematics;
