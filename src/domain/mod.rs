//! Pure domain types with minimal dependencies
//!
//! Nothing in here knows about rasterizing, files or configuration.

pub mod geometry;
pub mod pose;
pub mod presets;
pub mod scene;

pub use geometry::*;
pub use pose::*;
pub use scene::*;
