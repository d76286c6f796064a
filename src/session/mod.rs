//! Session state and pose persistence

pub mod editor;
pub mod file;

pub use editor::PoseEditor;
