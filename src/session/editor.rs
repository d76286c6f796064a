//! Editing session: the single mutable pose plus the render entry point
//!
//! UI hosts own one [`PoseEditor`], mutate it from their widgets and call
//! [`PoseEditor::render`] after every mutation or resize. Every failure is
//! returned to the host; a rejected load or mutation leaves the current pose
//! exactly as it was.

use std::path::Path;

use anyhow::Result;

use super::file;
use crate::config::EditorConfig;
use crate::domain::{DEFAULT_POSE, Pose, PoseField, RenderScene, presets};
use crate::error::PoseError;
use crate::render::kinematics;

#[derive(Debug, Clone, PartialEq)]
pub struct PoseEditor {
    pose: Pose,
    scale: f32,
}

impl Default for PoseEditor {
    fn default() -> Self {
        Self {
            pose: DEFAULT_POSE,
            scale: 3.0,
        }
    }
}

impl PoseEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session rendering at a custom scale
    pub fn with_scale(scale: f32) -> Result<Self, PoseError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(PoseError::InvalidScale(scale));
        }
        Ok(Self {
            scale,
            ..Self::default()
        })
    }

    pub fn from_config(config: &EditorConfig) -> Result<Self, PoseError> {
        Self::with_scale(config.scale)
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_angle(&mut self, field: PoseField, value: f32) -> Result<(), PoseError> {
        self.pose.set(field, value)
    }

    /// Set an angle by its pose-file key, e.g. `"left_upper_arm"`
    pub fn set_angle_by_key(&mut self, key: &str, value: f32) -> Result<(), PoseError> {
        let field = key.parse::<PoseField>()?;
        self.set_angle(field, value)
    }

    pub fn set_facing(&mut self, facing: bool) {
        self.pose.facing = facing;
    }

    /// Render the current pose for a canvas of the given size
    pub fn render(&self, canvas_width: f32, canvas_height: f32) -> Result<RenderScene, PoseError> {
        kinematics::compute(&self.pose, canvas_width, canvas_height, self.scale)
    }

    pub fn reset_to_default(&mut self) {
        self.pose = DEFAULT_POSE;
    }

    /// Replace the pose with a named preset
    pub fn apply_preset(&mut self, name: &str) -> Result<(), PoseError> {
        self.pose = presets::lookup(name)
            .ok_or_else(|| PoseError::UnknownPreset(name.to_string()))?;
        Ok(())
    }

    /// Replace the pose with parsed pose-file contents
    ///
    /// The pose is only replaced once the whole input has validated.
    pub fn load_from(&mut self, raw: &str) -> Result<(), PoseError> {
        match file::decode(raw) {
            Ok(pose) => {
                self.pose = pose;
                Ok(())
            }
            Err(err) => {
                log::warn!("Rejected pose data: {}", err);
                Err(err)
            }
        }
    }

    pub fn serialize_for_save(&self) -> Result<String> {
        file::encode(&self.pose)
    }

    /// Load a pose file; on any failure the current pose is kept
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        match file::load(path) {
            Ok(pose) => {
                self.pose = pose;
                Ok(())
            }
            Err(err) => {
                log::warn!("Rejected pose file {}: {:#}", path.display(), err);
                Err(err)
            }
        }
    }

    pub fn save_file(&self, path: &Path) -> Result<()> {
        file::save(path, &self.pose)
    }

    /// Slider readouts for every angle, in file order
    pub fn readouts(&self) -> impl Iterator<Item = (PoseField, String)> + '_ {
        PoseField::ALL
            .into_iter()
            .map(|field| (field, PoseField::readout(self.pose.get(field))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_session_holds_default_pose() {
        let editor = PoseEditor::new();
        assert_eq!(*editor.pose(), DEFAULT_POSE);
        assert_eq!(editor.scale(), 3.0);
    }

    #[test]
    fn test_reset_reproduces_fresh_scene() {
        let fresh = PoseEditor::new().render(600.0, 600.0).unwrap();

        let mut editor = PoseEditor::new();
        editor.set_angle(PoseField::Body, 33.0).unwrap();
        editor.set_facing(false);
        editor.apply_preset("high_kick").unwrap();
        assert_ne!(editor.render(600.0, 600.0).unwrap(), fresh);

        editor.reset_to_default();
        assert_eq!(editor.render(600.0, 600.0).unwrap(), fresh);
    }

    #[test]
    fn test_mutators() {
        let mut editor = PoseEditor::new();
        editor.set_angle(PoseField::Head, 15.0).unwrap();
        editor.set_angle_by_key("right_lower_leg", -75.0).unwrap();
        editor.set_facing(false);
        assert_eq!(editor.pose().head, 15.0);
        assert_eq!(editor.pose().right_lower_leg, -75.0);
        assert!(!editor.pose().facing);

        assert!(matches!(
            editor.set_angle_by_key("tail", 1.0),
            Err(PoseError::UnknownField(_))
        ));
        assert!(editor.set_angle(PoseField::Head, f32::NAN).is_err());
        assert_eq!(editor.pose().head, 15.0);
    }

    #[test]
    fn test_round_trip_through_session() {
        let mut source = PoseEditor::new();
        source.apply_preset("jumping_kick").unwrap();
        source.set_angle(PoseField::LeftUpperArm, -33.333).unwrap();
        let raw = source.serialize_for_save().unwrap();

        let mut target = PoseEditor::new();
        target.load_from(&raw).unwrap();
        assert_eq!(target.pose().facing, source.pose().facing);
        for field in PoseField::ALL {
            assert_abs_diff_eq!(
                target.pose().get(field),
                source.pose().get(field),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_rejected_load_keeps_pose() {
        let mut editor = PoseEditor::new();
        editor.apply_preset("punch").unwrap();
        let before = *editor.pose();

        let mut value: serde_json::Value =
            serde_json::from_str(&editor.serialize_for_save().unwrap()).unwrap();
        value.as_object_mut().unwrap().remove("left_lower_leg");
        value["head"] = serde_json::json!(99.0);

        match editor.load_from(&value.to_string()) {
            Err(PoseError::MalformedPose { field, .. }) => assert_eq!(field, "left_lower_leg"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(*editor.pose(), before);
    }

    #[test]
    fn test_unknown_preset_keeps_pose() {
        let mut editor = PoseEditor::new();
        editor.set_angle(PoseField::Body, 5.0).unwrap();
        assert_eq!(
            editor.apply_preset("moonwalk"),
            Err(PoseError::UnknownPreset("moonwalk".to_string()))
        );
        assert_eq!(editor.pose().body, 5.0);
    }

    #[test]
    fn test_render_rejects_bad_canvas() {
        let editor = PoseEditor::new();
        assert!(matches!(
            editor.render(0.0, 600.0),
            Err(PoseError::InvalidCanvasSize { .. })
        ));
        assert!(matches!(
            editor.render(600.0, -1.0),
            Err(PoseError::InvalidCanvasSize { .. })
        ));
    }

    #[test]
    fn test_with_scale_validates() {
        assert!(PoseEditor::with_scale(0.0).is_err());
        assert!(PoseEditor::with_scale(f32::NAN).is_err());
        let editor = PoseEditor::with_scale(1.0).unwrap();
        let scene = editor.render(600.0, 600.0).unwrap();
        assert_abs_diff_eq!(scene.body_end.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_from_config() {
        let config = EditorConfig {
            scale: 2.0,
            ..EditorConfig::default()
        };
        assert_eq!(PoseEditor::from_config(&config).unwrap().scale(), 2.0);
    }

    #[test]
    fn test_file_failures_keep_pose() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = PoseEditor::new();
        editor.apply_preset("running1").unwrap();
        let before = *editor.pose();

        assert!(editor.load_file(&dir.path().join("missing.json")).is_err());
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "[]").unwrap();
        assert!(editor.load_file(&bad).is_err());
        assert_eq!(*editor.pose(), before);

        let good = dir.path().join("good.json");
        editor.save_file(&good).unwrap();
        editor.reset_to_default();
        editor.load_file(&good).unwrap();
        assert_eq!(*editor.pose(), before);
    }

    #[test]
    fn test_readouts() {
        let editor = PoseEditor::new();
        let readouts: Vec<_> = editor.readouts().collect();
        assert_eq!(readouts.len(), 10);
        assert_eq!(readouts[2], (PoseField::RightUpperArm, "10.0°".to_string()));
        assert_eq!(readouts[9], (PoseField::LeftLowerLeg, "-50.0°".to_string()));
    }
}
