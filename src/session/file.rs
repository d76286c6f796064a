//! Pose file encoding and disk I/O
//!
//! A pose file is a JSON object holding `facing` plus the ten angle keys.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::domain::Pose;
use crate::error::PoseError;

/// Encode a pose as pretty-printed JSON, four-space indented
pub fn encode(pose: &Pose) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    pose.serialize(&mut ser).context("Failed to encode pose")?;
    String::from_utf8(buf).context("Encoded pose is not valid UTF-8")
}

/// Parse and validate pose file contents
pub fn decode(raw: &str) -> Result<Pose, PoseError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| PoseError::malformed("pose", format!("is not valid JSON ({e})")))?;
    Pose::validate(&value)
}

/// Read and validate a pose file
pub fn load(path: &Path) -> Result<Pose> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pose file: {}", path.display()))?;
    let pose =
        decode(&raw).with_context(|| format!("Invalid pose file: {}", path.display()))?;
    log::info!("Loaded pose from {}", path.display());
    Ok(pose)
}

/// Write a pose file
///
/// The data goes to a temporary file next to `path` first, so a failed
/// write never leaves a truncated pose file behind.
pub fn save(path: &Path, pose: &Pose) -> Result<()> {
    let json = encode(pose)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::Builder::new()
        .prefix(".pose-")
        .suffix(".json")
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    file.persist(path)
        .with_context(|| format!("Failed to write pose file: {}", path.display()))?;

    log::info!("Saved pose to {}", path.display());
    Ok(())
}

/// Timestamped file name, e.g. `Pose_2024-05-01_12-30-00.json`
pub fn default_file_name(extension: &str) -> String {
    let stamp = chrono::Local::now().format("Pose_%Y-%m-%d_%H-%M-%S");
    format!("{stamp}.{extension}")
}

/// Timestamped path inside `dir`
pub fn default_path(dir: &Path, extension: &str) -> PathBuf {
    dir.join(default_file_name(extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_POSE, PoseField, presets};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_encode_uses_stable_field_names() {
        let json = encode(&DEFAULT_POSE).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 11);
        assert!(keys.contains(&"facing"));
        for field in PoseField::ALL {
            assert!(keys.contains(&field.key()), "missing {field}");
        }
        assert!(json.starts_with("{\n    \"facing\": true"));
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let pose = Pose {
            facing: false,
            head: 12.345678,
            body: -0.1,
            right_upper_arm: 179.99,
            left_lower_leg: -1234.5678,
            ..presets::RUNNING_POSE2
        };
        let decoded = decode(&encode(&pose).unwrap()).unwrap();
        assert_eq!(decoded.facing, pose.facing);
        for field in PoseField::ALL {
            assert_abs_diff_eq!(decoded.get(field), pose.get(field), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_decode_legacy_tool_output() {
        let raw = r#"{
    "facing": true,
    "head": 0.0,
    "body": 0.0,
    "right_upper_arm": 10.0,
    "right_lower_arm": 90.0,
    "right_upper_leg": 10.0,
    "right_lower_leg": -40.0,
    "left_upper_arm": 30.0,
    "left_lower_arm": 90.0,
    "left_upper_leg": 40.0,
    "left_lower_leg": -50.0
}"#;
        assert_eq!(decode(raw).unwrap(), DEFAULT_POSE);
    }

    #[test]
    fn test_decode_rejects_bad_json() {
        assert!(matches!(
            decode("{ facing: true"),
            Err(PoseError::MalformedPose { field, .. }) if field == "pose"
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kick.json");
        save(&path, &presets::KICK_POSE).unwrap();
        assert_eq!(load(&path).unwrap(), presets::KICK_POSE);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pose.json");
        save(&path, &presets::KICK_POSE).unwrap();
        save(&path, &presets::PUNCH_POSE).unwrap();
        assert_eq!(load(&path).unwrap(), presets::PUNCH_POSE);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_load_invalid_file_keeps_pose_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{"facing": true, "head": 1.0}"#).unwrap();
        let err = load(&path).unwrap_err();
        let pose_err = err.downcast_ref::<PoseError>().unwrap();
        assert!(matches!(pose_err, PoseError::MalformedPose { field, .. } if field == "body"));
    }

    #[test]
    fn test_default_file_name_shape() {
        let name = default_file_name("json");
        assert!(name.starts_with("Pose_"));
        assert!(name.ends_with(".json"));
        // Pose_YYYY-MM-DD_HH-MM-SS.json
        assert_eq!(name.len(), "Pose_2024-01-01_00-00-00.json".len());

        let path = default_path(Path::new("/tmp"), "png");
        assert_eq!(path.parent(), Some(Path::new("/tmp")));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
    }

    #[test]
    fn test_encode_is_utf8_json_text() {
        let json = encode(&presets::HIGH_KICK_POSE).unwrap();
        assert!(json.contains("\"right_upper_leg\": 150.0"));
        assert!(!json.contains('\u{FFFD}'));
        assert_eq!(decode(&json).unwrap(), presets::HIGH_KICK_POSE);
    }
}
