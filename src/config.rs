//! Configuration persistence for editor settings

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::render::image::SceneStyle;

/// Serializable color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl PartColor {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// #DDDDDD
    pub const GRID: Self = Self::rgb(221.0 / 255.0, 221.0 / 255.0, 221.0 / 255.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert to RGBA bytes (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            255,
        ]
    }
}

/// Where exported renders go (Pictures or Documents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SaveLocation {
    #[default]
    Pictures,
    Documents,
}

impl SaveLocation {
    /// Resolve to a directory, falling back to `~/Pictures` / `~/Documents`
    pub fn dir(self) -> Option<PathBuf> {
        match self {
            SaveLocation::Pictures => {
                dirs::picture_dir().or_else(|| dirs::home_dir().map(|h| h.join("Pictures")))
            }
            SaveLocation::Documents => {
                dirs::document_dir().or_else(|| dirs::home_dir().map(|h| h.join("Documents")))
            }
        }
    }
}

/// Editor configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Multiplier applied to every skeleton length
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Canvas size used for headless renders
    #[serde(default = "default_canvas_extent")]
    pub canvas_width: u32,
    #[serde(default = "default_canvas_extent")]
    pub canvas_height: u32,
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: u32,
    #[serde(default = "default_black")]
    pub body_color: PartColor,
    #[serde(default = "default_upper_limb_color")]
    pub upper_limb_color: PartColor,
    #[serde(default = "default_lower_limb_color")]
    pub lower_limb_color: PartColor,
    #[serde(default = "default_black")]
    pub joint_color: PartColor,
    #[serde(default = "default_background_color")]
    pub background_color: PartColor,
    #[serde(default = "default_grid_color")]
    pub grid_color: PartColor,
    #[serde(default)]
    pub save_location: SaveLocation,
}

fn default_scale() -> f32 {
    3.0
}

fn default_canvas_extent() -> u32 {
    600
}

fn default_show_grid() -> bool {
    true
}

fn default_grid_spacing() -> u32 {
    50
}

fn default_black() -> PartColor {
    PartColor::BLACK
}

fn default_upper_limb_color() -> PartColor {
    PartColor::BLUE
}

fn default_lower_limb_color() -> PartColor {
    PartColor::RED
}

fn default_background_color() -> PartColor {
    PartColor::WHITE
}

fn default_grid_color() -> PartColor {
    PartColor::GRID
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            canvas_width: default_canvas_extent(),
            canvas_height: default_canvas_extent(),
            show_grid: default_show_grid(),
            grid_spacing: default_grid_spacing(),
            body_color: default_black(),
            upper_limb_color: default_upper_limb_color(),
            lower_limb_color: default_lower_limb_color(),
            joint_color: default_black(),
            background_color: default_background_color(),
            grid_color: default_grid_color(),
            save_location: SaveLocation::default(),
        }
    }
}

impl EditorConfig {
    /// Directory name under the platform config dir
    pub const ID: &'static str = "stickpose";

    /// Default config file path
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::ID).join("config.json"))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load from a specific file; a missing file silently yields defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::path().context("No config directory available")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Raster style derived from the configured colors
    pub fn scene_style(&self) -> SceneStyle {
        SceneStyle {
            background: self.background_color,
            body: self.body_color,
            head: self.body_color,
            upper_limb: self.upper_limb_color,
            lower_limb: self.lower_limb_color,
            joint: self.joint_color,
            grid: self.grid_color,
            grid_spacing: self.show_grid.then_some(self.grid_spacing),
        }
    }
}
