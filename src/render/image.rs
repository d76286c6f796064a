//! Raster output for render scenes using tiny-skia
//!
//! Draws a [`RenderScene`] onto an RgbaImage, optionally over the decorative
//! background grid, and encodes PNGs.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::geometry::{self, stroke};
use crate::config::PartColor;
use crate::domain::{BodyPart, Primitive, RenderScene};

/// Colors and grid settings used when rasterizing a scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStyle {
    pub background: PartColor,
    pub body: PartColor,
    pub head: PartColor,
    pub upper_limb: PartColor,
    pub lower_limb: PartColor,
    pub joint: PartColor,
    pub grid: PartColor,
    /// Grid spacing in pixels, or None to skip the grid
    pub grid_spacing: Option<u32>,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: PartColor::WHITE,
            body: PartColor::BLACK,
            head: PartColor::BLACK,
            upper_limb: PartColor::BLUE,
            lower_limb: PartColor::RED,
            joint: PartColor::BLACK,
            grid: PartColor::GRID,
            grid_spacing: Some(50),
        }
    }
}

impl SceneStyle {
    /// Stroke color for a segment's style tag
    pub fn color_for(&self, part: BodyPart) -> PartColor {
        if part.is_upper_limb() {
            self.upper_limb
        } else if part.is_lower_limb() {
            self.lower_limb
        } else if part == BodyPart::Head {
            self.head
        } else {
            self.body
        }
    }
}

fn solid_paint(color: PartColor, anti_alias: bool) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = anti_alias;
    paint
}

fn round_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

/// Draw the background grid, one-pixel lines aligned to pixel centers
fn draw_grid(pixmap: &mut Pixmap, color: PartColor, spacing: u32) {
    let (w, h) = (pixmap.width(), pixmap.height());
    let mut pb = PathBuilder::new();
    for x in geometry::grid_lines(w, spacing) {
        pb.move_to(x + 0.5, 0.0);
        pb.line_to(x + 0.5, h as f32);
    }
    for y in geometry::grid_lines(h, spacing) {
        pb.move_to(0.0, y + 0.5);
        pb.line_to(w as f32, y + 0.5);
    }
    let Some(path) = pb.finish() else {
        return;
    };

    let stroke = Stroke {
        width: stroke::GRID_WIDTH,
        ..Default::default()
    };
    pixmap.stroke_path(
        &path,
        &solid_paint(color, false),
        &stroke,
        Transform::identity(),
        None,
    );
}

/// Rasterize a scene onto a fresh `width` x `height` image
pub fn draw_scene(
    scene: &RenderScene,
    width: u32,
    height: u32,
    style: &SceneStyle,
) -> Result<RgbaImage> {
    let mut pixmap = Pixmap::new(width, height)
        .with_context(|| format!("Cannot allocate a {}x{} canvas", width, height))?;

    let [r, g, b, a] = style.background.to_rgba_u8();
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));

    if let Some(spacing) = style.grid_spacing {
        draw_grid(&mut pixmap, style.grid, spacing);
    }

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Segment(seg) => {
                let mut pb = PathBuilder::new();
                pb.move_to(seg.start.x, seg.start.y);
                pb.line_to(seg.end.x, seg.end.y);
                let Some(path) = pb.finish() else {
                    continue;
                };
                pixmap.stroke_path(
                    &path,
                    &solid_paint(style.color_for(seg.part), true),
                    &round_stroke(stroke::SEGMENT_WIDTH),
                    Transform::identity(),
                    None,
                );
            }
            Primitive::Head(head) => {
                let Some(path) = PathBuilder::from_circle(head.center.x, head.center.y, head.radius)
                else {
                    continue;
                };
                pixmap.stroke_path(
                    &path,
                    &solid_paint(style.head, true),
                    &round_stroke(stroke::HEAD_WIDTH),
                    Transform::identity(),
                    None,
                );
            }
            Primitive::Joint(joint) => {
                let Some(path) =
                    PathBuilder::from_circle(joint.center.x, joint.center.y, joint.radius)
                else {
                    continue;
                };
                pixmap.fill_path(
                    &path,
                    &solid_paint(style.joint, true),
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
        }
    }

    // Opaque background means premultiplied and straight alpha agree
    RgbaImage::from_raw(width, height, pixmap.take())
        .context("Pixmap size does not match image dimensions")
}

pub fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}

/// Encode `image` as PNG at `path`
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create image file: {}", path.display()))?;
    write_png(io::BufWriter::new(file), image)
        .with_context(|| format!("Failed to encode PNG: {}", path.display()))?;
    log::info!("Saved render to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_POSE;
    use crate::render::kinematics;

    fn is_dark(px: &image::Rgba<u8>) -> bool {
        px[0] < 80 && px[1] < 80 && px[2] < 80
    }

    fn default_image(style: &SceneStyle) -> RgbaImage {
        let scene = kinematics::compute(&DEFAULT_POSE, 600.0, 600.0, 3.0).unwrap();
        draw_scene(&scene, 600, 600, style).unwrap()
    }

    #[test]
    fn test_draws_body_and_head() {
        let img = default_image(&SceneStyle::default());
        assert_eq!(img.dimensions(), (600, 600));
        // Body runs from (300, 250) to (300, 400)
        assert!(is_dark(img.get_pixel(300, 320)));
        // Top of the head outline
        assert!(is_dark(img.get_pixel(300, 160)));
        // Inside the head is background
        assert_eq!(img.get_pixel(310, 215).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_grid_is_optional() {
        let with_grid = default_image(&SceneStyle::default());
        let px = with_grid.get_pixel(50, 10);
        assert_eq!(px.0, [221, 221, 221, 255]);

        let style = SceneStyle {
            grid_spacing: None,
            ..SceneStyle::default()
        };
        let without = default_image(&style);
        assert_eq!(without.get_pixel(50, 10).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_limb_colors() {
        let style = SceneStyle::default();
        assert_eq!(style.color_for(BodyPart::LeftUpperArm), PartColor::BLUE);
        assert_eq!(style.color_for(BodyPart::RightLowerLeg), PartColor::RED);
        assert_eq!(style.color_for(BodyPart::Body), PartColor::BLACK);
    }

    #[test]
    fn test_zero_size_fails() {
        let scene = RenderScene::default();
        assert!(draw_scene(&scene, 0, 10, &SceneStyle::default()).is_err());
    }

    #[test]
    fn test_save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pose.png");
        let img = default_image(&SceneStyle::default());
        save_png(&img, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
