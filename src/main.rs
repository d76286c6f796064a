use std::path::PathBuf;

use anyhow::Context;

use stickpose::PoseEditor;
use stickpose::config::EditorConfig;
use stickpose::render::image as raster;
use stickpose::session::file;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = EditorConfig::load();
    let mut editor = PoseEditor::from_config(&config)?;

    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        // A bad pose file is logged by the editor and the default pose is
        // rendered instead
        let _ = editor.load_file(&path);
    }

    let scene = editor.render(config.canvas_width as f32, config.canvas_height as f32)?;
    let image = raster::draw_scene(
        &scene,
        config.canvas_width,
        config.canvas_height,
        &config.scene_style(),
    )?;

    let dir = config
        .save_location
        .dir()
        .context("Could not resolve a directory to save the render in")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output dir: {}", dir.display()))?;
    let path = file::default_path(&dir, "png");

    raster::save_png(&image, &path)?;
    println!("{}", path.display());
    Ok(())
}
