//! Scene file loading.
//!
//! Scenes are stored as JSON. Loading parses the file and validates the
//! result, so a scene returned from here is safe to hand to the renderer.

use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let scene = load_scene_from_str(&content)?;

    log::info!(
        "Loaded scene {}: {} objects, {} lights, {}x{}",
        path.display(),
        scene.objects.len(),
        scene.lights.len(),
        scene.config.width,
        scene.config.height
    );

    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(content: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(content)?;
    scene.validate()?;
    Ok(scene)
}
