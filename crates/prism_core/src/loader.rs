//! JSON scene loading.
//!
//! A scene file is a JSON object with the same shape as [`SceneDesc`]:
//!
//! ```json
//! {
//!   "background": [0.1, 0.1, 0.15],
//!   "camera": { "position": [0, 1, 5], "target": [0, 0, 0], "fov": 60 },
//!   "spheres": [
//!     { "center": [0, 0, 0], "radius": 1,
//!       "material": { "color": [1, 0.2, 0.2], "reflectivity": 0.4 } }
//!   ],
//!   "lights": [ { "position": [-5, 5, 5], "intensity": 0.8 } ]
//! }
//! ```
//!
//! Missing fields take the defaults of the description types. Values are not
//! validated here; the renderer rejects bad geometry when it builds a scene.

use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDesc;

/// Errors that can occur while obtaining a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene description from a JSON file.
///
/// If the file does not name the scene, the file stem is used.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDesc> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&text)?;

    if scene.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            scene.name = stem.to_string_lossy().into_owned();
        }
    }

    log::info!(
        "Loaded scene '{}' from {}: {} spheres, {} lights",
        scene.name,
        path.display(),
        scene.spheres.len(),
        scene.lights.len()
    );

    Ok(scene)
}

/// Parse a scene description from a JSON string.
pub fn load_scene_from_str(json: &str) -> LoadResult<SceneDesc> {
    Ok(serde_json::from_str(json)?)
}
