//! Prism Core - scene descriptions for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDesc`, `SphereDesc`, `LightDesc`,
//!   `MaterialDesc`, `CameraDesc`. These are plain data, deserializable from
//!   JSON, and carry no validation of their own.
//! - **Presets**: the named built-in scenes (`Preset`).
//! - **Loading**: `load_scene` reads a `SceneDesc` from a JSON file.
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{load_scene, Preset};
//!
//! let gallery = Preset::MirrorGallery.scene();
//! let custom = load_scene("scenes/custom.json")?;
//! println!("{} spheres, {} lights", custom.spheres.len(), custom.lights.len());
//! ```

pub mod loader;
pub mod preset;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError};
pub use preset::Preset;
pub use scene::{CameraDesc, LightDesc, MaterialDesc, SceneDesc, SphereDesc};
