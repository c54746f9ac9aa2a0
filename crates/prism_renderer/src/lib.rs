//! Prism Renderer - CPU ray tracing of spheres with Phong lighting.
//!
//! A Whitted-style tracer: closest-hit primary rays, hard shadows from point
//! lights, and up to [`MAX_DEPTH`] mirror bounces blended into the local
//! color. Rows are rendered in parallel with rayon.
//!
//! ```ignore
//! use prism_core::Preset;
//! use prism_renderer::{render, Camera, Scene};
//!
//! let desc = Preset::CandyLand.scene();
//! let scene = Scene::from_desc(&desc)?;
//! let camera = Camera::from_desc(&desc.camera)?;
//! let frame = render(&scene, &camera, 800, 600);
//! ```

mod camera;
pub mod contract;
mod error;
mod light;
mod material;
mod renderer;
mod scene;
mod sphere;

pub use camera::Camera;
pub use error::{RenderError, SceneError};
pub use light::Light;
pub use material::{Color, Material};
pub use renderer::{
    color_to_argb, render, render_with, FrameBuffer, RenderConfig, RenderOutput, RenderStats,
};
pub use scene::{blend, Hit, Scene, ShadowQuery, TraceOptions, MAX_DEPTH};
pub use sphere::{IntersectionForm, Quadratic, Sphere, EPSILON};

/// Re-export the math types used throughout the public API.
pub use prism_math::{Interval, Ray, Vec3};
