//! Error types for scene construction and rendering.

use thiserror::Error;

/// A scene parameter that would produce undefined shading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Invalid radius {0}: must be positive and finite")]
    InvalidRadius(f64),

    #[error("Invalid reflectivity {0}: must be within [0, 1]")]
    InvalidReflectivity(f64),

    #[error("Invalid {name} coefficient {value}: must be non-negative and finite")]
    InvalidCoefficient { name: &'static str, value: f64 },

    #[error("Invalid shininess {0}: must be positive and finite")]
    InvalidShininess(f64),

    #[error("Invalid light intensity {0}: must be non-negative and finite")]
    NegativeIntensity(f64),

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Sphere {index}: {source}")]
    Sphere {
        index: usize,
        #[source]
        source: Box<SceneError>,
    },

    #[error("Light {index}: {source}")]
    Light {
        index: usize,
        #[source]
        source: Box<SceneError>,
    },
}

/// Errors from [`crate::render_with`].
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Frame size {width}x{height} has no pixels")]
    EmptyFrame { width: u32, height: u32 },

    #[error("Thread count must be at least 1")]
    InvalidThreadCount,

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
