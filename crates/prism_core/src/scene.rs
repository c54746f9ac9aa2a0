//! Scene description types for Prism.
//!
//! A `SceneDesc` is the declarative form of a scene: ordered spheres, ordered
//! lights, a background color and a camera. Presets and JSON files both
//! produce one; the renderer validates it when building its runtime scene.

use prism_math::Vec3;
use serde::{Deserialize, Serialize};

/// Phong surface coefficients.
///
/// Field defaults match a slightly reflective white plastic.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDesc {
    /// Base color (RGB, 0-1)
    pub color: Vec3,

    /// Ambient coefficient
    pub ambient: f64,

    /// Lambertian diffuse coefficient
    pub diffuse: f64,

    /// Specular highlight coefficient
    pub specular: f64,

    /// Specular exponent (> 0)
    pub shininess: f64,

    /// Mirror reflectivity (0 = matte, 1 = perfect mirror)
    pub reflectivity: f64,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            ambient: 0.1,
            diffuse: 0.7,
            specular: 0.6,
            shininess: 32.0,
            reflectivity: 0.3,
        }
    }
}

impl MaterialDesc {
    /// Create a material from a color and all five coefficients, in the order
    /// ambient, diffuse, specular, shininess, reflectivity.
    pub const fn new(
        color: Vec3,
        ambient: f64,
        diffuse: f64,
        specular: f64,
        shininess: f64,
        reflectivity: f64,
    ) -> Self {
        Self {
            color,
            ambient,
            diffuse,
            specular,
            shininess,
            reflectivity,
        }
    }
}

/// A sphere with its own material.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Vec3,
    pub radius: f64,
    #[serde(default)]
    pub material: MaterialDesc,
}

impl SphereDesc {
    pub const fn new(center: Vec3, radius: f64, material: MaterialDesc) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDesc {
    pub position: Vec3,
    #[serde(default = "default_light_color")]
    pub color: Vec3,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

impl LightDesc {
    pub const fn new(position: Vec3, color: Vec3, intensity: f64) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }
}

fn default_light_color() -> Vec3 {
    Vec3::ONE
}

fn default_intensity() -> f64 {
    1.0
}

/// Pinhole camera placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDesc {
    /// Eye position
    pub position: Vec3,

    /// Point the camera looks at
    pub target: Vec3,

    /// Approximate up direction
    pub up: Vec3,

    /// Vertical field of view in degrees
    pub fov: f64,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 60.0,
        }
    }
}

/// A complete scene description.
///
/// Sphere and light order is preserved; it decides closest-hit ties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDesc {
    /// Display name (preset name or file stem)
    #[serde(default)]
    pub name: String,

    /// Color returned for rays that escape the scene
    #[serde(default = "default_background")]
    pub background: Vec3,

    #[serde(default)]
    pub camera: CameraDesc,

    #[serde(default)]
    pub spheres: Vec<SphereDesc>,

    #[serde(default)]
    pub lights: Vec<LightDesc>,
}

/// Dark blue-grey used when a scene does not specify a background.
pub const DEFAULT_BACKGROUND: Vec3 = Vec3::new(0.1, 0.1, 0.15);

fn default_background() -> Vec3 {
    DEFAULT_BACKGROUND
}

impl Default for SceneDesc {
    fn default() -> Self {
        Self {
            name: String::new(),
            background: DEFAULT_BACKGROUND,
            camera: CameraDesc::default(),
            spheres: Vec::new(),
            lights: Vec::new(),
        }
    }
}

impl SceneDesc {
    /// Create an empty scene with the default background and camera.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a sphere (builder style).
    pub fn with_sphere(mut self, sphere: SphereDesc) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Append a light (builder style).
    pub fn with_light(mut self, light: LightDesc) -> Self {
        self.lights.push(light);
        self
    }

    /// Replace the camera (builder style).
    pub fn with_camera(mut self, camera: CameraDesc) -> Self {
        self.camera = camera;
        self
    }

    /// Replace the background color (builder style).
    pub fn with_background(mut self, background: Vec3) -> Self {
        self.background = background;
        self
    }
}
