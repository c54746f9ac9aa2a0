//! Phong surface material.

use prism_core::MaterialDesc;
use prism_math::{Interval, Vec3};

use crate::SceneError;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Surface reflectance coefficients for Phong shading.
///
/// Constructed only through [`Material::new`], which rejects values that
/// would make the shading undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    color: Color,
    ambient: f64,
    diffuse: f64,
    specular: f64,
    shininess: f64,
    reflectivity: f64,
}

impl Material {
    /// Create a new material.
    ///
    /// - `ambient`, `diffuse`, `specular`: non-negative weights, normally in [0, 1]
    /// - `shininess`: specular exponent, > 0
    /// - `reflectivity`: mirror weight in [0, 1]
    pub fn new(
        color: Color,
        ambient: f64,
        diffuse: f64,
        specular: f64,
        shininess: f64,
        reflectivity: f64,
    ) -> Result<Self, SceneError> {
        check_coefficient("ambient", ambient)?;
        check_coefficient("diffuse", diffuse)?;
        check_coefficient("specular", specular)?;

        if !(shininess > 0.0 && shininess.is_finite()) {
            return Err(SceneError::InvalidShininess(shininess));
        }
        if !Interval::UNIT.contains(reflectivity) {
            return Err(SceneError::InvalidReflectivity(reflectivity));
        }

        Ok(Self {
            color,
            ambient,
            diffuse,
            specular,
            shininess,
            reflectivity,
        })
    }

    /// Build a validated material from its description.
    pub fn from_desc(desc: &MaterialDesc) -> Result<Self, SceneError> {
        Self::new(
            desc.color,
            desc.ambient,
            desc.diffuse,
            desc.specular,
            desc.shininess,
            desc.reflectivity,
        )
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    #[inline]
    pub fn diffuse(&self) -> f64 {
        self.diffuse
    }

    #[inline]
    pub fn specular(&self) -> f64 {
        self.specular
    }

    #[inline]
    pub fn shininess(&self) -> f64 {
        self.shininess
    }

    #[inline]
    pub fn reflectivity(&self) -> f64 {
        self.reflectivity
    }

    /// Ambient term: `color * ambient`.
    #[inline]
    pub fn ambient_term(&self) -> Color {
        self.color * self.ambient
    }
}

fn check_coefficient(name: &'static str, value: f64) -> Result<(), SceneError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::InvalidCoefficient { name, value })
    }
}
