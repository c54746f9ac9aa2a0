//! Point lights.

use prism_core::LightDesc;
use prism_math::Vec3;

use crate::{Color, SceneError};

/// A point light with a color and a scalar intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    position: Vec3,
    color: Color,
    intensity: f64,
}

impl Light {
    /// Create a new light. The intensity must be non-negative.
    pub fn new(position: Vec3, color: Color, intensity: f64) -> Result<Self, SceneError> {
        if !(intensity >= 0.0 && intensity.is_finite()) {
            return Err(SceneError::NegativeIntensity(intensity));
        }

        Ok(Self {
            position,
            color,
            intensity,
        })
    }

    /// Build a validated light from its description.
    pub fn from_desc(desc: &LightDesc) -> Result<Self, SceneError> {
        Self::new(desc.position, desc.color, desc.intensity)
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }
}
