//! Pinhole camera for primary ray generation.

use prism_core::CameraDesc;
use prism_math::{normalize, Ray, Vec3};

use crate::SceneError;

/// Pinhole camera looking from `position` toward `target`.
///
/// The orthonormal basis is computed once at construction:
/// `w` points backwards (from target to eye), `u` to the right, `v` up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    fov: f64, // Vertical field of view in degrees

    // Cached basis and viewport half-height (tan(fov / 2))
    u: Vec3,
    v: Vec3,
    w: Vec3,
    half_height: f64,
}

impl Camera {
    /// Create a camera. Fails if the field of view is outside (0, 180)
    /// degrees, or if the position, target and up vector do not define a
    /// basis.
    pub fn new(position: Vec3, target: Vec3, up: Vec3, fov: f64) -> Result<Self, SceneError> {
        if !(fov > 0.0 && fov < 180.0) {
            return Err(SceneError::InvalidCamera(format!(
                "field of view {fov} must be within (0, 180) degrees"
            )));
        }

        let w = normalize(position - target);
        if w == Vec3::ZERO {
            return Err(SceneError::InvalidCamera(
                "position and target coincide".to_string(),
            ));
        }

        let u = normalize(up.cross(w));
        if u == Vec3::ZERO {
            return Err(SceneError::InvalidCamera(
                "up vector is parallel to the view direction".to_string(),
            ));
        }
        let v = w.cross(u);

        Ok(Self {
            position,
            target,
            up,
            fov,
            u,
            v,
            w,
            half_height: (fov.to_radians() / 2.0).tan(),
        })
    }

    /// Camera with a +Y up vector and a 60 degree field of view.
    pub fn look_at(position: Vec3, target: Vec3) -> Result<Self, SceneError> {
        Self::new(position, target, Vec3::Y, 60.0)
    }

    /// Build a validated camera from its description.
    pub fn from_desc(desc: &CameraDesc) -> Result<Self, SceneError> {
        Self::new(desc.position, desc.target, desc.up, desc.fov)
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    #[inline]
    pub fn fov(&self) -> f64 {
        self.fov
    }

    /// Primary ray through normalized image coordinates `(s, t)`.
    ///
    /// `s = 0` is the left edge and `s = 1` the right; `t = 0` is the bottom
    /// and `t = 1` the top. The viewport sits one unit in front of the eye
    /// and is `aspect_ratio` times wider than it is tall.
    pub fn get_ray(&self, s: f64, t: f64, aspect_ratio: f64) -> Ray {
        let viewport_height = 2.0 * self.half_height;
        let viewport_width = aspect_ratio * viewport_height;

        let horizontal = self.u * viewport_width;
        let vertical = self.v * viewport_height;
        let lower_left = self.position - horizontal / 2.0 - vertical / 2.0 - self.w;

        let direction = lower_left + horizontal * s + vertical * t - self.position;
        Ray::new(self.position, direction)
    }
}
