//! Stable ray-sphere intersection contract for external cross-validation.
//!
//! A fixed-point hardware implementation of the intersection test is
//! verified against this module. Both sides take the same raw inputs
//! (ray origin, ray direction, sphere center, squared radius), report a hit
//! flag and a distance `t`, and must agree on the flag and on `t` to within
//! [`HARDWARE_TOLERANCE`].
//!
//! The software side solves the general quadratic without normalizing the
//! direction, discards roots at or below [`crate::EPSILON`], and prefers the nearer
//! root. For a unit direction this is the same answer
//! [`crate::Sphere::intersect`] gives.
//!
//! Hardware inputs are Q16.16 signed fixed point. [`IntersectionQuery::quantized`]
//! reproduces that input rounding so software and hardware see the same numbers.

use prism_math::{Ray, Vec3};

use crate::{IntersectionForm, Quadratic, Sphere};

/// Fractional bits of the Q16.16 format.
pub const FRAC_BITS: u32 = 16;

const Q16_SCALE: f64 = (1u32 << FRAC_BITS) as f64;

/// Maximum `|t_hw - t_sw|` for two results to agree.
pub const HARDWARE_TOLERANCE: f64 = 0.01;

/// Convert to Q16.16, truncating toward zero and saturating at the i32 range.
#[inline]
pub fn to_q16_16(value: f64) -> i32 {
    (value * Q16_SCALE) as i32
}

/// Convert from Q16.16.
#[inline]
pub fn from_q16_16(value: i32) -> f64 {
    value as f64 / Q16_SCALE
}

fn quantize(value: f64) -> f64 {
    from_q16_16(to_q16_16(value))
}

fn quantize_vec(v: Vec3) -> Vec3 {
    Vec3::new(quantize(v.x), quantize(v.y), quantize(v.z))
}

/// Raw inputs of one intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionQuery {
    pub origin: Vec3,
    /// Not required to be unit length
    pub direction: Vec3,
    pub center: Vec3,
    pub radius_squared: f64,
}

impl IntersectionQuery {
    pub fn new(origin: Vec3, direction: Vec3, center: Vec3, radius: f64) -> Self {
        Self {
            origin,
            direction,
            center,
            radius_squared: radius * radius,
        }
    }

    /// The query a renderer issues when testing `ray` against `sphere`.
    pub fn from_ray(ray: &Ray, sphere: &Sphere) -> Self {
        Self::new(ray.origin(), ray.direction(), sphere.center(), sphere.radius())
    }

    /// The same query after every input has passed through Q16.16.
    ///
    /// The squared radius is quantized as a whole, matching the hardware's
    /// `r^2` input port.
    pub fn quantized(&self) -> Self {
        Self {
            origin: quantize_vec(self.origin),
            direction: quantize_vec(self.direction),
            center: quantize_vec(self.center),
            radius_squared: quantize(self.radius_squared),
        }
    }

    /// Software reference result.
    pub fn evaluate(&self) -> IntersectionResult {
        Quadratic::solve(
            self.origin,
            self.direction,
            self.center,
            self.radius_squared,
            IntersectionForm::General,
        )
        .nearest()
        .into()
    }
}

/// Outcome of one intersection test. `t` is meaningful only when `hit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionResult {
    pub hit: bool,
    pub t: f64,
}

impl IntersectionResult {
    pub const MISS: IntersectionResult = IntersectionResult { hit: false, t: 0.0 };

    pub fn hit(t: f64) -> Self {
        Self { hit: true, t }
    }

    /// Same hit flag, and for hits, distances within `tolerance`.
    pub fn agrees_with(&self, other: &IntersectionResult, tolerance: f64) -> bool {
        match (self.hit, other.hit) {
            (true, true) => (self.t - other.t).abs() < tolerance,
            (false, false) => true,
            _ => false,
        }
    }
}

impl From<Option<f64>> for IntersectionResult {
    fn from(t: Option<f64>) -> Self {
        t.map_or(Self::MISS, Self::hit)
    }
}

/// Convert a hardware `(hit, t)` pair in Q16.16 to a result.
pub fn result_from_q16_16(hit: bool, t: i32) -> IntersectionResult {
    if hit {
        IntersectionResult::hit(from_q16_16(t))
    } else {
        IntersectionResult::MISS
    }
}
