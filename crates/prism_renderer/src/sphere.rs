//! Sphere primitive and analytic ray-sphere intersection.

use prism_core::SphereDesc;
use prism_math::{normalize, Interval, Ray, Vec3};

use crate::{Material, SceneError};

/// Minimum accepted ray parameter.
///
/// Roots at or below this distance are treated as the surface the ray was
/// cast from, which keeps shadow and reflection rays from hitting their own
/// origin.
pub const EPSILON: f64 = 0.001;

/// Which algebraic form of the ray-sphere quadratic to solve.
///
/// Both forms select the same root and agree to within rounding for any ray
/// with a unit direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntersectionForm {
    /// `a t^2 + b t + c = 0` with `a = d . d` and `b = 2 (o - c) . d`.
    General,
    /// Half-b form assuming `a = 1`: discriminant `b_half^2 - c`.
    #[default]
    HalfB,
}

/// A solved ray-sphere quadratic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    /// Discriminant of the chosen form. The general form's value is four
    /// times the half-b value for a unit direction.
    pub discriminant: f64,
    /// Smaller and larger root, or `None` if the discriminant is negative.
    pub roots: Option<(f64, f64)>,
}

impl Quadratic {
    /// Solve for a ray `origin + t * direction` against a sphere given by its
    /// center and squared radius.
    ///
    /// `HalfB` assumes `direction` is unit length; `General` does not.
    pub fn solve(
        origin: Vec3,
        direction: Vec3,
        center: Vec3,
        radius_squared: f64,
        form: IntersectionForm,
    ) -> Self {
        let oc = origin - center;
        let c = oc.length_squared() - radius_squared;

        match form {
            IntersectionForm::General => {
                let a = direction.length_squared();
                let b = 2.0 * oc.dot(direction);
                let discriminant = b * b - 4.0 * a * c;
                let roots = (discriminant >= 0.0).then(|| {
                    let sqrt_disc = discriminant.sqrt();
                    ((-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a))
                });
                Self {
                    discriminant,
                    roots,
                }
            }
            IntersectionForm::HalfB => {
                let b_half = oc.dot(direction);
                let discriminant = b_half * b_half - c;
                let roots = (discriminant >= 0.0).then(|| {
                    let sqrt_disc = discriminant.sqrt();
                    (-b_half - sqrt_disc, -b_half + sqrt_disc)
                });
                Self {
                    discriminant,
                    roots,
                }
            }
        }
    }

    /// The root a ray should report: the smaller one if it lies beyond
    /// [`EPSILON`], otherwise the larger one if it does.
    ///
    /// From inside the sphere this is the exit point.
    pub fn nearest(&self) -> Option<f64> {
        let (near, far) = self.roots?;
        let valid = Interval::above(EPSILON);

        if valid.surrounds(near) {
            Some(near)
        } else if valid.surrounds(far) {
            Some(far)
        } else {
            None
        }
    }
}

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    radius_squared: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f64, material: Material) -> Result<Self, SceneError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            radius_squared: radius * radius,
            material,
        })
    }

    /// Build a validated sphere from its description.
    pub fn from_desc(desc: &SphereDesc) -> Result<Self, SceneError> {
        let material = Material::from_desc(&desc.material)?;
        Self::new(desc.center, desc.radius, material)
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Distance along `ray` to this sphere, using the half-b form.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        self.intersect_with(ray, IntersectionForm::HalfB)
    }

    /// Distance along `ray` to this sphere, using the given form.
    pub fn intersect_with(&self, ray: &Ray, form: IntersectionForm) -> Option<f64> {
        Quadratic::solve(
            ray.origin(),
            ray.direction(),
            self.center,
            self.radius_squared,
            form,
        )
        .nearest()
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        normalize(point - self.center)
    }
}
