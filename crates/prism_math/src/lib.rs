//! Math types for the Prism ray tracer.
//!
//! All geometry is double precision. `Vec3` is glam's `DVec3`; colors reuse
//! the same type with channels in `[0, 1]`.

pub use glam::DVec3 as Vec3;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// Reflect `v` about the normal `n`.
///
/// `n` must be unit length: `v - 2 (v . n) n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Normalize `v`, returning the zero vector when `v` has zero length.
///
/// Callers must not rely on this to detect degenerate input.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(normalize(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(normalize(Vec3::new(0.0, 0.0, 2.0)), Vec3::Z);
    }

    #[test]
    fn test_reflect() {
        // Straight down onto a floor bounces straight up
        assert_eq!(reflect(-Vec3::Y, Vec3::Y), Vec3::Y);

        // 45 degrees in, 45 degrees out
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));

        // Tangent vectors are untouched
        assert_eq!(reflect(Vec3::X, Vec3::Y), Vec3::X);
    }
}
