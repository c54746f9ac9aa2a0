//! Scene container, visibility queries and recursive Phong shading.

use prism_core::SceneDesc;
use prism_math::{normalize, reflect, Interval, Ray};

use crate::{Color, IntersectionForm, Light, SceneError, Sphere, EPSILON};

/// Deepest recursion level that still shades a hit.
///
/// Reflection rays are spawned at depths 0, 1 and 2, so a primary ray sees
/// at most 3 mirror bounces. A call made with `depth > MAX_DEPTH` returns
/// the background.
pub const MAX_DEPTH: u32 = 3;

/// How shadow rays search for occluders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShadowQuery {
    /// Stop at the first sphere between the point and the light.
    #[default]
    AnyHit,
    /// Find the nearest hit, then compare it to the light distance.
    ClosestHit,
}

/// Strategy choices for [`Scene::trace_with`]. Every combination renders
/// the same image; they differ only in cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceOptions {
    pub intersection: IntersectionForm,
    pub shadows: ShadowQuery,
}

/// Result of a closest-hit query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter of the intersection
    pub t: f64,
    /// Index of the sphere in insertion order
    pub index: usize,
}

/// An immutable collection of spheres and lights.
///
/// A scene is only read while rendering, so one instance is shared by
/// reference across all worker threads.
#[derive(Debug, Clone)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    background: Color,
}

impl Scene {
    /// Create an empty scene with the given background color.
    pub fn new(background: Color) -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            background,
        }
    }

    /// Build a scene from a description, validating every sphere and light.
    pub fn from_desc(desc: &SceneDesc) -> Result<Self, SceneError> {
        let mut scene = Self::new(desc.background);

        for (index, sphere) in desc.spheres.iter().enumerate() {
            let sphere = Sphere::from_desc(sphere).map_err(|e| SceneError::Sphere {
                index,
                source: Box::new(e),
            })?;
            scene.add_sphere(sphere);
        }

        for (index, light) in desc.lights.iter().enumerate() {
            let light = Light::from_desc(light).map_err(|e| SceneError::Light {
                index,
                source: Box::new(e),
            })?;
            scene.add_light(light);
        }

        if scene.lights.is_empty() {
            log::warn!(
                "Scene '{}' has no lights; only ambient terms will be visible",
                desc.name
            );
        }
        log::info!(
            "Built scene '{}': {} spheres, {} lights",
            desc.name,
            scene.spheres.len(),
            scene.lights.len()
        );

        Ok(scene)
    }

    /// Append a sphere. Earlier spheres win exact closest-hit ties.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Append a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Find the nearest sphere hit by `ray`.
    ///
    /// Uses a strict `<` comparison, so on an exact tie in `t` the sphere
    /// inserted first is reported.
    pub fn closest_hit(&self, ray: &Ray, form: IntersectionForm) -> Option<Hit> {
        let mut closest: Option<Hit> = None;

        for (index, sphere) in self.spheres.iter().enumerate() {
            if let Some(t) = sphere.intersect_with(ray, form) {
                if closest.map_or(true, |hit| t < hit.t) {
                    closest = Some(Hit { t, index });
                }
            }
        }

        closest
    }

    /// True if any sphere crosses `ray` strictly between [`EPSILON`] and
    /// `max_distance`.
    pub fn occluded(&self, ray: &Ray, max_distance: f64, options: TraceOptions) -> bool {
        let between = Interval::new(EPSILON, max_distance);

        match options.shadows {
            ShadowQuery::AnyHit => self.spheres.iter().any(|sphere| {
                sphere
                    .intersect_with(ray, options.intersection)
                    .is_some_and(|t| between.surrounds(t))
            }),
            ShadowQuery::ClosestHit => self
                .closest_hit(ray, options.intersection)
                .is_some_and(|hit| between.surrounds(hit.t)),
        }
    }

    /// Color seen along `ray`, using the default strategies.
    ///
    /// `depth` is the number of reflections already taken; pass 0 for a
    /// primary ray. The result is not clamped.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        self.trace_with(ray, depth, TraceOptions::default())
    }

    /// Color seen along `ray` with explicit strategy choices.
    pub fn trace_with(&self, ray: &Ray, depth: u32, options: TraceOptions) -> Color {
        if depth > MAX_DEPTH {
            return self.background;
        }

        let Some(hit) = self.closest_hit(ray, options.intersection) else {
            return self.background;
        };

        let sphere = &self.spheres[hit.index];
        let material = sphere.material();
        let point = ray.at(hit.t);
        let normal = sphere.normal_at(point);
        let view_dir = normalize(ray.origin() - point);

        let mut color = material.ambient_term();

        for light in &self.lights {
            let to_light = light.position() - point;
            let light_dir = normalize(to_light);
            let light_distance = to_light.length();

            let shadow_ray = Ray::new(point, light_dir);
            if self.occluded(&shadow_ray, light_distance, options) {
                continue;
            }

            let diff = normal.dot(light_dir).max(0.0);
            let diffuse = material.color() * material.diffuse() * diff * light.intensity();

            let reflect_dir = reflect(-light_dir, normal);
            let spec = view_dir.dot(reflect_dir).max(0.0).powf(material.shininess());
            let specular = light.color() * material.specular() * spec * light.intensity();

            color += diffuse + specular;
        }

        let k = material.reflectivity();
        if k > 0.0 && depth < MAX_DEPTH {
            let reflect_ray = Ray::new(point, reflect(-view_dir, normal));
            let reflected = self.trace_with(&reflect_ray, depth + 1, options);
            color = blend(color, reflected, k);
        }

        color
    }
}

/// Energy-conserving mix of local and reflected color: `local (1 - k) + reflected k`.
///
/// For `k` in [0, 1] each channel stays between the two inputs.
#[inline]
pub fn blend(local: Color, reflected: Color, k: f64) -> Color {
    local * (1.0 - k) + reflected * k
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;
    use prism_core::Preset;
    use prism_math::Vec3;

    const BACKGROUND: Color = Color::new(0.1, 0.1, 0.15);

    fn matte(color: Color) -> Material {
        Material::new(color, 0.1, 0.7, 0.0, 32.0, 0.0).unwrap()
    }

    fn sphere(center: Vec3, radius: f64, material: Material) -> Sphere {
        Sphere::new(center, radius, material).unwrap()
    }

    fn all_options() -> Vec<TraceOptions> {
        let mut options = Vec::new();
        for intersection in [IntersectionForm::General, IntersectionForm::HalfB] {
            for shadows in [ShadowQuery::AnyHit, ShadowQuery::ClosestHit] {
                options.push(TraceOptions {
                    intersection,
                    shadows,
                });
            }
        }
        options
    }

    #[test]
    fn test_closest_hit_picks_nearest() {
        let mut scene = Scene::new(BACKGROUND);
        scene.add_sphere(sphere(Vec3::new(0.0, 0.0, -10.0), 1.0, matte(Color::X)));
        scene.add_sphere(sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, matte(Color::Y)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.closest_hit(&ray, IntersectionForm::HalfB).unwrap();
        assert_eq!(hit.index, 1);
        assert!((hit.t - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_closest_hit_tie_goes_to_first_inserted() {
        let mut scene = Scene::new(BACKGROUND);
        scene.add_sphere(sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, matte(Color::X)));
        scene.add_sphere(sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, matte(Color::Y)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        for form in [IntersectionForm::General, IntersectionForm::HalfB] {
            assert_eq!(scene.closest_hit(&ray, form).unwrap().index, 0);
        }
    }

    #[test]
    fn test_closest_hit_miss() {
        let mut scene = Scene::new(BACKGROUND);
        scene.add_sphere(sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, matte(Color::X)));

        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(scene.closest_hit(&ray, IntersectionForm::HalfB), None);
    }

    #[test]
    fn test_occluded_respects_light_distance() {
        let mut scene = Scene::new(BACKGROUND);
        scene.add_sphere(sphere(Vec3::new(0.0, 5.0, 0.0), 1.0, matte(Color::ONE)));

        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        for options in all_options() {
            // Blocker at t = 4 sits between the point and a light at distance 10
            assert!(scene.occluded(&ray, 10.0, options));
            // Light closer than the blocker
            assert!(!scene.occluded(&ray, 3.0, options));
            // Light exactly at the blocker surface is not shadowed by it
            assert!(!scene.occluded(&ray, 4.0, options));
        }
    }

    #[test]
    fn test_shadow_strategies_agree() {
        let desc = Preset::MirrorGallery.scene();
        let scene = Scene::from_desc(&desc).unwrap();

        // Shadow rays from a grid of points toward every light
        for x in -6..=6 {
            for z in -6..=6 {
                let point = Vec3::new(x as f64 * 0.5, -0.999, z as f64 * 0.5);
                for light in scene.lights() {
                    let to_light = light.position() - point;
                    let ray = Ray::new(point, to_light);
                    let distance = to_light.length();
                    let any = scene.occluded(&ray, distance, TraceOptions::default());
                    let closest = scene.occluded(
                        &ray,
                        distance,
                        TraceOptions {
                            shadows: ShadowQuery::ClosestHit,
                            ..Default::default()
                        },
                    );
                    assert_eq!(any, closest, "point {point:?}");
                }
            }
        }
    }

    #[test]
    fn test_trace_miss_returns_background_at_any_depth() {
        let mut scene = Scene::new(BACKGROUND);
        scene.add_sphere(sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, matte(Color::ONE)));
        scene.add_light(Light::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE, 1.0).unwrap());

        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        for depth in 0..=MAX_DEPTH + 3 {
            assert_eq!(scene.trace(&ray, depth), BACKGROUND);
        }
    }

    #[test]
    fn test_trace_beyond_max_depth_returns_background() {
        let mut scene = Scene::new(BACKGROUND);
        scene.add_sphere(sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, matte(Color::ONE)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_ne!(scene.trace(&ray, MAX_DEPTH), BACKGROUND);
        assert_eq!(scene.trace(&ray, MAX_DEPTH + 1), BACKGROUND);
    }

    #[test]
    fn test_lit_sphere_phong_terms() {
        // Light directly behind the camera: n.l = 1 and the view vector lines
        // up with the reflected light vector, so spec = 1.
        let material =
            Material::new(Color::new(1.0, 0.5, 0.25), 0.1, 0.5, 0.2, 8.0, 0.0).unwrap();
        let mut scene = Scene::new(BACKGROUND);
        scene.add_sphere(sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, material));
        scene.add_light(Light::new(Vec3::new(0.0, 0.0, 10.0), Color::ONE, 0.5).unwrap());

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = scene.trace(&ray, 0);

        let base = Color::new(1.0, 0.5, 0.25);
        let expected = base * 0.1 + base * 0.5 * 0.5 + Color::ONE * 0.2 * 0.5;
        assert!((color - expected).length() < 1e-9, "{color:?} vs {expected:?}");
    }

    #[test]
    fn test_shadowed_point_gets_only_ambient() {
        let mut scene = Scene::new(BACKGROUND);
        // Target sphere, and a blocker between it and the light
        scene.add_sphere(sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, matte(Color::ONE)));
        scene.add_sphere(sphere(Vec3::new(0.0, 0.0, 2.0), 0.5, matte(Color::ONE)));
        scene.add_light(Light::new(Vec3::new(0.0, 0.0, 10.0), Color::ONE, 1.0).unwrap());

        let ray = Ray::new(Vec3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, -1.0));
        for options in all_options() {
            let color = scene.trace_with(&ray, 0, options);
            assert!((color - Color::splat(0.1)).length() < 1e-12);
        }
    }

    #[test]
    fn test_from_desc_without_lights_keeps_ambient() {
        let _ = env_logger::builder().is_test(true).try_init();

        let json = r#"{ "spheres": [ { "center": [0, 0, -5], "radius": 1 } ] }"#;
        let desc = prism_core::load_scene_from_str(json).unwrap();
        let scene = Scene::from_desc(&desc).unwrap();
        assert!(scene.lights().is_empty());

        // Default material: white, ambient 0.1
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = scene.trace(&ray, 0);
        let expected = blend(Color::splat(0.1), BACKGROUND, 0.3);
        assert!((color - expected).length() < 1e-12, "{color:?}");
    }

    #[test]
    fn test_mirror_enclosure_terminates_at_depth_bound() {
        // Camera inside a perfect mirror: every ray bounces forever unless the
        // recursion is cut. With k = 1 every level returns the same color, so
        // this only shows termination; the bounce count is pinned below.
        let mirror = Material::new(Color::new(0.0, 0.5, 0.0), 1.0, 0.0, 0.0, 1.0, 1.0).unwrap();
        let mut scene = Scene::new(Color::new(1.0, 0.0, 0.0));
        scene.add_sphere(sphere(Vec3::ZERO, 10.0, mirror));
        scene.add_light(Light::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE, 1.0).unwrap());

        for direction in [Vec3::X, Vec3::Y, Vec3::new(1.0, 2.0, -3.0)] {
            let ray = Ray::new(Vec3::new(0.5, -1.0, 2.0), direction);
            let color = scene.trace(&ray, 0);
            assert!((color - Color::new(0.0, 0.5, 0.0)).length() < 1e-12, "{color:?}");
        }
    }

    /// Two half-mirrors facing each other along z. A ray fired down -z from
    /// between them bounces A, B, A, B, ... and each level blends in a
    /// different local color.
    fn facing_mirrors() -> (Scene, Ray, Color, Color) {
        let a = Color::new(1.0, 0.0, 0.0);
        let b = Color::new(0.0, 0.0, 1.0);
        let half_mirror = |color| Material::new(color, 1.0, 0.0, 0.0, 1.0, 0.5).unwrap();

        let mut scene = Scene::new(BACKGROUND);
        scene.add_sphere(sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, half_mirror(a)));
        scene.add_sphere(sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, half_mirror(b)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        (scene, ray, a, b)
    }

    #[test]
    fn test_reflection_follows_exactly_three_bounces() {
        let (scene, ray, a, b) = facing_mirrors();

        // Levels hit A, B, A, B. The last one is not reflected further:
        // c3 = b, c2 = (a + c3) / 2, c1 = (b + c2) / 2, c0 = (a + c1) / 2
        let expected = a * 0.625 + b * 0.375;
        // Same nesting cut after 1, 2 and 4 bounces
        let one_bounce = a * 0.5 + b * 0.5;
        let two_bounces = a * 0.75 + b * 0.25;
        let four_bounces = a * 0.6875 + b * 0.3125;

        for options in all_options() {
            let color = scene.trace_with(&ray, 0, options);
            assert!((color - expected).length() < 1e-12, "{color:?}");
            for wrong in [one_bounce, two_bounces, four_bounces] {
                assert!((color - wrong).length() > 0.01);
            }
        }
    }

    #[test]
    fn test_reflection_stops_at_max_depth() {
        let (scene, ray, a, b) = facing_mirrors();

        // At the deepest level only the local color remains
        assert!((scene.trace(&ray, MAX_DEPTH) - a).length() < 1e-12);
        // One level earlier exactly one reflection is blended in
        let one_above = scene.trace(&ray, MAX_DEPTH - 1);
        assert!((one_above - (a * 0.5 + b * 0.5)).length() < 1e-12);
    }

    #[test]
    fn test_blend_stays_in_unit_range() {
        let samples = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];

        for &k in &samples {
            for &a in &samples {
                for &b in &samples {
                    let local = Color::new(a, b, 1.0);
                    let reflected = Color::new(b, a, 1.0);
                    let mixed = blend(local, reflected, k);

                    for c in mixed.to_array() {
                        assert!((-1e-12..=1.0 + 1e-12).contains(&c), "k={k} a={a} b={b} -> {c}");
                    }
                    // Never brighter than the brighter input
                    assert!(mixed.max_element() <= local.max(reflected).max_element() + 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_blend_is_not_additive() {
        let local = Color::ONE;
        let reflected = Color::ONE;

        // A plain sum would give 1.5 here
        assert!((blend(local, reflected, 0.5) - Color::ONE).length() < 1e-12);
        assert_eq!(blend(local, Color::ZERO, 0.0), local);
        assert_eq!(blend(Color::ZERO, reflected, 1.0), reflected);
    }

    #[test]
    fn test_from_desc_reports_bad_sphere() {
        let mut desc = Preset::CandyLand.scene();
        desc.spheres[2].radius = -1.0;

        let err = Scene::from_desc(&desc).unwrap_err();
        assert_eq!(
            err,
            SceneError::Sphere {
                index: 2,
                source: Box::new(SceneError::InvalidRadius(-1.0)),
            }
        );
    }

    #[test]
    fn test_from_desc_reports_bad_light() {
        let mut desc = Preset::CandyLand.scene();
        desc.lights[1].intensity = -0.5;

        let err = Scene::from_desc(&desc).unwrap_err();
        assert!(matches!(err, SceneError::Light { index: 1, .. }));
    }
}
