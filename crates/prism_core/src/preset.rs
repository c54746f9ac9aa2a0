//! Built-in scenes.
//!
//! Every preset is a small arrangement of spheres resting on a huge "floor"
//! sphere of radius 100 centered at y = -101, viewed from (0, 1, 5).

use std::fmt;
use std::str::FromStr;

use prism_math::Vec3;

use crate::loader::LoadError;
use crate::scene::{LightDesc, MaterialDesc, SceneDesc, SphereDesc};

/// The named built-in scenes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Five primary-colored spheres over a silver floor
    #[default]
    Showcase,
    /// Highly reflective chrome spheres in a ring
    MirrorGallery,
    /// Saturated glossy spheres under colored lights
    NeonDreams,
    /// A sun and planets over dark space
    PlanetarySystem,
    /// Glass-like spheres on a marble shelf
    GlassOrbs,
    /// Warm materials under low sunset lighting
    GoldenHour,
    /// A pile of candy-colored spheres
    CandyLand,
    /// Cool underwater palette
    DeepOcean,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Showcase,
        Preset::MirrorGallery,
        Preset::NeonDreams,
        Preset::PlanetarySystem,
        Preset::GlassOrbs,
        Preset::GoldenHour,
        Preset::CandyLand,
        Preset::DeepOcean,
    ];

    /// Kebab-case name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Showcase => "showcase",
            Preset::MirrorGallery => "mirror-gallery",
            Preset::NeonDreams => "neon-dreams",
            Preset::PlanetarySystem => "planetary-system",
            Preset::GlassOrbs => "glass-orbs",
            Preset::GoldenHour => "golden-hour",
            Preset::CandyLand => "candy-land",
            Preset::DeepOcean => "deep-ocean",
        }
    }

    /// Build the scene description for this preset.
    pub fn scene(self) -> SceneDesc {
        let (spheres, lights) = match self {
            Preset::Showcase => showcase(),
            Preset::MirrorGallery => mirror_gallery(),
            Preset::NeonDreams => neon_dreams(),
            Preset::PlanetarySystem => planetary_system(),
            Preset::GlassOrbs => glass_orbs(),
            Preset::GoldenHour => golden_hour(),
            Preset::CandyLand => candy_land(),
            Preset::DeepOcean => deep_ocean(),
        };

        SceneDesc {
            name: self.name().to_string(),
            spheres,
            lights,
            ..Default::default()
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| LoadError::UnknownPreset(s.to_string()))
    }
}

type Contents = (Vec<SphereDesc>, Vec<LightDesc>);

#[allow(clippy::too_many_arguments)]
const fn mat(
    r: f64,
    g: f64,
    b: f64,
    amb: f64,
    diff: f64,
    spec: f64,
    shin: f64,
    refl: f64,
) -> MaterialDesc {
    MaterialDesc::new(Vec3::new(r, g, b), amb, diff, spec, shin, refl)
}

fn sphere(x: f64, y: f64, z: f64, radius: f64, material: MaterialDesc) -> SphereDesc {
    SphereDesc::new(Vec3::new(x, y, z), radius, material)
}

fn floor(material: MaterialDesc) -> SphereDesc {
    sphere(0.0, -101.0, 0.0, 100.0, material)
}

fn light(x: f64, y: f64, z: f64, color: Vec3, intensity: f64) -> LightDesc {
    LightDesc::new(Vec3::new(x, y, z), color, intensity)
}

fn white() -> Vec3 {
    Vec3::ONE
}

fn showcase() -> Contents {
    let red = mat(1.0, 0.2, 0.2, 0.1, 0.7, 0.8, 64.0, 0.4);
    let green = mat(0.2, 1.0, 0.2, 0.1, 0.8, 0.6, 32.0, 0.2);
    let blue = mat(0.2, 0.2, 1.0, 0.1, 0.6, 0.9, 128.0, 0.6);
    let gold = mat(1.0, 0.84, 0.0, 0.2, 0.5, 1.0, 256.0, 0.5);
    let silver = mat(0.75, 0.75, 0.75, 0.1, 0.4, 1.0, 256.0, 0.8);

    (
        vec![
            sphere(0.0, 0.0, 0.0, 1.0, red),
            sphere(-2.5, 0.0, -1.0, 0.8, green),
            sphere(2.5, 0.5, -0.5, 1.2, blue),
            floor(silver),
            sphere(-1.0, 1.5, 1.0, 0.5, gold),
        ],
        vec![
            light(-5.0, 5.0, 5.0, white(), 0.8),
            light(5.0, 3.0, 3.0, white(), 0.6),
        ],
    )
}

fn mirror_gallery() -> Contents {
    let chrome1 = mat(0.9, 0.9, 1.0, 0.05, 0.3, 1.0, 512.0, 0.9);
    let chrome2 = mat(1.0, 0.9, 0.9, 0.05, 0.3, 1.0, 512.0, 0.9);
    let chrome3 = mat(0.9, 1.0, 0.9, 0.05, 0.3, 1.0, 512.0, 0.9);
    let gold_mirror = mat(1.0, 0.84, 0.0, 0.1, 0.3, 1.0, 512.0, 0.85);
    let floor_mat = mat(0.2, 0.2, 0.25, 0.1, 0.6, 0.4, 64.0, 0.3);

    (
        vec![
            sphere(0.0, 0.0, 0.0, 1.0, gold_mirror),
            sphere(2.5, 0.0, 0.0, 0.7, chrome1),
            sphere(-2.5, 0.0, 0.0, 0.7, chrome2),
            sphere(0.0, 0.0, 2.5, 0.7, chrome3),
            sphere(0.0, 0.0, -2.5, 0.7, chrome1),
            sphere(0.0, 2.0, 0.0, 0.5, chrome2),
            floor(floor_mat),
        ],
        vec![
            light(5.0, 8.0, 5.0, white(), 1.2),
            light(-5.0, 8.0, -5.0, Vec3::new(0.8, 0.9, 1.0), 0.8),
            // uplight
            light(0.0, -3.0, 0.0, Vec3::new(1.0, 0.9, 0.8), 0.3),
        ],
    )
}

fn neon_dreams() -> Contents {
    let pink = mat(1.0, 0.1, 0.5, 0.15, 0.6, 1.0, 256.0, 0.7);
    let cyan = mat(0.0, 0.9, 1.0, 0.15, 0.6, 1.0, 256.0, 0.7);
    let green = mat(0.2, 1.0, 0.2, 0.15, 0.6, 1.0, 256.0, 0.7);
    let purple = mat(0.8, 0.2, 1.0, 0.15, 0.6, 1.0, 256.0, 0.7);
    let yellow = mat(1.0, 1.0, 0.1, 0.15, 0.6, 1.0, 256.0, 0.7);
    let dark_floor = mat(0.05, 0.05, 0.1, 0.05, 0.3, 0.8, 128.0, 0.6);

    (
        vec![
            sphere(-2.0, 0.5, 0.0, 1.2, pink),
            sphere(2.0, 0.5, 0.0, 1.2, cyan),
            sphere(0.0, 0.5, 2.0, 1.2, green),
            sphere(0.0, 2.5, 0.0, 0.8, purple),
            sphere(0.0, 0.5, -2.0, 1.2, yellow),
            floor(dark_floor),
        ],
        vec![
            light(-5.0, 5.0, 5.0, Vec3::new(1.0, 0.2, 0.8), 1.0),
            light(5.0, 5.0, 5.0, Vec3::new(0.2, 0.8, 1.0), 1.0),
            light(0.0, 8.0, 0.0, white(), 0.5),
        ],
    )
}

fn planetary_system() -> Contents {
    let sun = mat(1.0, 0.9, 0.3, 0.3, 0.7, 0.3, 16.0, 0.1);
    let mercury = mat(0.7, 0.7, 0.7, 0.1, 0.6, 0.8, 128.0, 0.4);
    let venus = mat(1.0, 0.8, 0.5, 0.1, 0.7, 0.6, 64.0, 0.3);
    let earth = mat(0.2, 0.5, 1.0, 0.1, 0.8, 0.5, 64.0, 0.4);
    let mars = mat(0.9, 0.4, 0.2, 0.1, 0.7, 0.4, 32.0, 0.3);
    let jupiter = mat(0.8, 0.6, 0.4, 0.1, 0.7, 0.5, 64.0, 0.4);
    let space = mat(0.01, 0.01, 0.02, 0.02, 0.2, 0.1, 8.0, 0.05);

    (
        vec![
            sphere(0.0, 0.0, -3.0, 1.5, sun),
            sphere(-2.5, -0.2, 0.0, 0.3, mercury),
            sphere(-1.5, 0.3, 2.0, 0.5, venus),
            sphere(2.0, -0.3, 1.0, 0.6, earth),
            sphere(3.5, 0.5, -1.0, 0.4, mars),
            sphere(-3.0, 1.0, 3.0, 1.0, jupiter),
            floor(space),
        ],
        vec![
            light(-2.0, 3.0, -3.0, Vec3::new(1.0, 0.95, 0.8), 1.5),
            // fill
            light(5.0, 5.0, 5.0, Vec3::new(0.3, 0.3, 0.4), 0.3),
        ],
    )
}

fn glass_orbs() -> Contents {
    let clear = mat(0.95, 0.95, 1.0, 0.05, 0.2, 1.0, 512.0, 0.8);
    let blue = mat(0.7, 0.85, 1.0, 0.05, 0.25, 1.0, 512.0, 0.75);
    let amber = mat(1.0, 0.8, 0.5, 0.05, 0.25, 1.0, 512.0, 0.75);
    let green = mat(0.7, 1.0, 0.85, 0.05, 0.25, 1.0, 512.0, 0.75);
    let rose = mat(1.0, 0.8, 0.9, 0.05, 0.25, 1.0, 512.0, 0.75);
    let marble = mat(0.85, 0.85, 0.9, 0.15, 0.6, 0.7, 128.0, 0.4);

    (
        vec![
            sphere(0.0, 0.0, 0.0, 1.0, clear),
            sphere(-2.2, -0.3, 0.5, 0.7, blue),
            sphere(2.2, -0.3, 0.5, 0.7, amber),
            sphere(-1.5, 1.2, 1.0, 0.5, green),
            sphere(1.5, 1.2, 1.0, 0.5, rose),
            floor(marble),
        ],
        vec![
            light(-5.0, 8.0, 3.0, white(), 1.2),
            light(5.0, 8.0, 3.0, white(), 1.2),
            // backlight
            light(0.0, 3.0, -5.0, Vec3::new(0.8, 0.8, 1.0), 0.6),
        ],
    )
}

fn golden_hour() -> Contents {
    let terracotta = mat(0.8, 0.4, 0.3, 0.15, 0.7, 0.3, 32.0, 0.2);
    let sand = mat(0.9, 0.8, 0.6, 0.2, 0.7, 0.2, 16.0, 0.1);
    let copper = mat(0.9, 0.6, 0.4, 0.1, 0.5, 0.9, 256.0, 0.6);
    let bronze = mat(0.7, 0.5, 0.3, 0.1, 0.6, 0.8, 128.0, 0.5);
    let clay = mat(0.7, 0.5, 0.4, 0.15, 0.7, 0.3, 32.0, 0.2);
    let desert = mat(0.8, 0.7, 0.5, 0.2, 0.7, 0.2, 16.0, 0.15);

    (
        vec![
            sphere(0.0, 0.0, 0.0, 1.0, copper),
            sphere(-2.5, -0.2, -0.5, 0.8, terracotta),
            sphere(2.5, 0.3, 0.5, 1.0, bronze),
            sphere(-1.0, 1.5, 1.5, 0.6, clay),
            sphere(1.2, 1.8, -1.0, 0.5, sand),
            floor(desert),
        ],
        vec![
            light(-8.0, 3.0, 2.0, Vec3::new(1.0, 0.7, 0.4), 1.5),
            light(5.0, 8.0, -3.0, Vec3::new(0.6, 0.7, 1.0), 0.4),
        ],
    )
}

fn candy_land() -> Contents {
    let bubblegum = mat(1.0, 0.4, 0.7, 0.2, 0.7, 0.6, 64.0, 0.3);
    let lemon = mat(1.0, 1.0, 0.3, 0.2, 0.7, 0.5, 64.0, 0.3);
    let mint = mat(0.4, 1.0, 0.7, 0.2, 0.7, 0.5, 64.0, 0.3);
    let grape = mat(0.6, 0.3, 1.0, 0.2, 0.7, 0.6, 64.0, 0.3);
    let orange = mat(1.0, 0.6, 0.2, 0.2, 0.7, 0.5, 64.0, 0.3);
    let cream = mat(1.0, 0.95, 0.85, 0.3, 0.6, 0.3, 32.0, 0.2);

    (
        vec![
            sphere(0.0, 0.0, 0.0, 1.0, bubblegum),
            sphere(-1.8, -0.3, 0.8, 0.8, lemon),
            sphere(1.8, -0.3, 0.8, 0.8, mint),
            sphere(-0.8, 1.3, 1.2, 0.7, grape),
            sphere(0.8, 1.3, 1.2, 0.7, orange),
            floor(cream),
        ],
        vec![
            light(-5.0, 8.0, 5.0, white(), 1.0),
            light(5.0, 8.0, 5.0, white(), 1.0),
        ],
    )
}

fn deep_ocean() -> Contents {
    let pearl = mat(0.9, 0.95, 1.0, 0.1, 0.4, 1.0, 256.0, 0.7);
    let aqua = mat(0.3, 0.7, 0.8, 0.15, 0.6, 0.6, 64.0, 0.4);
    let deep_blue = mat(0.2, 0.4, 0.7, 0.15, 0.6, 0.5, 64.0, 0.3);
    let teal = mat(0.2, 0.6, 0.6, 0.15, 0.6, 0.6, 64.0, 0.4);
    let coral = mat(0.9, 0.5, 0.5, 0.15, 0.7, 0.4, 32.0, 0.2);
    let ocean_floor = mat(0.15, 0.25, 0.35, 0.1, 0.5, 0.3, 32.0, 0.2);

    (
        vec![
            sphere(0.0, 0.5, 0.0, 1.0, pearl),
            sphere(-2.0, 0.0, 1.0, 0.7, aqua),
            sphere(2.0, 1.0, 0.0, 0.8, deep_blue),
            sphere(-1.0, 2.0, -1.0, 0.5, teal),
            sphere(1.5, -0.3, 2.0, 0.6, coral),
            floor(ocean_floor),
        ],
        vec![
            light(-3.0, 10.0, 0.0, Vec3::new(0.6, 0.8, 1.0), 0.8),
            light(5.0, 5.0, 5.0, Vec3::new(0.4, 0.6, 0.8), 0.5),
        ],
    )
}
