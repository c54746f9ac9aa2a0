// Render a Prism scene to a PNG file.
// Run with: cargo run --release --bin prism -- --scene mirror-gallery --output gallery.png

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use prism_core::{load_scene, Preset, SceneDesc};
use prism_renderer::{render_with, Camera, RenderConfig, Scene};

const USAGE: &str = "\
Usage: prism [OPTIONS]

Options:
  --scene <NAME|FILE>   Preset name or path to a JSON scene [default: showcase]
  --width <N>           Image width in pixels [default: 800]
  --height <N>          Image height in pixels [default: 600]
  --threads <N>         Worker threads [default: all cores]
  --output <FILE>       Output PNG path [default: render.png]
  --list                List the built-in presets
  --help                Print this message";

#[derive(Debug, Clone, PartialEq)]
struct RenderArgs {
    scene: String,
    width: u32,
    height: u32,
    threads: Option<usize>,
    output: PathBuf,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            scene: Preset::default().name().to_string(),
            width: 800,
            height: 600,
            threads: None,
            output: PathBuf::from("render.png"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Render(RenderArgs),
    List,
    Help,
}

fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut render = RenderArgs::default();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--list" => return Ok(Command::List),
            "-h" | "--help" => return Ok(Command::Help),
            "--scene" => render.scene = value(&flag, args.next())?,
            "--width" => render.width = number(&flag, args.next())?,
            "--height" => render.height = number(&flag, args.next())?,
            "--threads" => render.threads = Some(number(&flag, args.next())?),
            "--output" => render.output = PathBuf::from(value(&flag, args.next())?),
            other => bail!("Unknown argument '{}'\n\n{}", other, USAGE),
        }
    }

    Ok(Command::Render(render))
}

fn value(flag: &str, value: Option<String>) -> Result<String> {
    value.with_context(|| format!("Missing value for {}", flag))
}

fn number<T>(flag: &str, raw: Option<String>) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = value(flag, raw)?;
    raw.parse()
        .with_context(|| format!("Invalid value '{}' for {}", raw, flag))
}

/// A preset name, or a path to a JSON scene file.
fn resolve_scene(scene: &str) -> Result<SceneDesc> {
    let path = Path::new(scene);
    let is_file = path.extension().map_or(false, |ext| ext == "json") || path.exists();

    if is_file {
        load_scene(path).with_context(|| format!("Failed to load scene '{}'", scene))
    } else {
        let preset: Preset = scene.parse()?;
        Ok(preset.scene())
    }
}

fn run(args: RenderArgs) -> Result<()> {
    let desc = resolve_scene(&args.scene)?;
    let scene = Scene::from_desc(&desc)
        .with_context(|| format!("Invalid scene '{}'", desc.name))?;
    let camera = Camera::from_desc(&desc.camera)?;

    let mut config = RenderConfig::default().with_resolution(args.width, args.height);
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }

    let output = render_with(&scene, &camera, &config)?;
    let frame = output.frame;

    let image = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_rgba8())
        .context("Frame buffer does not match its dimensions")?;
    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!(
        "Saved {} ({:.2} Mrays/sec)",
        args.output.display(),
        output.stats.mrays_per_second()
    );

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    match parse_args(std::env::args().skip(1))? {
        Command::Render(args) => run(args),
        Command::List => {
            for preset in Preset::ALL {
                println!("{}", preset);
            }
            Ok(())
        }
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}
