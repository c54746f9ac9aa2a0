//! Parallel frame rendering.
//!
//! Each image row is an independent rayon task writing into its own slice of
//! the frame buffer. The scene and camera are shared read-only, so the
//! thread count changes only how long a frame takes, never its pixels.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use prism_math::Interval;
use rayon::prelude::*;

use crate::{Camera, Color, RenderError, Scene, TraceOptions};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Worker threads; `None` uses rayon's global pool
    pub threads: Option<usize>,
    pub trace: TraceOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            threads: None,
            trace: TraceOptions::default(),
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Render on a dedicated pool of `threads` workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set intersection and shadow strategies.
    pub fn with_trace_options(mut self, trace: TraceOptions) -> Self {
        self.trace = trace;
        self
    }
}

/// Row-major frame of packed `0xAARRGGBB` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Create a new frame filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0xFF00_0000; width as usize * height as usize],
        }
    }

    /// Get the packed pixel at (x, y), with y = 0 the top row.
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Get the 8-bit RGB channels of the pixel at (x, y).
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let [_, r, g, b] = self.get(x, y).to_be_bytes();
        [r, g, b]
    }

    /// Convert to RGBA bytes (for image encoders).
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            let [a, r, g, b] = pixel.to_be_bytes();
            bytes.extend_from_slice(&[r, g, b, a]);
        }
        bytes
    }
}

/// Timing of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub width: u32,
    pub height: u32,
    pub threads: usize,
    pub elapsed: Duration,
    pub primary_rays: u64,
}

impl RenderStats {
    /// Primary rays traced per second.
    pub fn rays_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.primary_rays as f64 / secs
        } else {
            0.0
        }
    }

    /// Throughput in millions of primary rays per second.
    pub fn mrays_per_second(&self) -> f64 {
        self.rays_per_second() / 1_000_000.0
    }
}

/// A rendered frame and its statistics.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub frame: FrameBuffer,
    pub stats: RenderStats,
}

/// Clamp a color to [0, 1] and pack it as opaque `0xAARRGGBB`.
///
/// Each channel is `trunc(255.99 * c)`.
pub fn color_to_argb(color: Color) -> u32 {
    let to_byte = |c: f64| (255.99 * Interval::UNIT.clamp(c)) as u8;
    u32::from_be_bytes([0xFF, to_byte(color.x), to_byte(color.y), to_byte(color.z)])
}

/// Render a frame on rayon's global pool with the default strategies.
///
/// A zero width or height yields an empty frame.
pub fn render(scene: &Scene, camera: &Camera, width: u32, height: u32) -> FrameBuffer {
    if width == 0 || height == 0 {
        return FrameBuffer::new(width, height);
    }
    render_rows(scene, camera, width, height, TraceOptions::default())
}

/// Render a frame according to `config`, reporting throughput.
pub fn render_with(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
) -> Result<RenderOutput, RenderError> {
    let (width, height) = (config.width, config.height);
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyFrame { width, height });
    }

    let start = Instant::now();
    let (frame, threads) = match config.threads {
        None => {
            let frame = render_rows(scene, camera, width, height, config.trace);
            (frame, rayon::current_num_threads())
        }
        Some(0) => return Err(RenderError::InvalidThreadCount),
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
            let frame = pool.install(|| render_rows(scene, camera, width, height, config.trace));
            (frame, n)
        }
    };

    let stats = RenderStats {
        width,
        height,
        threads,
        elapsed: start.elapsed(),
        primary_rays: width as u64 * height as u64,
    };

    log::info!(
        "Rendered {}x{} on {} threads in {:.3}s ({:.2} Mrays/sec)",
        width,
        height,
        threads,
        stats.elapsed.as_secs_f64(),
        stats.mrays_per_second()
    );

    Ok(RenderOutput { frame, stats })
}

/// Normalized coordinate of pixel `index` along an axis of `count` pixels.
///
/// The first and last pixels map to exactly 0 and 1; a single pixel sits
/// in the middle.
fn unit_coord(index: u32, count: u32) -> f64 {
    if count > 1 {
        index as f64 / (count - 1) as f64
    } else {
        0.5
    }
}

fn render_rows(
    scene: &Scene,
    camera: &Camera,
    width: u32,
    height: u32,
    options: TraceOptions,
) -> FrameBuffer {
    let mut frame = FrameBuffer::new(width, height);
    let aspect_ratio = width as f64 / height as f64;

    let rows_done = AtomicUsize::new(0);
    let report_every = (height as usize / 10).max(1);

    log::info!(
        "Rendering {}x{} with {} threads...",
        width,
        height,
        rayon::current_num_threads()
    );

    frame
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(j, row)| {
            // Row 0 is the top of the image
            let t = unit_coord(height - 1 - j as u32, height);

            for (i, pixel) in row.iter_mut().enumerate() {
                let s = unit_coord(i as u32, width);
                let ray = camera.get_ray(s, t, aspect_ratio);
                *pixel = color_to_argb(scene.trace_with(&ray, 0, options));
            }

            let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
            if done % report_every == 0 {
                log::debug!("Progress: {}%", 100 * done / height as usize);
            }
        });

    frame
}
