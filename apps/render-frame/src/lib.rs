use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glam::{UVec2, Vec3};
use image::{Rgb, RgbImage};
use lumen::lumen_camera::{Camera, Transform, UP};
use lumen::lumen_ray_tracer::{
    render_frame, Color, CollisionLayers, Compositing, FrameBuffer, FrameSnapshot, RenderConfig,
};
use lumen::lumen_texture::Texture;
use lumen::Lumen;

mod demo_scene;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Native screen width in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Native screen height in pixels
    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Integer scale applied to both output dimensions
    #[arg(long, default_value_t = 1)]
    resolution_multiplier: u32,

    /// Ambient light as `r,g,b`
    #[arg(long, value_parser = parse_color, default_value = "0.1,0.1,0.1")]
    ambient: Color,

    /// Geometry layers considered by primary and shadow rays
    #[arg(long, default_value_t = u32::MAX)]
    collision_layer_mask: u32,

    /// Number of frames to render, the last one is written out
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Keep the ray tracing pass switched off
    #[arg(long, default_value_t = false)]
    disabled: bool,

    /// Multiply base colors by the lighting instead of adding them
    #[arg(long, default_value_t = false)]
    multiplicative: bool,

    /// Image used for the floor instead of a generated checkerboard
    #[arg(long)]
    floor_texture: Option<PathBuf>,

    /// Average supersampled pixels back to the native resolution before writing
    #[arg(long, default_value_t = false)]
    downsample: bool,

    /// Record puffin profiling scopes
    #[arg(long, default_value_t = false)]
    profile: bool,

    /// Destination png
    #[arg(long, default_value = "frame.png")]
    output: PathBuf,
}

fn parse_color(s: &str) -> std::result::Result<Color, String> {
    let components = s
        .split(',')
        .map(|c| c.trim().parse::<f32>().map_err(|e| format!("{c:?}: {e}")))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    match components.as_slice() {
        [r, g, b] => Ok(Color::new(*r, *g, *b)),
        _ => Err(format!("expected 3 components, got {}", components.len())),
    }
}

/// Clamps to the displayable range and flips rows so the top of the screen comes first.
fn write_png(frame: &FrameBuffer, path: &Path) -> Result<()> {
    let height = frame.height();
    let image = RgbImage::from_fn(frame.width(), height, |x, y| {
        let color = frame.get(x, height - 1 - y);
        let [r, g, b] = color.to_array().map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8);
        Rgb([r, g, b])
    });

    image
        .save(path)
        .with_context(|| format!("Failed to write {}.", path.display()))
}

pub fn internal_main() -> Result<()> {
    let args = Args::parse();
    let lumen = Lumen::new("Render Frame");

    let compositing = if args.multiplicative {
        Compositing::Multiplicative
    } else {
        Compositing::Additive
    };
    let config = RenderConfig::builder()
        .enabled(!args.disabled)
        .resolution_multiplier(args.resolution_multiplier)
        .ambient(args.ambient)
        .collision_layers(CollisionLayers::from_bits_retain(args.collision_layer_mask))
        .compositing(compositing)
        .build()?;

    let camera = Camera::new(
        Transform::looking_at(Vec3::new(0.0, 3.5, 8.0), Vec3::new(0.0, 0.5, 0.0), UP),
        50.0,
        0.1,
        300.0,
        UVec2::new(args.width, args.height),
    );

    let floor_texture = match &args.floor_texture {
        Some(path) => Texture::open(path)?,
        None => Texture::checkerboard(64, 8, [200, 200, 200], [60, 60, 60]),
    };
    let scene = demo_scene::build_scene(Arc::new(floor_texture));

    let mut last_frame = None;
    for frame_idx in 0..args.frames {
        lumen.new_frame(args.profile);

        let snapshot =
            FrameSnapshot::new(&camera, demo_scene::collect_lights(frame_idx), &scene)?;

        let start = Instant::now();
        match render_frame(&config, &snapshot)? {
            Some(frame) => {
                log::info!(
                    "Frame {} ({}x{}) rendered in {:.2} ms.",
                    frame_idx,
                    frame.width(),
                    frame.height(),
                    start.elapsed().as_secs_f64() * 1000.0
                );
                last_frame = Some(frame);
            }
            None => log::info!("Ray tracing is disabled, skipping frame {}.", frame_idx),
        }
    }

    let Some(frame) = last_frame else {
        log::warn!("No frame was rendered, nothing to write.");
        return Ok(());
    };

    let frame = if args.downsample {
        frame.downsample(config.resolution_multiplier())
    } else {
        frame
    };
    write_png(&frame, &args.output)?;
    log::info!("Wrote {}.", args.output.display());

    Ok(())
}
