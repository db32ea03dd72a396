use glam::UVec2;
use lumen_camera::Camera;

use crate::{
    config::RenderConfig,
    error::ConfigError,
    frame_buffer::FrameBuffer,
    intersection::Intersectable,
    light_sources::Light,
    ray_generator::{generate_ray, CameraMatrices},
    shading::trace_ray,
};

/// Immutable view of the scene for the duration of one frame.
pub struct FrameSnapshot<'a> {
    camera: CameraMatrices,
    lights: Vec<Light>,
    scene: &'a dyn Intersectable,
}

impl<'a> FrameSnapshot<'a> {
    /// Captures the camera and lights, rejecting malformed ones before any pixel is traced.
    pub fn new(
        camera: &Camera,
        lights: Vec<Light>,
        scene: &'a dyn Intersectable,
    ) -> Result<Self, ConfigError> {
        for (index, light) in lights.iter().enumerate() {
            light
                .validate()
                .map_err(|source| ConfigError::InvalidLight { index, source })?;
        }

        Ok(Self {
            camera: CameraMatrices::new(camera)?,
            lights,
            scene,
        })
    }

    pub fn camera(&self) -> &CameraMatrices {
        &self.camera
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn scene(&self) -> &dyn Intersectable {
        self.scene
    }
}

/// Black buffer for `native` scaled by `multiplier`, refused when it cannot be addressed.
fn allocate_output(native: UVec2, multiplier: u32) -> Result<FrameBuffer, ConfigError> {
    let width = native.x.checked_mul(multiplier);
    let height = native.y.checked_mul(multiplier);

    width
        .zip(height)
        .and_then(|(width, height)| FrameBuffer::try_new(width, height))
        .ok_or(ConfigError::ResolutionOverflow {
            width: native.x,
            height: native.y,
            multiplier,
        })
}

/// Traces one primary ray per pixel of a buffer scaled by the resolution multiplier.
///
/// Returns `Ok(None)` without doing any work when the pass is disabled. The only error is an output
/// resolution too large to allocate, reported before any pixel is traced.
pub fn render_frame(
    config: &RenderConfig,
    snapshot: &FrameSnapshot,
) -> Result<Option<FrameBuffer>, ConfigError> {
    puffin::profile_function!();

    if !config.enabled {
        return Ok(None);
    }

    let multiplier = config.resolution_multiplier();
    let mut frame_buffer = allocate_output(snapshot.camera.resolution, multiplier)?;
    log::debug!(
        "Rendering {}x{} frame with {} of {} lights enabled.",
        frame_buffer.width(),
        frame_buffer.height(),
        snapshot.lights.iter().filter(|light| light.enabled()).count(),
        snapshot.lights.len()
    );

    let resolution = UVec2::new(frame_buffer.width(), frame_buffer.height());
    for y in 0..resolution.y {
        puffin::profile_scope!("row");

        for x in 0..resolution.x {
            let ray = generate_ray(x, y, multiplier, &snapshot.camera);
            let color = trace_ray(&ray, config, &snapshot.lights, snapshot.scene);
            frame_buffer.set(x, y, color);
        }
    }

    Ok(Some(frame_buffer))
}
