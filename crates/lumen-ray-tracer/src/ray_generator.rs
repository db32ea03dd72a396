use glam::{Mat4, UVec2, Vec2, Vec4, Vec4Swizzles};
use lumen_camera::Camera;

use crate::{error::ConfigError, ray::Ray};

/// Per-frame camera state needed to unproject screen points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    pub inv_view: Mat4,
    pub inv_proj: Mat4,
    /// Native screen size in pixels.
    pub resolution: UVec2,
}

impl CameraMatrices {
    pub fn new(camera: &Camera) -> Result<Self, ConfigError> {
        let resolution = camera.resolution();
        if resolution.x == 0 || resolution.y == 0 {
            return Err(ConfigError::InvalidResolution(resolution.x, resolution.y));
        }

        let (fov, near, far) = (camera.get_fov(), camera.get_near(), camera.get_far());
        let projection_is_valid = fov > 0.0 && fov < 180.0 && near > 0.0 && far > near;
        if !projection_is_valid || !far.is_finite() {
            return Err(ConfigError::InvalidProjection { fov, near, far });
        }

        let inv_view = camera.transform.get_matrix();
        let inv_proj = camera.get_matrix().inverse();
        if !inv_view.is_finite() || !inv_proj.is_finite() {
            return Err(ConfigError::InvalidProjection { fov, near, far });
        }

        Ok(Self {
            inv_view,
            inv_proj,
            resolution,
        })
    }

    /// Ray from the camera through `screen`, in pixels with the origin at the bottom left.
    pub fn screen_point_to_ray(&self, screen: Vec2) -> Ray {
        let ndc = screen / self.resolution.as_vec2() * 2.0 - 1.0;

        let origin = self.inv_view * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let target = self.inv_proj * Vec4::from((ndc, 1.0, 1.0));
        let direction = self.inv_view * Vec4::from(((target.xyz() / target.w).normalize(), 0.0));

        Ray::new(origin.xyz(), direction.xyz())
    }
}

/// Primary ray for a pixel of a buffer scaled by `multiplier`.
///
/// Pixels map back onto the native screen with integer division, every `multiplier × multiplier`
/// block shares one ray.
pub fn generate_ray(pixel_x: u32, pixel_y: u32, multiplier: u32, camera: &CameraMatrices) -> Ray {
    let multiplier = multiplier.max(1);
    let screen = UVec2::new(pixel_x / multiplier, pixel_y / multiplier);

    camera.screen_point_to_ray(screen.as_vec2())
}
