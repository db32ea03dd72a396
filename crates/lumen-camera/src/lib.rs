use glam::{Mat4, UVec2};

mod transform;
pub use transform::{Transform, FORWARD, RIGHT, UP};

/// Pinhole camera viewing the scene through a screen of `resolution` pixels.
#[derive(Debug, Clone)]
pub struct Camera {
    pub transform: Transform,
    resolution: UVec2,
    fov: f32,
    near: f32,
    far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            resolution: UVec2::new(640, 360),
            fov: 60.0,
            near: 0.1,
            far: 300.0,
        }
    }
}

impl Camera {
    pub fn new(transform: Transform, fov: f32, near: f32, far: f32, resolution: UVec2) -> Self {
        Self {
            transform,
            resolution,
            fov,
            near,
            far,
        }
    }

    pub fn from_transform(transform: Transform) -> Self {
        Self {
            transform,
            ..Default::default()
        }
    }

    /// Vertical field of view in degrees.
    pub fn get_fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    pub fn get_near(&self) -> f32 {
        self.near
    }

    pub fn set_near(&mut self, near: f32) {
        self.near = near;
    }

    pub fn get_far(&self) -> f32 {
        self.far
    }

    pub fn set_far(&mut self, far: f32) {
        self.far = far;
    }

    /// Native screen size in pixels, before any resolution multiplier is applied.
    pub fn resolution(&self) -> UVec2 {
        self.resolution
    }

    pub fn set_resolution(&mut self, resolution: UVec2) {
        self.resolution = resolution;
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.resolution.y == 0 {
            1.0
        } else {
            self.resolution.x as f32 / self.resolution.y as f32
        }
    }

    pub fn get_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov.to_radians(),
            self.aspect_ratio(),
            self.near,
            self.far,
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::UVec2;

    use super::*;

    #[test]
    fn aspect_ratio_follows_resolution() {
        let mut camera = Camera::default();
        camera.set_resolution(UVec2::new(800, 400));
        assert_abs_diff_eq!(camera.aspect_ratio(), 2.0);

        camera.set_resolution(UVec2::new(800, 0));
        assert_abs_diff_eq!(camera.aspect_ratio(), 1.0);
    }

    #[test]
    fn projection_maps_far_plane_center_to_depth_one() {
        let camera = Camera::default();
        let clip = camera.get_matrix() * glam::Vec4::new(0.0, 0.0, -camera.get_far(), 1.0);

        assert_abs_diff_eq!(clip.z / clip.w, 1.0, epsilon = 1e-4);
    }
}
