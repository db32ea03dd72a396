use glam::{Mat3, Mat4, Quat, Vec3};

pub const RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Right-handed view space looks down negative z.
pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Rigid placement of a viewer in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl From<Mat4> for Transform {
    fn from(value: Mat4) -> Self {
        let (_scale, rotation, translation) = value.to_scale_rotation_translation();
        Self {
            translation,
            rotation,
        }
    }
}

impl Transform {
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation: rotation.normalize(),
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Places the transform at `eye` with [`FORWARD`] pointing at `target`.
    ///
    /// When the view direction is parallel to `up` an arbitrary perpendicular up vector is chosen.
    pub fn looking_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize_or(FORWARD);

        let right = forward.cross(up).try_normalize().unwrap_or_else(|| {
            log::debug!("View direction is parallel to up, picking an orthogonal basis.");
            forward.any_orthonormal_vector()
        });
        let up = right.cross(forward);

        let rotation = Quat::from_mat3(&Mat3::from_cols(right, up, -forward));
        Self::new(eye, rotation)
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * RIGHT
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * UP
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * FORWARD
    }

    pub fn get_translation(&self) -> Vec3 {
        self.translation
    }

    pub fn get_rotation(&self) -> Quat {
        self.rotation
    }

    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    pub fn translate(&mut self, translation: Vec3) {
        self.translation += translation;
    }

    pub fn rotate(&mut self, rotation: Quat) {
        self.rotation = (self.rotation * rotation).normalize();
    }

    /// Camera-to-world matrix, the inverse of the view matrix.
    pub fn get_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }
}
