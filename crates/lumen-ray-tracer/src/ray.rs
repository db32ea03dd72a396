use glam::{Vec2, Vec3};

use crate::{material::Material, Color};

/// Distance a shadow ray starts above the surface it leaves, prevents self-intersection.
pub const SHADOW_RAY_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// `direction` is normalized, a zero direction stays zero and will not hit anything.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest surface found along a ray.
#[derive(Debug, Clone)]
pub struct Hit {
    pub point: Vec3,
    /// Unit length, facing against the incoming ray.
    pub normal: Vec3,
    pub distance: f32,
    pub tex_coord: Option<Vec2>,
    /// Surfaces without material data resolve to the configured fallback color.
    pub material: Option<Material>,
}

impl Hit {
    /// Base color before lighting, sampled from the texture when there is one.
    pub fn surface_color(&self, fallback: Color) -> Color {
        match &self.material {
            Some(material) => material.surface_color(self.tex_coord),
            None => {
                log::trace!("Hit at {} has no material, using fallback.", self.point);
                fallback
            }
        }
    }
}
