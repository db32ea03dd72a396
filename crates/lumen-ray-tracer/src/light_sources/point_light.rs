use glam::Vec3;

use crate::{
    error::LightError,
    intersection::{CollisionLayers, Intersectable},
    Color,
};

use super::{validate_emission, validate_position, validate_range, LightSampleCtx, LightSource};

/// Omnidirectional light with a limited range.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub enabled: bool,
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub range: f32,
}

/// Direction towards the light, its distance and the Lambertian term, when the point lies
/// within range and faces the light.
pub(super) fn eligible_towards(
    ctx: &LightSampleCtx,
    position: Vec3,
    range: f32,
) -> Option<(Vec3, f32, f32)> {
    let direction = (position - ctx.point).normalize();
    let dot = ctx.normal.dot(direction);
    let distance = ctx.point.distance(position);

    // NaN from a light sitting on the point fails this as well.
    if distance < range && dot > 0.0 {
        Some((direction, distance, dot))
    } else {
        None
    }
}

/// Signed: always negative inside the range, so lit points get darker.
pub(super) fn range_attenuation(range: f32, distance: f32) -> f32 {
    1.0 - range / distance
}

impl PointLight {
    pub fn new(position: Vec3, range: f32, color: Color, intensity: f32) -> Self {
        Self {
            enabled: true,
            color,
            intensity,
            position,
            range,
        }
    }
}

impl LightSource for PointLight {
    fn contribute<S: Intersectable + ?Sized>(
        &self,
        ctx: LightSampleCtx,
        scene: &S,
        layers: CollisionLayers,
    ) -> Color {
        let Some((wi, distance, dot)) = eligible_towards(&ctx, self.position, self.range) else {
            return Color::BLACK;
        };

        if ctx.occluded(scene, wi, distance, layers) {
            return Color::BLACK;
        }

        self.color * self.intensity * dot * range_attenuation(self.range, distance)
    }

    fn validate(&self) -> Result<(), LightError> {
        validate_emission(self.color, self.intensity)?;
        validate_position(self.position)?;
        validate_range(self.range)
    }
}
