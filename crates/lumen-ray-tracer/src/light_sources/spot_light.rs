use glam::Vec3;

use crate::{
    error::LightError,
    intersection::{CollisionLayers, Intersectable},
    Color,
};

use super::{
    point_light::{eligible_towards, range_attenuation},
    validate_direction, validate_emission, validate_position, validate_range, LightSampleCtx,
    LightSource,
};

/// Ranged light restricted by a cone around its facing direction.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub enabled: bool,
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub range: f32,
    /// Full cone angle in degrees.
    pub spot_angle: f32,
    direction: Vec3,
}

impl SpotLight {
    pub fn new(
        position: Vec3,
        direction: Vec3,
        range: f32,
        spot_angle: f32,
        color: Color,
        intensity: f32,
    ) -> Self {
        Self {
            enabled: true,
            color,
            intensity,
            position,
            range,
            spot_angle,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction.normalize_or_zero();
    }

    /// Cosine-like cut-off derived linearly from the spot angle, `1` at 0° and `0` at 180°.
    pub fn cone_threshold(&self) -> f32 {
        1.0 - self.spot_angle / 180.0
    }
}

impl LightSource for SpotLight {
    fn contribute<S: Intersectable + ?Sized>(
        &self,
        ctx: LightSampleCtx,
        scene: &S,
        layers: CollisionLayers,
    ) -> Color {
        let Some((wi, distance, dot)) = eligible_towards(&ctx, self.position, self.range) else {
            return Color::BLACK;
        };

        // Compares the surface normal against the spot axis, and only passes below the threshold.
        let axis_alignment = ctx.normal.dot(-self.direction);
        let threshold = self.cone_threshold();
        if axis_alignment >= threshold {
            return Color::BLACK;
        }

        if ctx.occluded(scene, wi, distance, layers) {
            return Color::BLACK;
        }

        self.color
            * self.intensity
            * dot
            * range_attenuation(self.range, distance)
            * (axis_alignment / threshold)
    }

    fn validate(&self) -> Result<(), LightError> {
        validate_emission(self.color, self.intensity)?;
        validate_position(self.position)?;
        validate_range(self.range)?;
        validate_direction(self.direction)?;

        if (0.0..180.0).contains(&self.spot_angle) {
            Ok(())
        } else {
            Err(LightError::InvalidSpotAngle(self.spot_angle))
        }
    }
}
