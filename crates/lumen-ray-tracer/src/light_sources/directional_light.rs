use glam::Vec3;

use crate::{
    error::LightError,
    intersection::{CollisionLayers, Intersectable},
    Color,
};

use super::{validate_direction, validate_emission, LightSampleCtx, LightSource};

/// Infinitely distant light, parallel rays and no falloff.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    pub enabled: bool,
    pub color: Color,
    pub intensity: f32,
    direction: Vec3,
}

impl DirectionalLight {
    /// `direction` is where the light travels towards, not where it comes from.
    pub fn new(direction: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            enabled: true,
            color,
            intensity,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction.normalize_or_zero();
    }
}

impl LightSource for DirectionalLight {
    fn contribute<S: Intersectable + ?Sized>(
        &self,
        ctx: LightSampleCtx,
        scene: &S,
        layers: CollisionLayers,
    ) -> Color {
        let wi = -self.direction;
        let dot = ctx.normal.dot(wi);
        if dot <= 0.0 {
            return Color::BLACK;
        }

        if ctx.occluded(scene, wi, f32::INFINITY, layers) {
            return Color::BLACK;
        }

        self.color * self.intensity * dot
    }

    fn validate(&self) -> Result<(), LightError> {
        validate_emission(self.color, self.intensity)?;
        validate_direction(self.direction)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::Vec3;

    use super::*;
    use crate::{
        light_sources::test_scene::{BlockedScene, EmptyScene, RecordingScene},
        ray::SHADOW_RAY_EPSILON,
    };

    fn sun() -> DirectionalLight {
        DirectionalLight::new(Vec3::NEG_Y, Color::WHITE, 1.0)
    }

    #[test]
    fn lights_surface_facing_it() {
        let ctx = LightSampleCtx::new(Vec3::ZERO, Vec3::Y);
        let color = sun().contribute(ctx, &EmptyScene, CollisionLayers::all());

        assert_eq!(color, Color::WHITE);
    }

    #[test]
    fn lambertian_term_scales_contribution() {
        let light = DirectionalLight::new(Vec3::NEG_Y, Color::new(1.0, 0.5, 0.0), 2.0);
        let ctx = LightSampleCtx::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 1.0).normalize());
        let color = light.contribute(ctx, &EmptyScene, CollisionLayers::all());

        assert_abs_diff_eq!(color.r(), 2.0 * core::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-5);
        assert_abs_diff_eq!(color.g(), core::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-5);
        assert_eq!(color.b(), 0.0);
    }

    #[test]
    fn back_facing_surface_is_black_regardless_of_shadow() {
        let ctx = LightSampleCtx::new(Vec3::ZERO, Vec3::NEG_Y);

        assert_eq!(
            sun().contribute(ctx, &EmptyScene, CollisionLayers::all()),
            Color::BLACK
        );
        assert_eq!(
            sun().contribute(ctx, &BlockedScene, CollisionLayers::all()),
            Color::BLACK
        );

        let grazing = LightSampleCtx::new(Vec3::ZERO, Vec3::X);
        assert_eq!(
            sun().contribute(grazing, &EmptyScene, CollisionLayers::all()),
            Color::BLACK
        );
    }

    #[test]
    fn occluder_casts_shadow() {
        let ctx = LightSampleCtx::new(Vec3::ZERO, Vec3::Y);

        assert_eq!(
            sun().contribute(ctx, &BlockedScene, CollisionLayers::all()),
            Color::BLACK
        );
    }

    #[test]
    fn zero_direction_fails_validation() {
        let light = DirectionalLight::new(Vec3::ZERO, Color::WHITE, 1.0);
        assert_eq!(light.validate(), Err(LightError::InvalidDirection));

        let light = DirectionalLight::new(Vec3::NEG_Y, Color::WHITE, -1.0);
        assert_eq!(light.validate(), Err(LightError::InvalidIntensity(-1.0)));
    }

    #[test]
    fn shadow_ray_points_at_the_light_without_bound() {
        let scene = RecordingScene::default();
        let normal = Vec3::new(0.0, 1.0, 1.0).normalize();
        let ctx = LightSampleCtx::new(Vec3::new(2.0, 0.0, 0.0), normal);

        sun().contribute(ctx, &scene, CollisionLayers::all());

        let queries = scene.queries();
        assert_eq!(queries.len(), 1);
        assert!(queries[0]
            .origin
            .abs_diff_eq(Vec3::new(2.0, 0.0, 0.0) + normal * SHADOW_RAY_EPSILON, 1e-7));
        assert_eq!(queries[0].direction, Vec3::Y);
        assert_eq!(queries[0].max_distance, f32::INFINITY);
    }
}
