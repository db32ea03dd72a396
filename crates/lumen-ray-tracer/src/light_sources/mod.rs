use glam::Vec3;

use crate::{
    error::LightError,
    intersection::{CollisionLayers, Intersectable},
    ray::SHADOW_RAY_EPSILON,
    Color,
};

pub mod directional_light;
pub mod point_light;
pub mod spot_light;

pub use directional_light::DirectionalLight;
pub use point_light::PointLight;
pub use spot_light::SpotLight;

/// Surface point being lit.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightSampleCtx {
    pub point: Vec3,
    pub normal: Vec3,
}

impl LightSampleCtx {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    pub fn shadow_ray_origin(&self) -> Vec3 {
        self.point + self.normal * SHADOW_RAY_EPSILON
    }

    fn occluded<S: Intersectable + ?Sized>(
        &self,
        scene: &S,
        direction: Vec3,
        max_distance: f32,
        layers: CollisionLayers,
    ) -> bool {
        scene.occluded(self.shadow_ray_origin(), direction, max_distance, layers)
    }
}

pub trait LightSource {
    /// Radiance this light adds at `ctx`, black when it is facing away, out of range or shadowed.
    fn contribute<S: Intersectable + ?Sized>(
        &self,
        ctx: LightSampleCtx,
        scene: &S,
        layers: CollisionLayers,
    ) -> Color;

    fn validate(&self) -> Result<(), LightError>;
}

/// Every light model the shading engine knows how to evaluate.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
}

impl Light {
    pub fn enabled(&self) -> bool {
        match self {
            Self::Directional(light) => light.enabled,
            Self::Point(light) => light.enabled,
            Self::Spot(light) => light.enabled,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        match self {
            Self::Directional(light) => light.enabled = enabled,
            Self::Point(light) => light.enabled = enabled,
            Self::Spot(light) => light.enabled = enabled,
        }
    }

    pub fn contribute<S: Intersectable + ?Sized>(
        &self,
        ctx: LightSampleCtx,
        scene: &S,
        layers: CollisionLayers,
    ) -> Color {
        match self {
            Self::Directional(light) => light.contribute(ctx, scene, layers),
            Self::Point(light) => light.contribute(ctx, scene, layers),
            Self::Spot(light) => light.contribute(ctx, scene, layers),
        }
    }

    pub fn validate(&self) -> Result<(), LightError> {
        match self {
            Self::Directional(light) => light.validate(),
            Self::Point(light) => light.validate(),
            Self::Spot(light) => light.validate(),
        }
    }
}

impl From<DirectionalLight> for Light {
    fn from(light: DirectionalLight) -> Self {
        Self::Directional(light)
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Self::Point(light)
    }
}

impl From<SpotLight> for Light {
    fn from(light: SpotLight) -> Self {
        Self::Spot(light)
    }
}

fn validate_emission(color: Color, intensity: f32) -> Result<(), LightError> {
    if !color.is_finite() || !color.is_non_negative() {
        return Err(LightError::InvalidColor(color.to_array()));
    }
    if !intensity.is_finite() || intensity < 0.0 {
        return Err(LightError::InvalidIntensity(intensity));
    }
    Ok(())
}

fn validate_position(position: Vec3) -> Result<(), LightError> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(LightError::InvalidPosition(position.to_array()))
    }
}

fn validate_range(range: f32) -> Result<(), LightError> {
    if range.is_finite() && range > 0.0 {
        Ok(())
    } else {
        Err(LightError::InvalidRange(range))
    }
}

fn validate_direction(direction: Vec3) -> Result<(), LightError> {
    if direction.is_finite() && direction.length_squared() > 0.0 {
        Ok(())
    } else {
        Err(LightError::InvalidDirection)
    }
}

#[cfg(test)]
pub(crate) mod test_scene {
    use std::sync::Mutex;

    use glam::Vec3;

    use crate::{
        intersection::{CollisionLayers, Intersectable},
        ray::{Hit, Ray},
    };

    /// Nothing to hit.
    pub struct EmptyScene;

    impl Intersectable for EmptyScene {
        fn cast(&self, _ray: &Ray, _layers: CollisionLayers) -> Option<Hit> {
            None
        }
    }

    /// Reports every shadow query as blocked.
    pub struct BlockedScene;

    impl Intersectable for BlockedScene {
        fn cast(&self, ray: &Ray, _layers: CollisionLayers) -> Option<Hit> {
            Some(Hit {
                point: ray.at(0.5),
                normal: -ray.direction(),
                distance: 0.5,
                tex_coord: None,
                material: None,
            })
        }

        fn occluded(
            &self,
            _origin: Vec3,
            _direction: Vec3,
            _max_distance: f32,
            _layers: CollisionLayers,
        ) -> bool {
            true
        }
    }

    /// Arguments of one `occluded` call.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct ShadowQuery {
        pub origin: Vec3,
        pub direction: Vec3,
        pub max_distance: f32,
    }

    /// Never occluded, remembers every shadow query it answers.
    #[derive(Default)]
    pub struct RecordingScene {
        queries: Mutex<Vec<ShadowQuery>>,
    }

    impl RecordingScene {
        pub fn queries(&self) -> Vec<ShadowQuery> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl Intersectable for RecordingScene {
        fn cast(&self, _ray: &Ray, _layers: CollisionLayers) -> Option<Hit> {
            None
        }

        fn occluded(
            &self,
            origin: Vec3,
            direction: Vec3,
            max_distance: f32,
            _layers: CollisionLayers,
        ) -> bool {
            self.queries.lock().unwrap().push(ShadowQuery {
                origin,
                direction,
                max_distance,
            });
            false
        }
    }
}
