use glam::Vec3;

use crate::{
    config::RenderConfig,
    intersection::{CollisionLayers, Intersectable},
    light_sources::{Light, LightSampleCtx},
    ray::Ray,
    Color,
};

/// Ambient plus the sum of every enabled light's contribution at `point`.
pub fn shade<S: Intersectable + ?Sized>(
    point: Vec3,
    normal: Vec3,
    lights: &[Light],
    ambient: Color,
    scene: &S,
    layers: CollisionLayers,
) -> Color {
    let ctx = LightSampleCtx::new(point, normal);

    lights
        .iter()
        .filter(|light| light.enabled())
        .fold(ambient, |color, light| {
            color + light.contribute(ctx, scene, layers)
        })
}

/// Resolves the color seen along a primary ray.
///
/// A miss still gets shaded, at the origin with a zero normal, which leaves only the ambient term.
pub fn trace_ray<S: Intersectable + ?Sized>(
    ray: &Ray,
    config: &RenderConfig,
    lights: &[Light],
    scene: &S,
) -> Color {
    let layers = config.collision_layers();
    let hit = scene.cast(ray, layers);

    let (base_color, point, normal) = match &hit {
        Some(hit) => (
            hit.surface_color(config.fallback_color()),
            hit.point,
            hit.normal,
        ),
        None => (Color::BLACK, Vec3::ZERO, Vec3::ZERO),
    };

    let light = shade(point, normal, lights, config.ambient(), scene, layers);
    config.compositing().apply(base_color, light)
}
