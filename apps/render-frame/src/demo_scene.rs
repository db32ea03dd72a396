use std::sync::Arc;

use glam::Vec3;
use lumen::lumen_ray_tracer::{
    scene::{Collider, ColliderShape, Plane, SceneGeometry, Sphere},
    Color, CollisionLayers, DirectionalLight, Light, Material, PointLight, SpotLight,
};
use lumen::lumen_texture::Texture;

/// Textured floor with a few primitives resting on it.
pub fn build_scene(floor_texture: Arc<Texture>) -> SceneGeometry {
    let mut scene = SceneGeometry::new();

    scene.add(Collider::new(
        ColliderShape::Plane(Plane::new(Vec3::ZERO, Vec3::Y)),
        Some(Material::from_texture(floor_texture)),
    ));
    scene.add(Collider::new(
        ColliderShape::Sphere(Sphere::new(Vec3::new(-1.5, 1.0, 0.0), 1.0)),
        Some(Material::from_color(Color::new(0.6, 0.1, 0.1))),
    ));

    // No material, renders with the fallback color.
    scene.add(
        Collider::new(
            ColliderShape::Sphere(Sphere::new(Vec3::new(0.5, 0.5, 2.0), 0.5)),
            None,
        )
        .with_layers(CollisionLayers::DEFAULT | CollisionLayers::RAY_TRACING),
    );

    let cube_vertices = [-1.0f32, 1.0]
        .into_iter()
        .flat_map(|x| [0.0f32, 1.6].map(|y| (x, y)))
        .flat_map(|(x, y)| [-1.0f32, 1.0].map(|z| Vec3::new(x + 2.0, y, z - 0.5)))
        .collect::<Vec<_>>();
    scene.add_mesh(
        &cube_vertices,
        Some(Material::from_color(Color::new(0.1, 0.2, 0.6))),
    );

    scene
}

/// Lights as they are at `frame_idx`, the point light orbits the scene.
pub fn collect_lights(frame_idx: u32) -> Vec<Light> {
    let angle = frame_idx as f32 * 0.25;

    vec![
        DirectionalLight::new(
            Vec3::new(-0.4, -1.0, -0.3),
            Color::new(1.0, 0.95, 0.85),
            0.8,
        )
        .into(),
        PointLight::new(
            Vec3::new(3.0 * angle.cos(), 2.5, 3.0 * angle.sin()),
            6.0,
            Color::new(0.3, 0.5, 1.0),
            0.4,
        )
        .into(),
        SpotLight::new(
            Vec3::new(0.0, 4.0, 3.0),
            Vec3::new(0.0, -1.0, -0.6),
            8.0,
            40.0,
            Color::new(1.0, 0.6, 0.2),
            0.6,
        )
        .into(),
    ]
}
