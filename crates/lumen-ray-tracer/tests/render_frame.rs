use std::sync::Arc;

use glam::{UVec2, Vec3};
use lumen_camera::{Camera, Transform, UP};
use lumen_ray_tracer::{
    light_sources::LightSampleCtx,
    render_frame,
    scene::{Collider, ColliderShape, ConvexHull, Plane, SceneGeometry, Sphere},
    CollisionLayers, Color, DirectionalLight, FrameBuffer, FrameSnapshot, Light, Material,
    PointLight, RenderConfig,
};
use lumen_texture::Texture;

fn camera_at(eye: Vec3, target: Vec3) -> Camera {
    Camera::new(
        Transform::looking_at(eye, target, UP),
        45.0,
        0.1,
        100.0,
        UVec2::new(8, 6),
    )
}

fn floor(material: Material) -> Collider {
    Collider::new(
        ColliderShape::Plane(Plane::new(Vec3::ZERO, Vec3::Y)),
        Some(material),
    )
}

fn sun() -> Light {
    DirectionalLight::new(Vec3::NEG_Y, Color::WHITE, 1.0).into()
}

fn enabled_config() -> RenderConfig {
    RenderConfig::builder().enabled(true).build().unwrap()
}

fn render(
    config: &RenderConfig,
    camera: &Camera,
    lights: Vec<Light>,
    scene: &SceneGeometry,
) -> FrameBuffer {
    let snapshot = FrameSnapshot::new(camera, lights, scene).unwrap();
    render_frame(config, &snapshot).unwrap().unwrap()
}

#[test]
fn unoccluded_floor_under_the_sun_is_white() {
    let mut scene = SceneGeometry::new();
    scene.add(floor(Material::from_color(Color::BLACK)));
    let camera = camera_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);

    let frame = render(&enabled_config(), &camera, vec![sun()], &scene);

    assert!(frame
        .pixels()
        .iter()
        .all(|pixel| pixel.0.abs_diff_eq(Vec3::ONE, 1e-5)));
}

#[test]
fn occluder_above_the_floor_blacks_it_out() {
    let mut scene = SceneGeometry::new();
    scene.add(floor(Material::from_color(Color::BLACK)));
    scene.add(Collider::new(
        ColliderShape::ConvexHull(ConvexHull::cuboid(
            Vec3::new(0.0, 4.0, 0.0),
            Vec3::new(50.0, 0.5, 50.0),
        )),
        None,
    ));
    let camera = camera_at(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO);

    let frame = render(&enabled_config(), &camera, vec![sun()], &scene);

    assert!(frame.pixels().iter().all(|pixel| *pixel == Color::BLACK));
}

#[test]
fn occluders_outside_the_layer_mask_cast_no_shadow() {
    let mut scene = SceneGeometry::new();
    scene.add(floor(Material::from_color(Color::BLACK)));
    scene.add(
        Collider::new(
            ColliderShape::ConvexHull(ConvexHull::cuboid(
                Vec3::new(0.0, 4.0, 0.0),
                Vec3::new(50.0, 0.5, 50.0),
            )),
            None,
        )
        .with_layers(CollisionLayers::RAY_TRACING),
    );
    let camera = camera_at(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO);
    let config = RenderConfig::builder()
        .enabled(true)
        .collision_layers(CollisionLayers::DEFAULT)
        .build()
        .unwrap();

    let frame = render(&config, &camera, vec![sun()], &scene);

    assert!(frame
        .pixels()
        .iter()
        .all(|pixel| pixel.0.abs_diff_eq(Vec3::ONE, 1e-5)));
}

#[test]
fn sky_pixels_only_receive_ambient() {
    let mut scene = SceneGeometry::new();
    scene.add(floor(Material::from_color(Color::WHITE)));
    let camera = camera_at(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 10.0, 0.0));
    let config = RenderConfig::builder()
        .enabled(true)
        .ambient(Color::new(0.2, 0.2, 0.2))
        .build()
        .unwrap();

    let frame = render(&config, &camera, vec![sun()], &scene);

    assert!(frame
        .pixels()
        .iter()
        .all(|pixel| *pixel == Color::new(0.2, 0.2, 0.2)));
}

#[test]
fn light_sets_add_up() {
    let mut scene = SceneGeometry::new();
    scene.add(floor(Material::from_color(Color::BLACK)));
    scene.add(Collider::new(
        ColliderShape::Sphere(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0)),
        Some(Material::from_color(Color::BLACK)),
    ));
    let camera = camera_at(Vec3::new(0.0, 3.0, 6.0), Vec3::ZERO);
    let a: Light = sun();
    let b: Light =
        DirectionalLight::new(Vec3::new(-1.0, -1.0, -1.0), Color::new(0.0, 0.3, 1.0), 0.5).into();

    let both = render(&enabled_config(), &camera, vec![a.clone(), b.clone()], &scene);
    let only_a = render(&enabled_config(), &camera, vec![a], &scene);
    let only_b = render(&enabled_config(), &camera, vec![b], &scene);

    for ((both, a), b) in both
        .pixels()
        .iter()
        .zip(only_a.pixels())
        .zip(only_b.pixels())
    {
        assert!(both.0.abs_diff_eq((*a + *b).0, 1e-5));
    }
}

#[test]
fn supersampled_frames_downsample_to_the_native_frame() {
    let mut scene = SceneGeometry::new();
    scene.add(floor(Material::from_color(Color::new(0.1, 0.1, 0.1))));
    scene.add(Collider::new(
        ColliderShape::Sphere(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0)),
        Some(Material::from_color(Color::new(0.3, 0.0, 0.0))),
    ));
    let camera = camera_at(Vec3::new(0.0, 3.0, 6.0), Vec3::ZERO);
    let lights = vec![
        sun(),
        PointLight::new(Vec3::new(2.0, 3.0, 2.0), 10.0, Color::WHITE, 0.5).into(),
    ];
    let native_config = enabled_config();
    let supersampled_config = RenderConfig::builder()
        .enabled(true)
        .resolution_multiplier(2)
        .build()
        .unwrap();

    let native = render(&native_config, &camera, lights.clone(), &scene);
    let supersampled = render(&supersampled_config, &camera, lights, &scene);

    assert_eq!(
        (supersampled.width(), supersampled.height()),
        (native.width() * 2, native.height() * 2)
    );
    for y in 0..supersampled.height() {
        for x in 0..supersampled.width() {
            assert_eq!(supersampled.get(x, y), native.get(x / 2, y / 2));
        }
    }

    let downsampled = supersampled.downsample(2);
    for (a, b) in downsampled.pixels().iter().zip(native.pixels()) {
        assert!(a.0.abs_diff_eq(b.0, 1e-5));
    }
}

#[test]
fn textured_surfaces_show_their_texture() {
    let texture = Arc::new(Texture::checkerboard(2, 2, [255, 255, 255], [0, 0, 0]));
    let mut scene = SceneGeometry::new();
    scene.add(floor(Material::from_texture(texture)));
    let camera = camera_at(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO);

    let frame = render(&enabled_config(), &camera, vec![], &scene);

    let brightest = frame
        .pixels()
        .iter()
        .map(|pixel| pixel.r())
        .fold(0.0, f32::max);
    let darkest = frame
        .pixels()
        .iter()
        .map(|pixel| pixel.r())
        .fold(1.0, f32::min);
    assert!(brightest > darkest);
}

#[test]
fn only_occluders_between_point_and_light_cast_shadows() {
    let light: Light = PointLight::new(Vec3::new(0.0, 2.0, 0.0), 4.0, Color::WHITE, 1.0).into();
    let ctx = LightSampleCtx::new(Vec3::ZERO, Vec3::Y);
    let mut scene = SceneGeometry::new();
    scene.add(Collider::new(
        ColliderShape::Sphere(Sphere::new(Vec3::new(0.0, 3.0, 0.0), 0.5)),
        None,
    ));

    // dot = 1, attenuation = 1 - 4 / 2 = -1
    let beyond = light.contribute(ctx, &scene, CollisionLayers::all());
    assert!(beyond.0.abs_diff_eq(Vec3::splat(-1.0), 1e-5));

    scene.add(Collider::new(
        ColliderShape::Sphere(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 0.5)),
        None,
    ));
    assert_eq!(
        light.contribute(ctx, &scene, CollisionLayers::all()),
        Color::BLACK
    );
}
