use core::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::{
    intersection::{CollisionLayers, Intersectable},
    material::Material,
    ray::{Hit, Ray},
};

pub mod convex_hull;
pub use convex_hull::{ConvexHull, HalfSpace};

/// Intersection of a ray with a single shape, normal facing the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeHit {
    pub distance: f32,
    pub normal: Vec3,
    pub tex_coord: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Entry point of `ray`, rays starting inside the sphere never hit it.
    pub fn intersect(&self, ray: &Ray) -> Option<ShapeHit> {
        let oc = ray.origin - self.center;
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;
        if c <= 0.0 || b > 0.0 {
            return None;
        }

        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let distance = -b - discriminant.sqrt();
        if !distance.is_finite() {
            return None;
        }
        let normal = (ray.at(distance) - self.center).normalize();
        let tex_coord = Vec2::new(
            0.5 + normal.z.atan2(normal.x) / (2.0 * PI),
            0.5 + normal.y.clamp(-1.0, 1.0).asin() / PI,
        );

        Some(ShapeHit {
            distance,
            normal,
            tex_coord,
        })
    }
}

/// Infinite two-sided plane, never hit when its normal is degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
        }
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    /// Unit length, or zero for a plane built from a zero or non-finite normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn intersect(&self, ray: &Ray) -> Option<ShapeHit> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < 1e-8 {
            return None;
        }

        let distance = self.normal.dot(self.point - ray.origin) / denom;
        if distance <= 0.0 || !distance.is_finite() {
            return None;
        }

        let normal = if denom < 0.0 {
            self.normal
        } else {
            -self.normal
        };

        let local = ray.at(distance) - self.point;
        let (tangent, bitangent) = self.normal.any_orthonormal_pair();
        Some(ShapeHit {
            distance,
            normal,
            tex_coord: Vec2::new(local.dot(tangent), local.dot(bitangent)),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColliderShape {
    Sphere(Sphere),
    Plane(Plane),
    ConvexHull(ConvexHull),
}

impl ColliderShape {
    pub fn intersect(&self, ray: &Ray) -> Option<ShapeHit> {
        match self {
            Self::Sphere(sphere) => sphere.intersect(ray),
            Self::Plane(plane) => plane.intersect(ray),
            Self::ConvexHull(hull) => hull.intersect(ray),
        }
    }
}

/// Renderable surface: its collision proxy and how it looks.
#[derive(Debug, Clone)]
pub struct Collider {
    pub shape: ColliderShape,
    pub material: Option<Material>,
    pub layers: CollisionLayers,
}

impl Collider {
    pub fn new(shape: ColliderShape, material: Option<Material>) -> Self {
        Self {
            shape,
            material,
            layers: CollisionLayers::DEFAULT,
        }
    }

    pub fn with_layers(mut self, layers: CollisionLayers) -> Self {
        self.layers = layers;
        self
    }
}

/// Linear-scan intersection service over a list of colliders.
#[derive(Debug, Clone, Default)]
pub struct SceneGeometry {
    colliders: Vec<Collider>,
}

impl SceneGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, collider: Collider) -> usize {
        self.colliders.push(collider);
        self.colliders.len() - 1
    }

    /// Prepares a convex proxy for a mesh from its vertex positions.
    pub fn add_mesh(&mut self, vertices: &[Vec3], material: Option<Material>) -> Option<usize> {
        let Some(hull) = ConvexHull::bounding_box(vertices) else {
            log::warn!("Skipping mesh without vertices.");
            return None;
        };

        Some(self.add(Collider::new(ColliderShape::ConvexHull(hull), material)))
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    fn candidates(&self, layers: CollisionLayers) -> impl Iterator<Item = &Collider> {
        self.colliders
            .iter()
            .filter(move |collider| collider.layers.intersects(layers))
    }
}

impl Intersectable for SceneGeometry {
    fn cast(&self, ray: &Ray, layers: CollisionLayers) -> Option<Hit> {
        let (collider, shape_hit) = self
            .candidates(layers)
            .filter_map(|collider| Some((collider, collider.shape.intersect(ray)?)))
            .min_by(|(_, a), (_, b)| a.distance.total_cmp(&b.distance))?;

        Some(Hit {
            point: ray.at(shape_hit.distance),
            normal: shape_hit.normal,
            distance: shape_hit.distance,
            tex_coord: Some(shape_hit.tex_coord),
            material: collider.material.clone(),
        })
    }

    fn occluded(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: CollisionLayers,
    ) -> bool {
        let ray = Ray::new(origin, direction);

        self.candidates(layers).any(|collider| {
            collider
                .shape
                .intersect(&ray)
                .is_some_and(|hit| hit.distance < max_distance)
        })
    }
}
