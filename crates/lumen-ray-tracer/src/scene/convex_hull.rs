use glam::Vec3;

use crate::ray::Ray;

use super::ShapeHit;

/// The region `normal · p <= distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfSpace {
    pub normal: Vec3,
    pub distance: f32,
}

impl HalfSpace {
    pub fn new(normal: Vec3, point_on_plane: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            distance: normal.dot(point_on_plane),
        }
    }

    /// Same region with a unit normal, `None` when the normal has no direction.
    pub fn normalized(self) -> Option<Self> {
        let length = self.normal.length();
        if length == 0.0 || !length.is_finite() || !self.distance.is_finite() {
            return None;
        }

        Some(Self {
            normal: self.normal / length,
            distance: self.distance / length,
        })
    }
}

/// Convex volume bounded by planes, the collision proxy used for meshes.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull {
    half_spaces: Vec<HalfSpace>,
}

impl ConvexHull {
    /// Normals are rescaled to unit length, half-spaces without a usable normal are skipped.
    pub fn from_half_spaces(half_spaces: Vec<HalfSpace>) -> Self {
        let count = half_spaces.len();
        let half_spaces: Vec<_> = half_spaces
            .into_iter()
            .filter_map(HalfSpace::normalized)
            .collect();

        if half_spaces.len() < count {
            log::warn!(
                "Dropped {} degenerate half-spaces from a convex hull.",
                count - half_spaces.len()
            );
        }

        Self { half_spaces }
    }

    pub fn cuboid(center: Vec3, half_extents: Vec3) -> Self {
        let half_extents = half_extents.abs();
        let half_spaces = [Vec3::X, Vec3::Y, Vec3::Z]
            .into_iter()
            .flat_map(|axis| {
                let offset = axis * half_extents;
                [
                    HalfSpace::new(axis, center + offset),
                    HalfSpace::new(-axis, center - offset),
                ]
            })
            .collect();

        Self { half_spaces }
    }

    /// Axis aligned proxy enclosing every point, `None` for an empty point set.
    pub fn bounding_box(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));

        Some(Self::cuboid((min + max) * 0.5, (max - min) * 0.5))
    }

    pub fn half_spaces(&self) -> &[HalfSpace] {
        &self.half_spaces
    }

    pub fn contains(&self, point: Vec3) -> bool {
        self.half_spaces
            .iter()
            .all(|half_space| half_space.normal.dot(point) <= half_space.distance)
    }

    /// Entry point of `ray`, rays starting inside the hull never hit it.
    pub fn intersect(&self, ray: &Ray) -> Option<ShapeHit> {
        let direction = ray.direction();

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        let mut entry_normal = None;

        for half_space in &self.half_spaces {
            let denom = half_space.normal.dot(direction);
            let dist = half_space.distance - half_space.normal.dot(ray.origin);

            if denom == 0.0 {
                // Parallel and outside this plane.
                if dist < 0.0 {
                    return None;
                }
                continue;
            }

            let t = dist / denom;
            if denom < 0.0 {
                if t > t_near {
                    t_near = t;
                    entry_normal = Some(half_space.normal);
                }
            } else if t < t_far {
                t_far = t;
            }

            if t_near > t_far {
                return None;
            }
        }

        let normal = entry_normal?;
        if t_near <= 0.0 {
            return None;
        }

        let point = ray.at(t_near);
        let (tangent, bitangent) = normal.any_orthonormal_pair();
        Some(ShapeHit {
            distance: t_near,
            normal,
            tex_coord: glam::Vec2::new(point.dot(tangent), point.dot(bitangent)),
        })
    }
}
