use bitflags::bitflags;
use glam::Vec3;

use crate::ray::{Hit, Ray};

bitflags! {
    /// Filter restricting which geometry a query considers.
    ///
    /// Bits other than the named ones are kept as-is and handed to the intersection service.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionLayers: u32 {
        const DEFAULT = 1 << 0;
        const RAY_TRACING = 1 << 31;

        const _ = !0;
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::all()
    }
}

/// Ray queries against externally owned scene geometry.
///
/// Must not be mutated while a frame is rendering, implementations are only ever borrowed immutably.
pub trait Intersectable: Send + Sync {
    /// Nearest hit along `ray` among geometry on `layers`.
    fn cast(&self, ray: &Ray, layers: CollisionLayers) -> Option<Hit>;

    /// Whether any surface lies strictly between `origin` and `origin + direction * max_distance`.
    ///
    /// `max_distance` may be `f32::INFINITY`.
    fn occluded(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: CollisionLayers,
    ) -> bool {
        self.cast(&Ray::new(origin, direction), layers)
            .is_some_and(|hit| hit.distance < max_distance)
    }
}

impl<T: Intersectable + ?Sized> Intersectable for &T {
    fn cast(&self, ray: &Ray, layers: CollisionLayers) -> Option<Hit> {
        (**self).cast(ray, layers)
    }

    fn occluded(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: CollisionLayers,
    ) -> bool {
        (**self).occluded(origin, direction, max_distance, layers)
    }
}
