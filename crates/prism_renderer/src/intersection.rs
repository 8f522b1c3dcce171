//! Intersection record for a single ray-object hit.

use std::fmt;

use crate::{Renderable, Ray};
use prism_math::Vec3;

/// Record of a ray-object intersection.
///
/// Only produced by a successful [`Renderable::intersect`]. It borrows the
/// renderable that was hit, so it lives no longer than the scene.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// Origin of the ray that produced the hit
    pub origin: Vec3,
    /// Direction of the ray (unit length when cast by the renderer)
    pub direction: Vec3,
    /// The object that was hit
    pub renderable: &'a dyn Renderable,
    /// Point of intersection
    pub point: Vec3,
    /// Distance along the ray to the hit point
    pub distance: f32,
}

impl<'a> Intersection<'a> {
    /// Create a record for a hit at `distance` along `ray`.
    pub fn new(ray: &Ray, renderable: &'a dyn Renderable, distance: f32) -> Self {
        Self {
            origin: ray.origin(),
            direction: ray.direction(),
            renderable,
            point: ray.at(distance),
            distance,
        }
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("origin", &self.origin)
            .field("direction", &self.direction)
            .field("point", &self.point)
            .field("distance", &self.distance)
            .finish_non_exhaustive()
    }
}
