//! Renderable trait for objects a ray can hit.

use crate::{Intersection, Ray};
use prism_math::Vec3;

/// Trait for scene objects that can be hit by rays.
pub trait Renderable: Send + Sync {
    /// Find the nearest intersection of `ray` in front of its origin.
    ///
    /// The ray direction is expected to be unit length. Returns `None` on a
    /// miss, and for degenerate objects that cannot be hit at all.
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>>;

    /// Get the outward surface normal (unit length) at `point`.
    ///
    /// `point` must lie on the surface; this is not checked.
    fn normal(&self, point: Vec3) -> Vec3;

    /// Whether the shape is too degenerate to ever be hit.
    fn is_degenerate(&self) -> bool {
        false
    }
}
