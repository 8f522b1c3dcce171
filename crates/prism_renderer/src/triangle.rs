//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection and
//! flat shading: one face normal for the whole triangle.

use crate::{Intersection, Ray, Renderable};
use prism_math::{Interval, Vec3};

/// A triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length, or zero if degenerate)
    normal: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The face normal follows the winding `v0 -> v1 -> v2`. Collinear
    /// vertices give a zero normal and a triangle that is never hit.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let normal = edge1.cross(edge2).normalize_or_zero();

        Self { v0, v1, v2, normal }
    }
}

impl Renderable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        if self.is_degenerate() {
            return None;
        }

        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < 1e-8 {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        // Check if intersection is outside triangle (u parameter)
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        // Check if intersection is outside triangle (v parameter)
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        if !Interval::FORWARD.contains(t) {
            return None;
        }

        Some(Intersection::new(ray, self, t))
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn is_degenerate(&self) -> bool {
        self.normal == Vec3::ZERO
    }
}
