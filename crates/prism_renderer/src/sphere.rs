//! Sphere primitive for ray tracing.

use crate::{Intersection, Ray, Renderable};
use prism_math::{Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// A sphere with a radius that is not positive is kept as given but is
    /// never intersected.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Renderable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        if self.is_degenerate() {
            return None;
        }

        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // a > 0, so near <= far. Take the nearest root in front of the origin.
        let near = (-b - sqrtd) / (2.0 * a);
        let far = (-b + sqrtd) / (2.0 * a);
        let t = [near, far]
            .into_iter()
            .find(|&t| Interval::FORWARD.contains(t))?;

        Some(Intersection::new(ray, self, t))
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }

    fn is_degenerate(&self) -> bool {
        !(self.radius > 0.0 && self.radius.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_distance() {
        // Center 5 units down +Z, radius 1: front surface at t = 4
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-5);
        assert!((hit.point - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-5);
        assert_eq!(hit.origin, Vec3::ZERO);
        assert_eq!(hit.direction, Vec3::Z);
    }

    #[test]
    fn test_sphere_hit_off_axis() {
        let center = Vec3::new(1.0, -2.0, 3.0);
        let sphere = Sphere::new(center, 0.75);
        let origin = Vec3::new(-2.0, 1.0, -4.0);
        let to_center = center - origin;
        let ray = Ray::new(origin, to_center.normalize());

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.distance - (to_center.length() - 0.75)).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);

        // Closest approach to the center is 2 > radius
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_origin_inside() {
        // Near root is behind the origin, so the far root is used
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_degenerate() {
        assert!(!Sphere::new(Vec3::ZERO, 1.0).is_degenerate());
        assert!(Sphere::new(Vec3::ZERO, 0.0).is_degenerate());
        assert!(Sphere::new(Vec3::ZERO, f32::NAN).is_degenerate());

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 0.0)
            .intersect(&ray)
            .is_none());
        assert!(Sphere::new(Vec3::new(0.0, 0.0, 5.0), -1.0)
            .intersect(&ray)
            .is_none());

        let zero_dir = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0)
            .intersect(&zero_dir)
            .is_none());
    }

    #[test]
    fn test_sphere_normal() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let sphere = Sphere::new(center, 2.0);

        let directions = [
            Vec3::X,
            -Vec3::Y,
            Vec3::Z,
            Vec3::new(1.0, 1.0, 1.0).normalize(),
            Vec3::new(-0.3, 0.8, -0.2).normalize(),
        ];
        for dir in directions {
            let point = center + dir * 2.0;
            let normal = sphere.normal(point);
            assert!((normal.length() - 1.0).abs() < 1e-5);
            assert!(normal.dot(point - center) > 0.0);
            assert!((normal - dir).length() < 1e-5);
        }
    }
}
