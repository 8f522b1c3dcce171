use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The ray is the half-line `origin + t * direction` for `t >= 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is stored as given.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Return a copy of this ray with a unit-length direction.
    ///
    /// Returns `None` if the direction has zero length (or is not finite),
    /// since such a ray points nowhere.
    pub fn normalized(&self) -> Option<Self> {
        self.direction
            .try_normalize()
            .map(|direction| Self::new(self.origin, direction))
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_normalized() {
        let ray = Ray::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 3.0, 4.0));
        let unit = ray.normalized().unwrap();

        assert_eq!(unit.origin(), ray.origin());
        assert!((unit.direction().length() - 1.0).abs() < 1e-6);
        assert!((unit.direction() - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_ray_normalized_zero_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(ray.normalized().is_none());
    }
}
