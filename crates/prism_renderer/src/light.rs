//! Light sources and the illumination they cast.

use crate::{Renderable, Renderer};
use prism_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Trait for lights that contribute colour to a surface point.
pub trait Light: Send + Sync {
    /// Colour this light casts onto `point` on `renderable`.
    ///
    /// Channels are not clamped; values above one are allowed here and are
    /// clamped only when the pixel is written. The renderer is passed in so
    /// a light may query the scene, though no light in this crate does.
    fn illuminate(&self, renderable: &dyn Renderable, point: Vec3, renderer: &Renderer) -> Color;
}

/// Ambient fill light.
///
/// Returns the same colour for every point, whatever the geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantLight {
    colour: Color,
}

impl ConstantLight {
    /// Create a new constant light with the given colour.
    pub fn new(colour: Color) -> Self {
        Self { colour }
    }
}

impl Light for ConstantLight {
    fn illuminate(&self, _renderable: &dyn Renderable, _point: Vec3, _renderer: &Renderer) -> Color {
        self.colour
    }
}

/// Point light with a Lambertian diffuse term.
///
/// There is no shadow test: a point facing the light is lit even when
/// another object sits between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongLight {
    position: Vec3,
    diffuse: Color,
}

impl PhongLight {
    /// Create a new Phong light with the given diffuse colour.
    pub fn new(position: Vec3, diffuse: Color) -> Self {
        Self { position, diffuse }
    }
}

impl Light for PhongLight {
    fn illuminate(&self, renderable: &dyn Renderable, point: Vec3, _renderer: &Renderer) -> Color {
        let normal = renderable.normal(point);
        let to_light = (self.position - point).normalize_or_zero();

        // Surfaces facing away receive nothing, never negative light
        let intensity = normal.dot(to_light).max(0.0);

        self.diffuse * intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0)
    }

    #[test]
    fn test_constant_light() {
        let renderer = Renderer::new(Vec3::ZERO);
        let light = ConstantLight::new(Color::new(0.2, 0.4, 0.6));
        let sphere = unit_sphere();

        // Independent of geometry, even on the side facing away
        for point in [Vec3::X, -Vec3::X, Vec3::Y] {
            assert_eq!(light.illuminate(&sphere, point, &renderer), Color::new(0.2, 0.4, 0.6));
        }
    }

    #[test]
    fn test_phong_light_facing() {
        let renderer = Renderer::new(Vec3::ZERO);
        let light = PhongLight::new(Vec3::new(0.0, 0.0, -5.0), Color::new(0.0, 0.5, 1.0));
        let sphere = unit_sphere();

        // Normal points straight at the light: full intensity
        let lit = light.illuminate(&sphere, -Vec3::Z, &renderer);
        assert!((lit - Color::new(0.0, 0.5, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_phong_light_cosine_falloff() {
        let renderer = Renderer::new(Vec3::ZERO);
        let light = PhongLight::new(Vec3::new(0.0, 100_000.0, 0.0), Color::ONE);
        let sphere = unit_sphere();

        // 60 degrees between normal and light direction
        let point = Vec3::new(3f32.sqrt() / 2.0, 0.5, 0.0);
        let lit = light.illuminate(&sphere, point, &renderer);
        assert!((lit.x - 0.5).abs() < 1e-3);
        assert_eq!(lit.x, lit.y);
        assert_eq!(lit.y, lit.z);
    }

    #[test]
    fn test_phong_light_facing_away_is_black() {
        let renderer = Renderer::new(Vec3::ZERO);
        let light = PhongLight::new(Vec3::new(0.0, 0.0, -5.0), Color::ONE);
        let sphere = unit_sphere();

        let points = [Vec3::Z, Vec3::new(0.6, 0.0, 0.8), Vec3::new(0.0, -0.6, 0.8)];
        for point in points {
            let lit = light.illuminate(&sphere, point, &renderer);
            assert_eq!(lit, Color::ZERO);
        }
    }

    #[test]
    fn test_phong_light_never_negative() {
        let renderer = Renderer::new(Vec3::ZERO);
        let light = PhongLight::new(Vec3::new(1.0, 2.0, -3.0), Color::new(1.0, 0.3, 0.7));
        let sphere = unit_sphere();

        for i in 0..32 {
            let angle = i as f32 * std::f32::consts::TAU / 32.0;
            let point = Vec3::new(angle.cos(), angle.sin(), 0.0);
            let lit = light.illuminate(&sphere, point, &renderer);
            assert!(lit.min_element() >= 0.0, "negative light at {point:?}: {lit:?}");
        }
    }
}
