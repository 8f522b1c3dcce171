//! Core single-bounce renderer.
//!
//! Implements per-pixel ray tracing with:
//! - Pinhole primary rays, one per pixel
//! - Nearest-hit search over every renderable
//! - Light contributions averaged over the light count

use crate::{Color, ConstantLight, Intersection, Light, PhongLight, Renderable, Sphere, Triangle};
use prism_core::scene::to_vec3;
use prism_core::{LightDescription, ObjectDescription, SceneDescription, SceneResult};
use prism_math::{Interval, Ray, Vec3};

/// Pixel value for rays that hit nothing.
pub const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Map a colour to 8-bit RGB.
///
/// Each channel is clamped to [0, 1] and rounded to the nearest of 256 steps.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let to_u8 = |c: f32| (Interval::UNIT.clamp(c) * 255.0).round() as u8;
    [to_u8(color.x), to_u8(color.y), to_u8(color.z)]
}

/// A camera position plus the lights and renderables of a scene.
///
/// The scene is built up front; rendering only takes `&self`, so every
/// pixel is independent of every other.
pub struct Renderer {
    camera: Vec3,
    lights: Vec<Box<dyn Light>>,
    renderables: Vec<Box<dyn Renderable>>,
}

impl Renderer {
    /// Create an empty scene viewed from `camera`.
    pub fn new(camera: Vec3) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            renderables: Vec::new(),
        }
    }

    /// Build a renderer from a scene description.
    ///
    /// The description is validated first, so degenerate objects are
    /// reported here instead of silently rendering as empty space.
    pub fn from_scene(scene: &SceneDescription) -> SceneResult<Self> {
        scene.validate()?;

        let mut renderer = Self::new(scene.camera_position());

        for light in &scene.lights {
            match *light {
                LightDescription::Constant { colour } => {
                    log::debug!("Adding constant light {:?}", colour);
                    renderer.add_light(Box::new(ConstantLight::new(to_vec3(colour))));
                }
                LightDescription::Phong { position, diffuse } => {
                    log::debug!("Adding phong light at {:?}", position);
                    renderer.add_light(Box::new(PhongLight::new(
                        to_vec3(position),
                        to_vec3(diffuse),
                    )));
                }
            }
        }

        for object in &scene.objects {
            match *object {
                ObjectDescription::Sphere { center, radius } => {
                    log::debug!("Adding sphere at {:?}, radius {}", center, radius);
                    renderer.add_renderable(Box::new(Sphere::new(to_vec3(center), radius)));
                }
                ObjectDescription::Triangle { vertices } => {
                    log::debug!("Adding triangle {:?}", vertices);
                    let [v0, v1, v2] = vertices.map(to_vec3);
                    renderer.add_renderable(Box::new(Triangle::new(v0, v1, v2)));
                }
            }
        }

        if renderer.lights.is_empty() {
            log::warn!("Renderer has no lights; every hit will shade black");
        }

        Ok(renderer)
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Box<dyn Light>) {
        self.lights.push(light);
    }

    /// Add a renderable to the scene.
    ///
    /// Degenerate renderables are accepted with a warning; they are never hit.
    pub fn add_renderable(&mut self, renderable: Box<dyn Renderable>) {
        if renderable.is_degenerate() {
            log::warn!(
                "Renderable {} is degenerate and will never be hit",
                self.renderables.len()
            );
        }
        self.renderables.push(renderable);
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Get the number of renderables.
    pub fn renderable_count(&self) -> usize {
        self.renderables.len()
    }

    /// Find the nearest hit along a ray.
    ///
    /// `direction` is normalized before testing; a zero-length direction
    /// hits nothing. Renderables in `exclude` (compared by address) are
    /// skipped. When two hits are equally near, the one added first wins.
    pub fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        exclude: &[&dyn Renderable],
    ) -> Option<Intersection<'_>> {
        let ray = Ray::new(origin, direction).normalized()?;

        self.renderables
            .iter()
            .map(|r| r.as_ref())
            .filter(|&r| !is_excluded(r, exclude))
            .filter_map(|r| r.intersect(&ray))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// Compute the colour at an intersection.
    ///
    /// Contributions are averaged, not summed, so adding lights never makes
    /// the image brighter than its brightest light. No lights gives black.
    pub fn shade(&self, hit: &Intersection<'_>) -> Color {
        if self.lights.is_empty() {
            return Color::ZERO;
        }

        let total: Color = self
            .lights
            .iter()
            .map(|light| light.illuminate(hit.renderable, hit.point, self))
            .sum();

        total / self.lights.len() as f32
    }

    /// Render pixel (x, y) of a width x height frame.
    ///
    /// The primary ray direction is `(x/width - 0.5, y/height - 0.5, 1)`:
    /// a pinhole at the camera with unit focal distance and no aspect or
    /// field-of-view correction. Misses return [`BACKGROUND`].
    pub fn render(&self, x: u32, y: u32, width: u32, height: u32) -> [u8; 3] {
        let direction = Vec3::new(
            x as f32 / width as f32 - 0.5,
            y as f32 / height as f32 - 0.5,
            1.0,
        );

        match self.raycast(self.camera, direction, &[]) {
            Some(hit) => color_to_rgb(self.shade(&hit)),
            None => BACKGROUND,
        }
    }
}

fn is_excluded(renderable: &dyn Renderable, exclude: &[&dyn Renderable]) -> bool {
    exclude
        .iter()
        .any(|&e| std::ptr::addr_eq(e, renderable))
}
