//! Scene description types.
//!
//! A scene description is plain data: a camera position, image settings,
//! and ordered lists of lights and objects. The renderer turns it into
//! renderable objects; nothing here knows how to trace a ray.

use prism_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::loader::{SceneError, SceneResult};

/// Image settings for a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
        }
    }
}

impl RenderConfig {
    /// Create a config for the given resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A light source in the scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightDescription {
    /// Ambient fill light with a fixed colour. It has no position.
    Constant {
        #[serde(default = "white")]
        colour: [f32; 3],
    },
    /// Diffuse point light.
    Phong {
        position: [f32; 3],
        #[serde(default = "white")]
        diffuse: [f32; 3],
    },
}

/// A renderable object in the scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectDescription {
    Sphere { center: [f32; 3], radius: f32 },
    Triangle { vertices: [[f32; 3]; 3] },
}

/// A complete scene: camera, lights, objects and image settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Image settings
    pub config: RenderConfig,

    /// Camera position; rays are cast from here towards +Z
    pub camera: [f32; 3],

    /// Lights, in evaluation order
    pub lights: Vec<LightDescription>,

    /// Objects, in intersection order
    pub objects: Vec<ObjectDescription>,
}

fn white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Convert a scene file triple into a vector.
#[inline]
pub fn to_vec3(v: [f32; 3]) -> Vec3 {
    Vec3::from_array(v)
}

impl SceneDescription {
    /// The built-in scene used when no scene file is given.
    ///
    /// A single sphere in front of the camera, lit by a blue point light
    /// from below and a dim ambient fill.
    pub fn demo() -> Self {
        Self {
            config: RenderConfig::default(),
            camera: [0.0, 0.0, 0.0],
            lights: vec![
                LightDescription::Phong {
                    position: [0.5, -1.0, 3.5],
                    diffuse: [0.0, 0.0, 1.0],
                },
                LightDescription::Constant {
                    colour: [0.1, 0.1, 0.1],
                },
            ],
            objects: vec![ObjectDescription::Sphere {
                center: [0.0, 0.0, 4.0],
                radius: 0.5,
            }],
        }
    }

    /// Camera position as a vector.
    pub fn camera_position(&self) -> Vec3 {
        to_vec3(self.camera)
    }

    /// Check the scene for values the renderer cannot use.
    ///
    /// Rejects empty images, non-finite coordinates, non-positive sphere
    /// radii and triangles whose vertices are collinear.
    pub fn validate(&self) -> SceneResult<()> {
        if self.config.width == 0 || self.config.height == 0 {
            return Err(SceneError::Invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.config.width, self.config.height
            )));
        }

        check_finite("camera", self.camera)?;

        for (i, light) in self.lights.iter().enumerate() {
            match light {
                LightDescription::Constant { colour } => {
                    check_finite(&format!("light {i} colour"), *colour)?;
                }
                LightDescription::Phong { position, diffuse } => {
                    check_finite(&format!("light {i} position"), *position)?;
                    check_finite(&format!("light {i} colour"), *diffuse)?;
                }
            }
        }

        for (i, object) in self.objects.iter().enumerate() {
            match object {
                ObjectDescription::Sphere { center, radius } => {
                    check_finite(&format!("object {i} center"), *center)?;
                    if !(radius.is_finite() && *radius > 0.0) {
                        return Err(SceneError::Invalid(format!(
                            "object {i}: sphere radius must be positive, got {radius}"
                        )));
                    }
                }
                ObjectDescription::Triangle { vertices } => {
                    for (j, vertex) in vertices.iter().enumerate() {
                        check_finite(&format!("object {i} vertex {j}"), *vertex)?;
                    }
                    if is_collinear(vertices) {
                        return Err(SceneError::Invalid(format!(
                            "object {i}: triangle vertices are collinear"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

fn check_finite(what: &str, v: [f32; 3]) -> SceneResult<()> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(SceneError::Invalid(format!("{what} is not finite: {v:?}")))
    }
}

fn is_collinear(vertices: &[[f32; 3]; 3]) -> bool {
    let [v0, v1, v2] = (*vertices).map(to_vec3);
    (v1 - v0).cross(v2 - v0).length_squared() < 1e-12
}
