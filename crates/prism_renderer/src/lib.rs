//! Prism Renderer - single-bounce CPU ray tracing.
//!
//! Casts one primary ray per pixel from a pinhole camera, finds the nearest
//! renderable it hits, and shades the hit by averaging the contribution of
//! every light. No shadows, reflections or anti-aliasing.

mod intersection;
mod renderable;
mod sphere;
mod triangle;
mod light;
mod renderer;
mod frame;

pub use intersection::Intersection;
pub use renderable::Renderable;
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use light::{Color, ConstantLight, Light, PhongLight};
pub use renderer::{color_to_rgb, Renderer, BACKGROUND};
pub use frame::{render_frame, FrameError, FrameResult, ImageBuffer};

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Interval, Ray, Vec3};
