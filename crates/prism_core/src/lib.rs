//! Prism Core - scene description for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `LightDescription`,
//!   `ObjectDescription`, `RenderConfig`
//! - **Scene loading**: JSON scene files via serde, with validation
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.objects.len(),
//!     scene.lights.len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use scene::{LightDescription, ObjectDescription, RenderConfig, SceneDescription};
