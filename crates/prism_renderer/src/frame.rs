//! Whole-frame rendering and image output.

use std::path::Path;
use std::time::Instant;

use image::{ColorType, ImageFormat};
use prism_core::RenderConfig;
use thiserror::Error;

use crate::Renderer;

/// Errors that can occur while writing a rendered frame.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type FrameResult<T> = Result<T, FrameError>;

/// 8-bit RGB image buffer for render output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0]; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the image.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the image.
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let index = self.index(x, y);
        self.pixels[index] = rgb;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Flatten to row-major RGB bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Encode the buffer as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> FrameResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.to_rgb_bytes(),
            self.width,
            self.height,
            ColorType::Rgb8,
            ImageFormat::Png,
        )?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Render every pixel of the frame.
///
/// Pixels are visited column by column. Each call to [`Renderer::render`]
/// is independent, so the order does not affect the result.
pub fn render_frame(renderer: &Renderer, config: &RenderConfig) -> ImageBuffer {
    let RenderConfig { width, height } = *config;
    let mut image = ImageBuffer::new(width, height);

    log::info!(
        "Rendering {}x{} ({} renderables, {} lights)",
        width,
        height,
        renderer.renderable_count(),
        renderer.light_count()
    );
    let start = Instant::now();

    for x in 0..width {
        log::debug!("Rendering column ({}/{})", x, width);
        for y in 0..height {
            image.set(x, y, renderer.render(x, y, width, height));
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
