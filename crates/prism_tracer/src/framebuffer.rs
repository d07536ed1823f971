//! 8-bit RGB framebuffer handed to the display layer.

use crate::Color;
use bytemuck::{Pod, Zeroable};

/// One 8-bit-per-channel RGB pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a linear color to 8-bit RGB.
///
/// Each channel is clamped to [0, 1], scaled to 255 and truncated. NaN
/// channels become 0.
pub fn color_to_rgb8(color: Color) -> Rgb8 {
    let quantize = |c: f32| (clamp_01(c) * 255.0) as u8;
    Rgb8::new(quantize(color.x), quantize(color.y), quantize(color.z))
}

/// Row-major W×H image of [`Rgb8`] pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb8>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb8::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb8 {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb8) {
        let offset = self.offset(x, y);
        self.pixels[offset] = pixel;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Raw bytes (R, G, B per pixel, row-major), without copying.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Consume the framebuffer and return its raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}
