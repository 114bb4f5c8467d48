//! Color and depth buffers for one render target.
//!
//! [`FrameBuffer`] owns both buffers so they can only change together: a
//! depth-tested write updates the color and the depth of a pixel in the
//! same call, and [`FrameBuffer::clear`] resets both.

use std::path::Path;

use image::RgbaImage;

use crate::colors;
use crate::error::Result;

/// Owned ARGB8888 color buffer plus a parallel `f32` depth buffer.
///
/// Both are `width * height` long, row-major, origin at the top-left.
/// Depth values are screen-space z in [0,1] where smaller is nearer; a
/// cleared pixel holds `f32::INFINITY`.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::SKY; size],
            depth_buffer: vec![f32::INFINITY; size],
            width,
            height,
        }
    }

    /// Reallocates both buffers for new dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the color buffer with `color` and reset every depth to infinity.
    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
        self.depth_buffer.fill(f32::INFINITY);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if `depth` is strictly less than the stored
    /// depth (nearer). Color and depth are written together. Returns whether
    /// the write happened; out-of-bounds coordinates return `false`.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: u32) -> bool {
        match self.index(x, y) {
            Some(idx) if depth < self.depth_buffer[idx] => {
                self.depth_buffer[idx] = depth;
                self.color_buffer[idx] = color;
                true
            }
            _ => false,
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Get the depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn depths(&self) -> &[f32] {
        &self.depth_buffer
    }

    /// Number of pixels that received a depth-tested write since the last
    /// clear.
    pub fn covered_pixels(&self) -> usize {
        self.depth_buffer.iter().filter(|d| d.is_finite()).count()
    }

    /// The color buffer as native-endian bytes, ready for an ARGB8888
    /// streaming texture.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8; the
        // byte slice covers exactly the same allocation and borrows `self`.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Converts the color buffer to an RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.color_buffer[(y * self.width + x) as usize];
            let [a, r, g, b] = argb.to_be_bytes();
            image::Rgba([r, g, b, a])
        })
    }

    /// Writes the color buffer to an image file; the format follows the
    /// extension (PNG for `.png`).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_image().save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_cleared() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.pixels().len(), 12);
        assert!(fb.depths().iter().all(|d| *d == f32::INFINITY));
        assert_eq!(fb.covered_pixels(), 0);
    }

    #[test]
    fn depth_test_keeps_nearest_write() {
        let mut fb = FrameBuffer::new(2, 2);
        assert!(fb.set_pixel_with_depth(1, 0, 0.5, 0xFFFF0000));
        assert!(!fb.set_pixel_with_depth(1, 0, 0.7, 0xFF00FF00));
        assert!(!fb.set_pixel_with_depth(1, 0, 0.5, 0xFF00FF00));
        assert!(fb.set_pixel_with_depth(1, 0, 0.2, 0xFF0000FF));

        assert_eq!(fb.get_pixel(1, 0), Some(0xFF0000FF));
        assert_eq!(fb.get_depth(1, 0), Some(0.2));
        assert_eq!(fb.covered_pixels(), 1);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        assert!(!fb.set_pixel_with_depth(-1, 0, 0.1, 0xFFFFFFFF));
        assert!(!fb.set_pixel_with_depth(0, 2, 0.1, 0xFFFFFFFF));
        assert_eq!(fb.get_pixel(2, 0), None);
        assert_eq!(fb.covered_pixels(), 0);
    }

    #[test]
    fn clear_resets_color_and_depth() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel_with_depth(0, 0, 0.3, 0xFFFFFFFF);
        fb.clear(colors::BLACK);
        assert_eq!(fb.get_pixel(0, 0), Some(colors::BLACK));
        assert_eq!(fb.get_depth(0, 0), Some(f32::INFINITY));
    }

    #[test]
    fn bytes_cover_every_pixel() {
        let fb = FrameBuffer::new(3, 2);
        assert_eq!(fb.as_bytes().len(), 3 * 2 * 4);
        assert_eq!(&fb.as_bytes()[..4], &colors::SKY.to_ne_bytes());
    }

    #[test]
    fn image_conversion_reorders_channels() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.set_pixel_with_depth(0, 0, 0.0, 0xFF112233);
        let img = fb.to_image();
        assert_eq!(img.get_pixel(0, 0).0, [0x11, 0x22, 0x33, 0xFF]);
    }
}
