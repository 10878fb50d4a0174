//! RGB pixel format and the opaque `Canvas` images are composited onto.
//!
//! The buffer stores no alpha channel: reads always report `a = 255`, and
//! blending uses the source color's alpha to interpolate each component.

use crate::basics::CoverType;
use crate::color::Rgba8;
use crate::pixfmt_rgba::{blend_alpha, PixelFormat};

/// Bytes per pixel for RGB24.
const BPP: usize = 3;

/// Opaque RGB24 buffer (3 bytes per pixel, row-major, top-down).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// A canvas filled with the solid `background` color.
    pub fn new(width: u32, height: u32, background: Rgba8) -> Self {
        let mut canvas = Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * BPP],
        };
        canvas.clear(&background);
        canvas
    }

    /// Fill the entire buffer with a solid color.
    pub fn clear(&mut self, c: &Rgba8) {
        for p in self.data.chunks_exact_mut(BPP) {
            p.copy_from_slice(&[c.r, c.g, c.b]);
        }
    }

    /// Raw RGB bytes, row-major, top-down.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the canvas, returning its raw RGB bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Number of pixels that differ from `c`.
    pub fn count_not(&self, c: &Rgba8) -> usize {
        self.data
            .chunks_exact(BPP)
            .filter(|p| p[0] != c.r || p[1] != c.g || p[2] != c.b)
            .count()
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> usize {
        debug_assert!(x >= 0 && (x as u32) < self.width, "x out of range: {x}");
        debug_assert!(y >= 0 && (y as u32) < self.height, "y out of range: {y}");
        (y as usize * self.width as usize + x as usize) * BPP
    }

    /// Blend a single pixel (internal helper, no bounds checking).
    /// Non-premultiplied blending of R, G, B channels only.
    #[inline]
    fn blend_pix(p: &mut [u8], c: &Rgba8, alpha: u8) {
        p[0] = Rgba8::lerp(p[0], c.r, alpha);
        p[1] = Rgba8::lerp(p[1], c.g, alpha);
        p[2] = Rgba8::lerp(p[2], c.b, alpha);
    }
}

impl PixelFormat for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let off = self.offset(x, y);
        Rgba8::new_opaque(self.data[off], self.data[off + 1], self.data[off + 2])
    }

    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
        let off = self.offset(x, y);
        self.data[off..off + BPP].copy_from_slice(&[c.r, c.g, c.b]);
    }

    fn blend_pixel(&mut self, x: i32, y: i32, c: &Rgba8, cover: CoverType) {
        let alpha = blend_alpha(c, cover);
        if alpha > 0 {
            let off = self.offset(x, y);
            Self::blend_pix(&mut self.data[off..off + BPP], c, alpha);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::COVER_FULL;

    #[test]
    fn test_new_canvas_is_background() {
        let canvas = Canvas::new(4, 3, Rgba8::WHITE);
        assert_eq!(canvas.as_bytes().len(), 36);
        assert!(canvas.as_bytes().iter().all(|&b| b == 255));
        assert_eq!(canvas.count_not(&Rgba8::WHITE), 0);
        assert_eq!(canvas.pixel(3, 2), Rgba8::WHITE);
    }

    #[test]
    fn test_blend_respects_source_alpha() {
        let mut canvas = Canvas::new(3, 1, Rgba8::WHITE);
        canvas.blend_pixel(0, 0, &Rgba8::new(255, 0, 0, 255), COVER_FULL);
        canvas.blend_pixel(1, 0, &Rgba8::new(255, 0, 0, 0), COVER_FULL);
        canvas.blend_pixel(2, 0, &Rgba8::new(0, 0, 0, 128), COVER_FULL);
        assert_eq!(canvas.pixel(0, 0), Rgba8::new_opaque(255, 0, 0));
        assert_eq!(canvas.pixel(1, 0), Rgba8::WHITE);
        let mid = canvas.pixel(2, 0);
        assert!((126..=128).contains(&mid.r), "got {mid:?}");
        assert_eq!(canvas.count_not(&Rgba8::WHITE), 2);
    }
}
