//! RGBA pixel format with alpha blending, and the shape `Layer` built on it.
//!
//! Provides the `PixelFormat` trait shared by layers and canvases, and
//! `Layer`: an owned, non-premultiplied RGBA32 buffer (4 bytes per pixel,
//! row-major, top-down) that starts fully transparent.

use crate::basics::{CoverType, RectI, COVER_FULL};
use crate::color::Rgba8;

// ============================================================================
// PixelFormat trait
// ============================================================================

/// Trait for pixel buffers that colors can be read from and blended into.
///
/// Coordinates are not bounds-checked beyond debug assertions; renderers
/// clip before calling in.
pub trait PixelFormat {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Get the pixel color at (x, y).
    fn pixel(&self, x: i32, y: i32) -> Rgba8;

    /// Copy (overwrite) a single pixel at (x, y) with color `c`.
    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8);

    /// Blend a single pixel at (x, y) with color `c` and coverage `cover`.
    fn blend_pixel(&mut self, x: i32, y: i32, c: &Rgba8, cover: CoverType);

    /// Copy (overwrite) a horizontal line of `len` pixels with color `c`.
    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        for i in 0..len as i32 {
            self.copy_pixel(x + i, y, c);
        }
    }

    /// Blend a horizontal line of `len` pixels with uniform color and coverage.
    fn blend_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8, cover: CoverType) {
        for i in 0..len as i32 {
            self.blend_pixel(x + i, y, c, cover);
        }
    }
}

/// Effective blend alpha of color `c` drawn at coverage `cover`.
#[inline]
pub(crate) fn blend_alpha(c: &Rgba8, cover: CoverType) -> u8 {
    if cover == COVER_FULL {
        c.a
    } else {
        ((c.a as u32 * cover as u32 + 127) / 255) as u8
    }
}

// ============================================================================
// Layer: non-premultiplied RGBA, 8 bits per channel
// ============================================================================

const BPP: usize = 4; // bytes per pixel

/// Transparent-background RGBA buffer holding one rendered shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Layer {
    /// A fully transparent layer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * BPP],
        }
    }

    /// Raw RGBA bytes, row-major, top-down.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> usize {
        debug_assert!(x >= 0 && (x as u32) < self.width, "x out of range: {x}");
        debug_assert!(y >= 0 && (y as u32) < self.height, "y out of range: {y}");
        (y as usize * self.width as usize + x as usize) * BPP
    }

    /// Returns `true` if `(x, y)` is inside the layer and not transparent.
    pub fn is_opaque_at(&self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && (x as u32) < self.width
            && (y as u32) < self.height
            && self.data[self.offset(x, y) + 3] != 0
    }

    /// Number of pixels with non-zero alpha.
    pub fn opaque_count(&self) -> usize {
        self.data.chunks_exact(BPP).filter(|p| p[3] != 0).count()
    }

    /// Inclusive pixel bounds of the non-transparent content, if any.
    pub fn opaque_bounds(&self) -> Option<RectI> {
        let mut bounds: Option<RectI> = None;
        for (i, p) in self.data.chunks_exact(BPP).enumerate() {
            if p[3] == 0 {
                continue;
            }
            let x = (i % self.width as usize) as i32;
            let y = (i / self.width as usize) as i32;
            bounds = Some(match bounds {
                Some(mut r) => {
                    r.expand_to(x, y);
                    r
                }
                None => RectI::new(x, y, x, y),
            });
        }
        bounds
    }

    /// Blend a single pixel (internal helper, no bounds checking).
    #[inline]
    fn blend_pix(p: &mut [u8], c: &Rgba8, alpha: u8) {
        p[0] = Rgba8::lerp(p[0], c.r, alpha);
        p[1] = Rgba8::lerp(p[1], c.g, alpha);
        p[2] = Rgba8::lerp(p[2], c.b, alpha);
        p[3] = Rgba8::lerp(p[3], 255, alpha);
    }
}

impl PixelFormat for Layer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let off = self.offset(x, y);
        let p = &self.data[off..off + BPP];
        Rgba8::new(p[0], p[1], p[2], p[3])
    }

    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
        let off = self.offset(x, y);
        self.data[off..off + BPP].copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }

    fn blend_pixel(&mut self, x: i32, y: i32, c: &Rgba8, cover: CoverType) {
        let alpha = blend_alpha(c, cover);
        if alpha == 255 {
            self.copy_pixel(x, y, c);
        } else if alpha > 0 {
            let off = self.offset(x, y);
            Self::blend_pix(&mut self.data[off..off + BPP], c, alpha);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
