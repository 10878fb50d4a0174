//! Scanline rendering functions.
//!
//! Drives the rasterizer → scanline → pixel format pipeline, and provides
//! [`rasterize`], which turns shape geometry into a transparent layer.

use crate::basics::COVER_FULL;
use crate::color::Rgba8;
use crate::geometry::Geometry;
use crate::pixfmt_rgba::{Layer, PixelFormat};
use crate::rasterizer_scanline::{RasterizerScanline, Scanline};
use crate::scanline_bin::ScanlineBin;

/// Render all scanlines from the rasterizer as a solid color.
///
/// Output is clipped to the pixel format's extent.
pub fn render_scanlines_bin_solid<PF: PixelFormat>(
    ras: &mut RasterizerScanline,
    sl: &mut ScanlineBin,
    pf: &mut PF,
    color: &Rgba8,
) {
    ras.clip_box(0, 0, pf.width() as i32, pf.height() as i32);
    if !ras.rewind_scanlines() {
        return;
    }
    while ras.sweep_scanline(sl) {
        let y = sl.y();
        for span in sl.spans() {
            pf.blend_hline(span.x, y, span.len as u32, color, COVER_FULL);
        }
    }
}

/// Fill `geometry` with `color` on a fresh transparent `width`×`height`
/// layer, the geometry's local origin placed at the layer center
/// `(width / 2, height / 2)`.
pub fn rasterize(geometry: &Geometry, color: Rgba8, width: u32, height: u32) -> Layer {
    let mut layer = Layer::new(width, height);
    let mut ras = RasterizerScanline::new();
    let mut sl = ScanlineBin::new();
    let mut path = geometry.path((width / 2) as f64, (height / 2) as f64);
    ras.add_path(&mut path, 0);
    render_scanlines_bin_solid(&mut ras, &mut sl, &mut layer, &color);
    layer
}

// ============================================================================
// Tests
// ============================================================================
