//! Paste a rendered layer onto the canvas.

use crate::basics::COVER_FULL;
use crate::pixfmt_rgb::Canvas;
use crate::pixfmt_rgba::{Layer, PixelFormat};

/// Blend `layer` onto `canvas` with the layer's center `(w/2, h/2)` at
/// `(cx, cy)`. Each pixel is blended by its own alpha; anything landing
/// outside the canvas is dropped.
pub fn composite(canvas: &mut Canvas, layer: &Layer, cx: i32, cy: i32) {
    let ox = cx - (layer.width() / 2) as i32;
    let oy = cy - (layer.height() / 2) as i32;

    let x0 = (-ox).max(0);
    let y0 = (-oy).max(0);
    let x1 = (layer.width() as i32).min(canvas.width() as i32 - ox);
    let y1 = (layer.height() as i32).min(canvas.height() as i32 - oy);

    for y in y0..y1 {
        for x in x0..x1 {
            let c = layer.pixel(x, y);
            if c.a != 0 {
                canvas.blend_pixel(ox + x, oy + y, &c, COVER_FULL);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;

    const GREEN: Rgba8 = Rgba8::new_opaque(0, 128, 0);

    fn solid_layer(w: u32, h: u32, c: Rgba8) -> Layer {
        let mut layer = Layer::new(w, h);
        for y in 0..h as i32 {
            layer.copy_hline(0, y, w, &c);
        }
        layer
    }

    #[test]
    fn test_opaque_square_at_center() {
        let mut canvas = Canvas::new(224, 224, Rgba8::WHITE);
        composite(&mut canvas, &solid_layer(40, 40, GREEN), 112, 112);
        assert_eq!(canvas.count_not(&Rgba8::WHITE), 1600);
        assert_eq!(canvas.pixel(92, 92), GREEN);
        assert_eq!(canvas.pixel(131, 131), GREEN);
        assert_eq!(canvas.pixel(91, 92), Rgba8::WHITE);
        assert_eq!(canvas.pixel(132, 131), Rgba8::WHITE);
    }

    #[test]
    fn test_transparent_pixels_leave_canvas() {
        let mut canvas = Canvas::new(32, 32, Rgba8::WHITE);
        let mut layer = Layer::new(10, 10);
        layer.copy_pixel(5, 5, &GREEN);
        composite(&mut canvas, &layer, 16, 16);
        assert_eq!(canvas.count_not(&Rgba8::WHITE), 1);
        assert_eq!(canvas.pixel(16, 16), GREEN);
    }

    #[test]
    fn test_partial_alpha_blends() {
        let mut canvas = Canvas::new(4, 4, Rgba8::WHITE);
        let layer = solid_layer(1, 1, Rgba8::new(0, 0, 0, 128));
        composite(&mut canvas, &layer, 2, 2);
        let p = canvas.pixel(2, 2);
        assert!((126..=128).contains(&p.r), "{p:?}");
    }

    #[test]
    fn test_clips_at_edges() {
        let mut canvas = Canvas::new(20, 20, Rgba8::WHITE);
        composite(&mut canvas, &solid_layer(10, 10, GREEN), 0, 0);
        assert_eq!(canvas.count_not(&Rgba8::WHITE), 25);
        composite(&mut canvas, &solid_layer(10, 10, GREEN), 22, 19);
        // x in 17..20, y in 14..20.
        assert_eq!(canvas.count_not(&Rgba8::WHITE), 25 + 18);
    }

    #[test]
    fn test_entirely_off_canvas() {
        let mut canvas = Canvas::new(20, 20, Rgba8::WHITE);
        composite(&mut canvas, &solid_layer(4, 4, GREEN), -50, 70);
        assert_eq!(canvas.count_not(&Rgba8::WHITE), 0);
    }
}
