//! Expand-on-rotate for shape layers.
//!
//! Rotates a [`Layer`] about its center, clockwise-positive in screen
//! coordinates, growing the output so nothing is clipped. Quarter turns are
//! exact pixel transposes; every other angle maps each output pixel center
//! back through the inverted transform and takes the nearest source pixel.

use crate::basics::{deg2rad, iceil, ifloor};
use crate::pixfmt_rgba::{Layer, PixelFormat};
use crate::trans_affine::TransAffine;

/// Rotate `layer` by `angle_degrees` about its center.
///
/// The result is the smallest integer box holding the rotated frame.
/// Exposed area is transparent.
pub fn rotate(layer: &Layer, angle_degrees: f64) -> Layer {
    let a = angle_degrees.rem_euclid(360.0);
    if a == 0.0 {
        return layer.clone();
    }
    if a == 90.0 || a == 180.0 || a == 270.0 {
        return quarter_turn(layer, (a / 90.0) as u32);
    }
    rotate_nearest(layer, deg2rad(a))
}

/// Rotate by `turns` quarter turns clockwise (1, 2 or 3).
fn quarter_turn(src: &Layer, turns: u32) -> Layer {
    let w = src.width() as i32;
    let h = src.height() as i32;
    let mut dst = if turns == 2 {
        Layer::new(w as u32, h as u32)
    } else {
        Layer::new(h as u32, w as u32)
    };
    for y in 0..h {
        for x in 0..w {
            let c = src.pixel(x, y);
            if c.is_transparent() {
                continue;
            }
            let (dx, dy) = match turns {
                1 => (h - 1 - y, x),
                2 => (w - 1 - x, h - 1 - y),
                _ => (y, w - 1 - x),
            };
            dst.copy_pixel(dx, dy, &c);
        }
    }
    dst
}

/// Source-centered rotation by `rad` radians.
fn centered_rotation(width: u32, height: u32, rad: f64) -> TransAffine {
    let mut m = TransAffine::new_translation(-(width as f64) / 2.0, -(height as f64) / 2.0);
    m.multiply(&TransAffine::new_rotation(rad));
    m
}

/// Size of the box holding a `width`×`height` frame rotated by `rad`.
pub(crate) fn rotated_extent(width: u32, height: u32, rad: f64) -> (u32, u32) {
    let m = centered_rotation(width, height, rad);
    let (w, h) = (width as f64, height as f64);
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;
    for (mut x, mut y) in [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)] {
        m.transform(&mut x, &mut y);
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    (
        (iceil(max_x) - ifloor(min_x)) as u32,
        (iceil(max_y) - ifloor(min_y)) as u32,
    )
}

fn rotate_nearest(src: &Layer, rad: f64) -> Layer {
    let (sw, sh) = (src.width(), src.height());
    let (nw, nh) = rotated_extent(sw, sh, rad);
    let mut m = centered_rotation(sw, sh, rad);
    m.multiply(&TransAffine::new_translation(nw as f64 / 2.0, nh as f64 / 2.0));
    m.invert();

    let mut dst = Layer::new(nw, nh);
    for v in 0..nh as i32 {
        for u in 0..nw as i32 {
            let mut x = u as f64 + 0.5;
            let mut y = v as f64 + 0.5;
            m.transform(&mut x, &mut y);
            let sx = ifloor(x);
            let sy = ifloor(y);
            if src.is_opaque_at(sx, sy) {
                dst.copy_pixel(u, v, &src.pixel(sx, sy));
            }
        }
    }
    dst
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;
    use crate::geometry::generate;
    use crate::renderer_scanline::rasterize;
    use crate::shape::ShapeKind;

    const BLUE: Rgba8 = Rgba8::new_opaque(0, 0, 255);

    fn shape_layer(kind: ShapeKind, size: u32) -> Layer {
        rasterize(&generate(kind, size).unwrap(), BLUE, 224, 224)
    }

    #[test]
    fn test_zero_and_full_turn_are_identity() {
        let layer = shape_layer(ShapeKind::Trapezoid, 70);
        assert_eq!(rotate(&layer, 0.0), layer);
        assert_eq!(rotate(&layer, 360.0), layer);
        assert_eq!(rotate(&layer, -360.0), layer);
    }

    #[test]
    fn test_square_quarter_turn_is_pixel_identical() {
        let layer = shape_layer(ShapeKind::Square, 60);
        assert_eq!(rotate(&layer, 90.0), layer);
        assert_eq!(rotate(&layer, 270.0), layer);
    }

    #[test]
    fn test_quarter_turn_moves_right_toward_bottom() {
        let mut layer = Layer::new(10, 4);
        layer.copy_pixel(9, 0, &BLUE);
        let r = rotate(&layer, 90.0);
        assert_eq!((r.width(), r.height()), (4, 10));
        assert!(r.is_opaque_at(3, 9));
        assert_eq!(r.opaque_count(), 1);
    }

    #[test]
    fn test_half_turn_flips_both_axes() {
        let mut layer = Layer::new(6, 3);
        layer.copy_pixel(0, 0, &BLUE);
        let r = rotate(&layer, 180.0);
        assert_eq!((r.width(), r.height()), (6, 3));
        assert!(r.is_opaque_at(5, 2));
    }

    #[test]
    fn test_expanded_extent() {
        assert_eq!(rotated_extent(224, 224, 0.0), (224, 224));
        let (w, h) = rotated_extent(224, 224, deg2rad(45.0));
        // Corners land at ±158.39 on both axes.
        assert_eq!((w, h), (318, 318));
        let (w, h) = rotated_extent(100, 20, deg2rad(30.0));
        assert!(w >= 96 && w <= 98, "w = {w}");
        assert!(h >= 66 && h <= 68, "h = {h}");
    }

    #[test]
    fn test_free_angle_keeps_content() {
        let layer = shape_layer(ShapeKind::Rectangle, 100);
        let before = layer.opaque_count() as f64;
        for angle in [1.0, 33.0, 45.0, 137.0, 359.0] {
            let r = rotate(&layer, angle);
            let after = r.opaque_count() as f64;
            assert!((after - before).abs() / before < 0.03, "{angle}: {after} vs {before}");
            let b = r.opaque_bounds().unwrap();
            assert!(b.x1 > 0 && b.y1 > 0);
            assert!(b.x2 < r.width() as i32 - 1 && b.y2 < r.height() as i32 - 1);
        }
    }

    #[test]
    fn test_rotation_keeps_shape_centered() {
        let layer = shape_layer(ShapeKind::Circle, 80);
        let r = rotate(&layer, 45.0);
        let cx = r.width() as i32 / 2;
        let cy = r.height() as i32 / 2;
        assert!(r.is_opaque_at(cx, cy));
        assert!(r.is_opaque_at(cx + 37, cy));
        assert!(!r.is_opaque_at(cx + 43, cy));
    }
}
