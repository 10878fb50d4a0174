//! Foundation types, constants, and path command utilities.
//!
//! Everything else in the crate builds on these: points, integer and float
//! rectangles, the path command vocabulary spoken by vertex sources, and the
//! rounding helpers used when geometry meets the pixel grid.

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round a double to the nearest unsigned integer (round half up).
#[inline]
pub fn uround(v: f64) -> u32 {
    (v + 0.5) as u32
}

/// Floor a double to the nearest integer toward negative infinity.
#[inline]
pub fn ifloor(v: f64) -> i32 {
    let i = v as i32;
    i - (i as f64 > v) as i32
}

/// Ceiling of a double as a signed integer.
#[inline]
pub fn iceil(v: f64) -> i32 {
    v.ceil() as i32
}

// ============================================================================
// Cover constants
// ============================================================================

/// The type used for per-pixel coverage values.
pub type CoverType = u8;

pub const COVER_FULL: CoverType = 255;

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Grow this rectangle so that it also covers the point `(x, y)`.
    pub fn expand_to(&mut self, x: T, y: T) {
        if x < self.x1 {
            self.x1 = x;
        }
        if y < self.y1 {
            self.y1 = y;
        }
        if x > self.x2 {
            self.x2 = x;
        }
        if y > self.y2 {
            self.y2 = y;
        }
    }
}

/// Rectangle with `i32` coordinates.
pub type RectI = Rect<i32>;
/// Rectangle with `f64` coordinates.
pub type RectD = Rect<f64>;

// ============================================================================
// Path commands
// ============================================================================

pub const PATH_CMD_STOP: u32 = 0;
pub const PATH_CMD_MOVE_TO: u32 = 1;
pub const PATH_CMD_LINE_TO: u32 = 2;
pub const PATH_CMD_END_POLY: u32 = 0x0F;
pub const PATH_CMD_MASK: u32 = 0x0F;

pub const PATH_FLAGS_CCW: u32 = 0x10;
pub const PATH_FLAGS_CW: u32 = 0x20;
pub const PATH_FLAGS_CLOSE: u32 = 0x40;

/// Returns `true` if `c` is a vertex command (move_to or line_to).
#[inline]
pub fn is_vertex(c: u32) -> bool {
    (PATH_CMD_MOVE_TO..PATH_CMD_END_POLY).contains(&c)
}

/// Returns `true` if `c` is the stop command.
#[inline]
pub fn is_stop(c: u32) -> bool {
    c == PATH_CMD_STOP
}

/// Returns `true` if `c` is a move_to command.
#[inline]
pub fn is_move_to(c: u32) -> bool {
    c == PATH_CMD_MOVE_TO
}

/// Returns `true` if `c` is an end_poly command (with any flags).
#[inline]
pub fn is_end_poly(c: u32) -> bool {
    (c & PATH_CMD_MASK) == PATH_CMD_END_POLY
}

/// Returns `true` if `c` is a close polygon command.
#[inline]
pub fn is_close(c: u32) -> bool {
    (c & !(PATH_FLAGS_CW | PATH_FLAGS_CCW)) == (PATH_CMD_END_POLY | PATH_FLAGS_CLOSE)
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

pub type PointD = PointBase<f64>;

impl PointD {
    /// Euclidean distance from the origin.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

// ============================================================================
// VertexSource trait
// ============================================================================

/// The vertex source interface. Every outline fed to the rasterizer (polygon
/// geometry, ellipse, pie slice) implements this to produce a stream of
/// path commands.
pub trait VertexSource {
    /// Reset the vertex source to the beginning of the given path.
    fn rewind(&mut self, path_id: u32);

    /// Return the next vertex. Writes coordinates to `x` and `y`, returns a
    /// path command. Returns `PATH_CMD_STOP` when iteration is complete.
    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32;
}

/// Blanket implementation so `&mut T` can be used as a VertexSource.
impl<T: VertexSource> VertexSource for &mut T {
    fn rewind(&mut self, path_id: u32) {
        (*self).rewind(path_id);
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        (*self).vertex(x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ifloor() {
        assert_eq!(ifloor(1.7), 1);
        assert_eq!(ifloor(-1.7), -2);
        assert_eq!(ifloor(-1.0), -1);
        assert_eq!(ifloor(0.0), 0);
    }

    #[test]
    fn test_ceil_helpers() {
        assert_eq!(iceil(1.1), 2);
        assert_eq!(iceil(-1.1), -1);
    }

    #[test]
    fn test_deg2rad() {
        assert!((deg2rad(180.0) - PI).abs() < 1e-12);
        assert!((deg2rad(36.0) - PI / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_rect_expand_to() {
        let mut r = RectD::new(0.0, 0.0, 0.0, 0.0);
        r.expand_to(-3.0, 4.0);
        r.expand_to(5.0, -2.0);
        assert_eq!(r, RectD::new(-3.0, -2.0, 5.0, 4.0));
    }

    #[test]
    fn test_path_command_classification() {
        assert!(is_stop(PATH_CMD_STOP));
        assert!(is_move_to(PATH_CMD_MOVE_TO));
        assert!(is_vertex(PATH_CMD_LINE_TO));
        assert!(!is_vertex(PATH_CMD_END_POLY));
        assert!(is_end_poly(PATH_CMD_END_POLY | PATH_FLAGS_CLOSE));
        assert!(is_close(PATH_CMD_END_POLY | PATH_FLAGS_CLOSE | PATH_FLAGS_CCW));
        assert!(!is_close(PATH_CMD_END_POLY));
    }

    #[test]
    fn test_point_norm() {
        assert!((PointD::new(3.0, 4.0).norm() - 5.0).abs() < 1e-12);
    }
}
