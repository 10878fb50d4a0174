//! Vector geometry for every shape class.
//!
//! [`generate`] maps a [`ShapeKind`] and a size to the shape's outline
//! around a local center `(0, 0)`, y pointing down. It is pure: the same
//! inputs always give the same geometry.
//!
//! Half and quarter sizes use floor division (`size / 2`, `size / 4`), so odd
//! sizes produce outlines that are one unit lopsided. This matches the
//! reference dataset and is kept on purpose.

use crate::arc::Pie;
use crate::basics::{
    PointD, RectD, VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO,
    PATH_CMD_STOP, PATH_FLAGS_CLOSE, PI,
};
use crate::ellipse::Ellipse;
use crate::error::{Result, SynthError};
use crate::shape::ShapeKind;

/// Horizontal shift between the top and bottom edges of a parallelogram.
pub const PARALLELOGRAM_SKEW: f64 = 20.0;

/// Outline of one shape, relative to its local center.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Closed polygon, vertices in boundary order.
    Polygon(Vec<PointD>),
    /// Axis-aligned ellipse with the given half-extents.
    Ellipse { rx: f64, ry: f64 },
    /// Filled sector of an ellipse, angles in degrees, clockwise on screen.
    Pie {
        rx: f64,
        ry: f64,
        start: f64,
        end: f64,
    },
}

impl Geometry {
    /// Polygon vertices, or `None` for curved geometry.
    pub fn vertices(&self) -> Option<&[PointD]> {
        match self {
            Geometry::Polygon(points) => Some(points),
            _ => None,
        }
    }

    /// Largest distance from the local center to any point of the shape.
    pub fn bounding_radius(&self) -> f64 {
        match self {
            Geometry::Polygon(points) => points.iter().map(PointD::norm).fold(0.0, f64::max),
            Geometry::Ellipse { rx, ry } | Geometry::Pie { rx, ry, .. } => rx.max(*ry),
        }
    }

    /// Axis-aligned bounding box in local coordinates. An empty polygon
    /// gives the zero rectangle at the origin.
    pub fn bounds(&self) -> RectD {
        match self {
            Geometry::Polygon(points) => {
                let Some(first) = points.first() else {
                    return RectD::new(0.0, 0.0, 0.0, 0.0);
                };
                let mut r = RectD::new(first.x, first.y, first.x, first.y);
                for p in &points[1..] {
                    r.expand_to(p.x, p.y);
                }
                r
            }
            Geometry::Ellipse { rx, ry } => RectD::new(-rx, -ry, *rx, *ry),
            Geometry::Pie { rx, ry, start, end } => {
                let mut r = RectD::new(0.0, 0.0, 0.0, 0.0);
                let mut add = |deg: f64| {
                    let a = deg.to_radians();
                    r.expand_to(a.cos() * rx, a.sin() * ry);
                };
                add(*start);
                add(*end);
                let mut axis = (start / 90.0).ceil() * 90.0;
                while axis < *end {
                    add(axis);
                    axis += 90.0;
                }
                r
            }
        }
    }

    /// A vertex source emitting this outline translated to `(cx, cy)`.
    pub fn path(&self, cx: f64, cy: f64) -> GeometryPath<'_> {
        match self {
            Geometry::Polygon(points) => GeometryPath::Polygon(PolygonPath::new(points, cx, cy)),
            Geometry::Ellipse { rx, ry } => {
                GeometryPath::Ellipse(Ellipse::new(cx, cy, *rx, *ry, 0))
            }
            Geometry::Pie { rx, ry, start, end } => {
                GeometryPath::Pie(Pie::new(cx, cy, *rx, *ry, *start, *end))
            }
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Vertices of a regular polygon around the origin. Vertex `i` sits at
/// `360·i/sides` degrees from the +x axis.
pub fn regular_polygon(sides: u32, radius: f64) -> Result<Vec<PointD>> {
    if sides < 3 {
        return Err(SynthError::degenerate(format!(
            "regular polygon needs at least 3 sides, got {sides}"
        )));
    }
    Ok((0..sides)
        .map(|i| {
            let a = 2.0 * PI * i as f64 / sides as f64;
            PointD::new(radius * a.cos(), radius * a.sin())
        })
        .collect())
}

/// Star outline with `points` tips: `2·points` vertices evenly spaced in
/// angle, even indices on the `inner` radius and odd indices on `outer`.
pub fn star_polygon(points: u32, inner: f64, outer: f64) -> Result<Vec<PointD>> {
    let n = points * 2;
    let mut vertices = regular_polygon(n, 1.0)?;
    for (i, v) in vertices.iter_mut().enumerate() {
        let r = if i % 2 == 0 { inner } else { outer };
        v.x *= r;
        v.y *= r;
    }
    Ok(vertices)
}

fn polygon(points: &[(i64, i64)]) -> Vec<PointD> {
    points
        .iter()
        .map(|&(x, y)| PointD::new(x as f64, y as f64))
        .collect()
}

/// Build the outline of `kind` at the given size.
pub fn generate(kind: ShapeKind, size: u32) -> Result<Geometry> {
    if size == 0 {
        return Err(SynthError::degenerate(format!("{kind} with size 0")));
    }
    let s = i64::from(size);
    let h = s / 2;
    let q = s / 4;
    let skew = PARALLELOGRAM_SKEW as i64;

    let geometry = match kind {
        ShapeKind::Circle => Geometry::Ellipse {
            rx: h as f64,
            ry: h as f64,
        },
        ShapeKind::Semicircle => Geometry::Pie {
            rx: h as f64,
            ry: h as f64,
            start: 0.0,
            end: 180.0,
        },
        ShapeKind::Oval => Geometry::Ellipse {
            rx: s as f64,
            ry: h as f64,
        },
        ShapeKind::Triangle => Geometry::Polygon(polygon(&[(0, -h), (-h, h), (h, h)])),
        ShapeKind::Square => Geometry::Polygon(polygon(&[(-h, -h), (h, -h), (h, h), (-h, h)])),
        ShapeKind::Rectangle => {
            // int(size * 0.75) without going through floats.
            let hh = s * 3 / 4;
            Geometry::Polygon(polygon(&[(-h, -hh), (h, -hh), (h, hh), (-h, hh)]))
        }
        ShapeKind::Parallelogram => Geometry::Polygon(polygon(&[
            (-h, -q),
            (h, -q),
            (h - skew, q),
            (-h - skew, q),
        ])),
        ShapeKind::Rhombus => Geometry::Polygon(polygon(&[(0, -h), (-h, 0), (0, h), (h, 0)])),
        ShapeKind::Trapezoid => {
            Geometry::Polygon(polygon(&[(-h, h), (h, h), (q, -h), (-q, -h)]))
        }
        ShapeKind::Kite => Geometry::Polygon(polygon(&[(0, -h), (-q, 0), (0, h), (q, 0)])),
        ShapeKind::Pentagon
        | ShapeKind::Hexagon
        | ShapeKind::Heptagon
        | ShapeKind::Octagon
        | ShapeKind::Nonagon
        | ShapeKind::Decagon => {
            let sides = kind.regular_sides().unwrap_or(0);
            Geometry::Polygon(regular_polygon(sides, h as f64)?)
        }
        ShapeKind::Star => Geometry::Polygon(star_polygon(5, q as f64, h as f64)?),
    };

    validate(kind, size, &geometry)?;
    Ok(geometry)
}

/// Reject outlines that collapsed at tiny sizes: fewer than three vertices,
/// repeated consecutive vertices, or a zero radius.
fn validate(kind: ShapeKind, size: u32, geometry: &Geometry) -> Result<()> {
    match geometry {
        Geometry::Polygon(points) => {
            if points.len() < 3 {
                return Err(SynthError::degenerate(format!(
                    "{kind} has {} vertices",
                    points.len()
                )));
            }
            let n = points.len();
            for i in 0..n {
                if points[i] == points[(i + 1) % n] {
                    return Err(SynthError::degenerate(format!(
                        "{kind} at size {size} repeats vertex {i}"
                    )));
                }
            }
        }
        Geometry::Ellipse { rx, ry } | Geometry::Pie { rx, ry, .. } => {
            if *rx <= 0.0 || *ry <= 0.0 {
                return Err(SynthError::degenerate(format!(
                    "{kind} at size {size} has zero radius"
                )));
            }
        }
    }
    Ok(())
}

// ============================================================================
// Vertex sources
// ============================================================================

/// Closed polygon emitted as a vertex source, offset by a translation.
#[derive(Debug, Clone)]
pub struct PolygonPath<'a> {
    points: &'a [PointD],
    dx: f64,
    dy: f64,
    idx: usize,
}

impl<'a> PolygonPath<'a> {
    pub fn new(points: &'a [PointD], dx: f64, dy: f64) -> Self {
        Self {
            points,
            dx,
            dy,
            idx: 0,
        }
    }
}

impl VertexSource for PolygonPath<'_> {
    fn rewind(&mut self, _path_id: u32) {
        self.idx = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        let n = self.points.len();
        if self.idx < n {
            let p = self.points[self.idx];
            *x = p.x + self.dx;
            *y = p.y + self.dy;
            self.idx += 1;
            return if self.idx == 1 {
                PATH_CMD_MOVE_TO
            } else {
                PATH_CMD_LINE_TO
            };
        }
        if self.idx == n {
            self.idx += 1;
            return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE;
        }
        PATH_CMD_STOP
    }
}

/// Vertex source for any [`Geometry`].
#[derive(Debug, Clone)]
pub enum GeometryPath<'a> {
    Polygon(PolygonPath<'a>),
    Ellipse(Ellipse),
    Pie(Pie),
}

impl VertexSource for GeometryPath<'_> {
    fn rewind(&mut self, path_id: u32) {
        match self {
            GeometryPath::Polygon(p) => p.rewind(path_id),
            GeometryPath::Ellipse(e) => e.rewind(path_id),
            GeometryPath::Pie(p) => p.rewind(path_id),
        }
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        match self {
            GeometryPath::Polygon(p) => p.vertex(x, y),
            GeometryPath::Ellipse(e) => e.vertex(x, y),
            GeometryPath::Pie(p) => p.vertex(x, y),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::is_stop;

    fn pts(g: &Geometry) -> Vec<(f64, f64)> {
        g.vertices()
            .expect("polygon geometry")
            .iter()
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn test_square_60() {
        let g = generate(ShapeKind::Square, 60).unwrap();
        assert_eq!(
            pts(&g),
            vec![(-30.0, -30.0), (30.0, -30.0), (30.0, 30.0), (-30.0, 30.0)]
        );
        assert_eq!(g.bounds(), RectD::new(-30.0, -30.0, 30.0, 30.0));
    }

    #[test]
    fn test_empty_polygon_bounds() {
        let g = Geometry::Polygon(Vec::new());
        assert_eq!(g.bounds(), RectD::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(g.bounding_radius(), 0.0);
    }

    #[test]
    fn test_star_80_alternates_radius() {
        let g = generate(ShapeKind::Star, 80).unwrap();
        let v = g.vertices().unwrap();
        assert_eq!(v.len(), 10);
        for (i, p) in v.iter().enumerate() {
            let expected_r = if i % 2 == 0 { 20.0 } else { 40.0 };
            assert!((p.norm() - expected_r).abs() < 1e-9, "vertex {i}");
            let expected_deg = 36.0 * i as f64;
            let deg = p.y.atan2(p.x).to_degrees().rem_euclid(360.0);
            assert!((deg - expected_deg).abs() < 1e-9, "vertex {i} at {deg}");
        }
    }

    #[test]
    fn test_regular_polygon_vertices() {
        let v = regular_polygon(6, 10.0).unwrap();
        assert_eq!(v.len(), 6);
        assert!((v[0].x - 10.0).abs() < 1e-12);
        assert!(v[0].y.abs() < 1e-12);
        for p in &v {
            assert!((p.norm() - 10.0).abs() < 1e-9);
        }
        assert!(regular_polygon(2, 10.0).is_err());
    }

    #[test]
    fn test_regular_kinds_side_counts() {
        for (kind, n) in [
            (ShapeKind::Pentagon, 5),
            (ShapeKind::Hexagon, 6),
            (ShapeKind::Heptagon, 7),
            (ShapeKind::Octagon, 8),
            (ShapeKind::Nonagon, 9),
            (ShapeKind::Decagon, 10),
        ] {
            let g = generate(kind, 50).unwrap();
            assert_eq!(g.vertices().unwrap().len(), n, "{kind}");
            assert!((g.bounding_radius() - 25.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_floor_division_on_odd_sizes() {
        let g = generate(ShapeKind::Triangle, 31).unwrap();
        assert_eq!(pts(&g), vec![(0.0, -15.0), (-15.0, 15.0), (15.0, 15.0)]);

        let g = generate(ShapeKind::Kite, 35).unwrap();
        assert_eq!(pts(&g), vec![(0.0, -17.0), (-8.0, 0.0), (0.0, 17.0), (8.0, 0.0)]);
    }

    #[test]
    fn test_rectangle_and_parallelogram() {
        let g = generate(ShapeKind::Rectangle, 41).unwrap();
        assert_eq!(g.bounds(), RectD::new(-20.0, -30.0, 20.0, 30.0));

        let g = generate(ShapeKind::Parallelogram, 60).unwrap();
        assert_eq!(
            pts(&g),
            vec![(-30.0, -15.0), (30.0, -15.0), (10.0, 15.0), (-50.0, 15.0)]
        );
    }

    #[test]
    fn test_trapezoid_wide_base_down() {
        let g = generate(ShapeKind::Trapezoid, 40).unwrap();
        assert_eq!(
            pts(&g),
            vec![(-20.0, 20.0), (20.0, 20.0), (10.0, -20.0), (-10.0, -20.0)]
        );
    }

    #[test]
    fn test_curved_kinds() {
        assert_eq!(
            generate(ShapeKind::Circle, 45).unwrap(),
            Geometry::Ellipse { rx: 22.0, ry: 22.0 }
        );
        assert_eq!(
            generate(ShapeKind::Oval, 45).unwrap(),
            Geometry::Ellipse { rx: 45.0, ry: 22.0 }
        );
        let semi = generate(ShapeKind::Semicircle, 40).unwrap();
        assert_eq!(semi.bounds(), RectD::new(-20.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn test_generate_is_idempotent() {
        for kind in ShapeKind::ALL {
            for size in [30, 57, 100] {
                assert_eq!(generate(kind, size), generate(kind, size), "{kind} {size}");
            }
        }
    }

    #[test]
    fn test_zero_size_is_degenerate() {
        for kind in ShapeKind::ALL {
            assert!(matches!(
                generate(kind, 0),
                Err(SynthError::DegenerateGeometry { .. })
            ));
        }
    }

    #[test]
    fn test_tiny_sizes_are_rejected_not_collapsed() {
        assert!(generate(ShapeKind::Square, 1).is_err());
        assert!(generate(ShapeKind::Kite, 1).is_err());
        assert!(generate(ShapeKind::Circle, 1).is_err());
    }

    #[test]
    fn test_polygon_invariants_over_size_range() {
        for kind in ShapeKind::ALL {
            for size in 30..=100 {
                let g = generate(kind, size).unwrap();
                if let Some(v) = g.vertices() {
                    assert!(v.len() >= 3);
                    for i in 0..v.len() {
                        assert_ne!(v[i], v[(i + 1) % v.len()], "{kind} {size}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_polygon_path_translates_and_closes() {
        let g = generate(ShapeKind::Square, 10).unwrap();
        let mut path = g.path(100.0, 50.0);
        path.rewind(0);
        let (mut x, mut y) = (0.0, 0.0);
        assert_eq!(path.vertex(&mut x, &mut y), PATH_CMD_MOVE_TO);
        assert_eq!((x, y), (95.0, 45.0));
        for _ in 0..3 {
            assert_eq!(path.vertex(&mut x, &mut y), PATH_CMD_LINE_TO);
        }
        assert_eq!(
            path.vertex(&mut x, &mut y),
            PATH_CMD_END_POLY | PATH_FLAGS_CLOSE
        );
        assert!(is_stop(path.vertex(&mut x, &mut y)));
    }
}
