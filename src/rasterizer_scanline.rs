//! Polygon scanline rasterizer without anti-aliasing.
//!
//! Accepts polygon contours (move_to/line_to/close) in pixel coordinates and
//! turns them into horizontal spans, one scanline at a time. A pixel belongs
//! to the shape when its center `(x + 0.5, y + 0.5)` is inside the outline
//! under the non-zero winding rule. Coverage is binary: every emitted pixel
//! is either fully in or fully out.

use crate::basics::{
    ifloor, is_close, is_move_to, is_stop, is_vertex, RectI, VertexSource, COVER_FULL,
};

// ============================================================================
// Scanline trait: the interface that sweep_scanline feeds data into
// ============================================================================

/// Trait for scanline containers that accumulate span data.
pub trait Scanline {
    /// Prepare for a new scanline, clearing all span data.
    fn reset_spans(&mut self);

    /// Add a horizontal span of `len` pixels starting at `x`, all with `cover`.
    fn add_span(&mut self, x: i32, len: u32, cover: u32);

    /// Finalize the scanline at the given Y coordinate.
    fn finalize(&mut self, y: i32);

    /// Number of spans in this scanline (0 means empty).
    fn num_spans(&self) -> u32;

    /// The Y coordinate of this scanline.
    fn y(&self) -> i32;
}

// ============================================================================
// Edges
// ============================================================================

/// A non-horizontal polygon edge, stored top to bottom.
#[derive(Debug, Clone, Copy)]
struct Edge {
    x_top: f64,
    y_top: f64,
    y_bottom: f64,
    /// dx/dy along the edge.
    slope: f64,
    /// +1 for edges drawn downward, -1 for edges drawn upward.
    winding: i32,
}

impl Edge {
    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Option<Self> {
        if y1 == y2 {
            return None;
        }
        let (winding, (xt, yt), (xb, yb)) = if y1 < y2 {
            (1, (x1, y1), (x2, y2))
        } else {
            (-1, (x2, y2), (x1, y1))
        };
        Some(Self {
            x_top: xt,
            y_top: yt,
            y_bottom: yb,
            slope: (xb - xt) / (yb - yt),
            winding,
        })
    }

    /// Half-open in y so a vertex shared by two edges is counted once.
    #[inline]
    fn crosses(&self, y: f64) -> bool {
        y >= self.y_top && y < self.y_bottom
    }

    #[inline]
    fn x_at(&self, y: f64) -> f64 {
        self.x_top + (y - self.y_top) * self.slope
    }
}

// ============================================================================
// RasterizerScanline
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Status {
    Initial,
    MoveTo,
    LineTo,
    Closed,
}

/// Polygon rasterizer producing binary-coverage spans.
///
/// Usage:
/// 1. Optionally set `clip_box()`
/// 2. Define contours with `move_to_d()` / `line_to_d()` or `add_path()`
/// 3. Call `rewind_scanlines()` then repeatedly `sweep_scanline()`
#[derive(Debug, Clone)]
pub struct RasterizerScanline {
    edges: Vec<Edge>,
    crossings: Vec<(f64, i32)>,
    clip: Option<RectI>,
    start_x: f64,
    start_y: f64,
    last_x: f64,
    last_y: f64,
    min_y: f64,
    max_y: f64,
    status: Status,
    scan_y: i32,
    scan_end: i32,
}

impl RasterizerScanline {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            crossings: Vec::new(),
            clip: None,
            start_x: 0.0,
            start_y: 0.0,
            last_x: 0.0,
            last_y: 0.0,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            status: Status::Initial,
            scan_y: 0,
            scan_end: 0,
        }
    }

    /// Restrict output to pixels with `x1 <= x < x2` and `y1 <= y < y2`.
    pub fn clip_box(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.clip = Some(RectI::new(x1, y1, x2, y2));
    }

    // ========================================================================
    // Path building
    // ========================================================================

    fn push_edge(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        if let Some(edge) = Edge::new(x1, y1, x2, y2) {
            self.min_y = self.min_y.min(edge.y_top);
            self.max_y = self.max_y.max(edge.y_bottom);
            self.edges.push(edge);
        }
    }

    /// Close the current polygon contour.
    pub fn close_polygon(&mut self) {
        if self.status == Status::LineTo {
            self.push_edge(self.last_x, self.last_y, self.start_x, self.start_y);
            self.status = Status::Closed;
        }
    }

    /// Start a new contour at `(x, y)`, closing the previous one.
    pub fn move_to_d(&mut self, x: f64, y: f64) {
        self.close_polygon();
        self.start_x = x;
        self.start_y = y;
        self.last_x = x;
        self.last_y = y;
        self.status = Status::MoveTo;
    }

    /// Extend the current contour to `(x, y)`.
    pub fn line_to_d(&mut self, x: f64, y: f64) {
        self.push_edge(self.last_x, self.last_y, x, y);
        self.last_x = x;
        self.last_y = y;
        self.status = Status::LineTo;
    }

    /// Add a vertex (dispatches to move_to, line_to, or close based on command).
    pub fn add_vertex(&mut self, x: f64, y: f64, cmd: u32) {
        if is_move_to(cmd) {
            self.move_to_d(x, y);
        } else if is_vertex(cmd) {
            self.line_to_d(x, y);
        } else if is_close(cmd) {
            self.close_polygon();
        }
    }

    /// Add all vertices from a vertex source.
    pub fn add_path(&mut self, vs: &mut dyn VertexSource, path_id: u32) {
        let mut x = 0.0;
        let mut y = 0.0;

        vs.rewind(path_id);
        loop {
            let cmd = vs.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            self.add_vertex(x, y, cmd);
        }
    }

    // ========================================================================
    // Scanline sweeping
    // ========================================================================

    /// Close open contours and prepare for sweeping.
    /// Returns `false` if no scanline can contain a pixel.
    pub fn rewind_scanlines(&mut self) -> bool {
        self.close_polygon();
        if self.edges.is_empty() {
            return false;
        }
        // Rows whose centers fall inside [min_y, max_y).
        let mut first = ifloor(self.min_y - 0.5) + 1;
        let mut last = ifloor(self.max_y - 0.5) + 1;
        if let Some(clip) = self.clip {
            first = first.max(clip.y1);
            last = last.min(clip.y2);
        }
        self.scan_y = first;
        self.scan_end = last;
        first < last
    }

    /// Extract the next non-empty scanline into `sl`.
    ///
    /// Returns `false` when all scanlines have been consumed.
    pub fn sweep_scanline<SL: Scanline>(&mut self, sl: &mut SL) -> bool {
        loop {
            if self.scan_y >= self.scan_end {
                return false;
            }
            sl.reset_spans();
            self.emit_row(self.scan_y, sl);
            if sl.num_spans() > 0 {
                break;
            }
            self.scan_y += 1;
        }
        sl.finalize(self.scan_y);
        self.scan_y += 1;
        true
    }

    fn emit_row<SL: Scanline>(&mut self, row: i32, sl: &mut SL) {
        let sample_y = row as f64 + 0.5;
        self.crossings.clear();
        for e in &self.edges {
            if e.crosses(sample_y) {
                self.crossings.push((e.x_at(sample_y), e.winding));
            }
        }
        self.crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (clip_x1, clip_x2) = match self.clip {
            Some(c) => (c.x1, c.x2),
            None => (i32::MIN, i32::MAX),
        };

        let mut winding = 0;
        for i in 0..self.crossings.len() {
            let (xa, w) = self.crossings[i];
            winding += w;
            if winding == 0 || i + 1 == self.crossings.len() {
                continue;
            }
            let xb = self.crossings[i + 1].0;
            // Pixels whose centers satisfy xa <= x + 0.5 < xb.
            let x_start = (ifloor(xa - 0.5) + 1).max(clip_x1);
            let x_end = (ifloor(xb - 0.5) + 1).min(clip_x2);
            if x_start < x_end {
                sl.add_span(x_start, (x_end - x_start) as u32, COVER_FULL as u32);
            }
        }
    }
}

impl Default for RasterizerScanline {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
