//! Pie-slice vertex generator.
//!
//! A pie is the region between an elliptical arc and the ellipse center:
//! the outline starts at the center, runs out to the arc start, follows the
//! arc, and closes back to the center. Angles are in degrees and grow
//! clockwise on screen (the y axis points down), so a 0°→180° sweep is the
//! lower half of the ellipse.

use crate::basics::{
    deg2rad, VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP,
    PATH_FLAGS_CLOSE, PATH_FLAGS_CW,
};
use crate::ellipse::flattening_step;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Center,
    Arc,
    End,
    Stop,
}

/// Filled elliptical sector.
#[derive(Debug, Clone)]
pub struct Pie {
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
    start: f64,
    end: f64,
    da: f64,
    angle: f64,
    stage: Stage,
}

impl Pie {
    /// Create a pie centered at `(x, y)` sweeping from `start_deg` to
    /// `end_deg`. An end before the start wraps by whole turns.
    pub fn new(x: f64, y: f64, rx: f64, ry: f64, start_deg: f64, end_deg: f64) -> Self {
        let start = deg2rad(start_deg);
        let mut end = deg2rad(end_deg);
        while end < start {
            end += std::f64::consts::TAU;
        }
        Self {
            x,
            y,
            rx,
            ry,
            start,
            end,
            da: flattening_step(rx, ry, 1.0),
            angle: start,
            stage: Stage::Stop,
        }
    }

    #[inline]
    fn point_at(&self, a: f64) -> (f64, f64) {
        (self.x + a.cos() * self.rx, self.y + a.sin() * self.ry)
    }
}

impl VertexSource for Pie {
    fn rewind(&mut self, _path_id: u32) {
        self.angle = self.start;
        self.stage = Stage::Center;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        match self.stage {
            Stage::Center => {
                *x = self.x;
                *y = self.y;
                self.stage = Stage::Arc;
                PATH_CMD_MOVE_TO
            }
            Stage::Arc => {
                // Snap to the exact end once the next step would overshoot
                // (or land within a quarter step of it).
                if self.angle >= self.end - self.da / 4.0 {
                    (*x, *y) = self.point_at(self.end);
                    self.stage = Stage::End;
                } else {
                    (*x, *y) = self.point_at(self.angle);
                    self.angle += self.da;
                }
                PATH_CMD_LINE_TO
            }
            Stage::End => {
                self.stage = Stage::Stop;
                PATH_CMD_END_POLY | PATH_FLAGS_CLOSE | PATH_FLAGS_CW
            }
            Stage::Stop => PATH_CMD_STOP,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{is_close, is_stop};

    fn collect(pie: &mut Pie) -> Vec<(f64, f64, u32)> {
        pie.rewind(0);
        let mut out = Vec::new();
        let (mut x, mut y) = (0.0, 0.0);
        loop {
            let cmd = pie.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            out.push((x, y, cmd));
        }
        out
    }

    #[test]
    fn test_pie_starts_at_center_and_closes() {
        let mut pie = Pie::new(50.0, 60.0, 20.0, 20.0, 0.0, 180.0);
        let v = collect(&mut pie);
        assert_eq!(v[0], (50.0, 60.0, PATH_CMD_MOVE_TO));
        assert!(is_close(v.last().unwrap().2));
    }

    #[test]
    fn test_half_disk_covers_lower_half() {
        let mut pie = Pie::new(0.0, 0.0, 20.0, 20.0, 0.0, 180.0);
        let v = collect(&mut pie);
        let arc: Vec<_> = v.iter().filter(|p| p.2 == PATH_CMD_LINE_TO).collect();
        assert!(arc.len() > 4);
        // First arc point at +x, last at -x, all with y >= 0.
        assert!((arc[0].0 - 20.0).abs() < 1e-9);
        let last = arc.last().unwrap();
        assert!((last.0 + 20.0).abs() < 1e-9);
        assert!(last.1.abs() < 1e-9);
        for p in &arc {
            assert!(p.1 >= -1e-9, "arc point above the diameter: {p:?}");
            assert!((p.0.hypot(p.1) - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rewind_replays_identically() {
        let mut pie = Pie::new(0.0, 0.0, 30.0, 15.0, 0.0, 180.0);
        let a = collect(&mut pie);
        let b = collect(&mut pie);
        assert_eq!(a, b);
    }
}
