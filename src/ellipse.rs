//! Ellipse vertex generator.
//!
//! Flattens an axis-aligned ellipse into a closed polygon for the scanline
//! rasterizer. The step count follows from the radii so the chord error
//! stays below an eighth of a pixel.

use crate::basics::{
    uround, VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP,
    PATH_FLAGS_CCW, PATH_FLAGS_CLOSE, PI,
};

/// Angular step that keeps the chord within `0.125 / scale` of an ellipse
/// with the given radii.
pub(crate) fn flattening_step(rx: f64, ry: f64, scale: f64) -> f64 {
    let ra = (rx.abs() + ry.abs()) / 2.0;
    (ra / (ra + 0.125 / scale)).acos() * 2.0
}

/// Ellipse vertex generator.
///
/// Produces `num` vertices starting at angle 0 (the +x axis) and walking
/// toward +y, followed by a close command.
#[derive(Debug, Clone)]
pub struct Ellipse {
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
    num: u32,
    step: u32,
}

impl Ellipse {
    /// Create an ellipse. `num_steps == 0` picks the step count from the radii.
    pub fn new(x: f64, y: f64, rx: f64, ry: f64, num_steps: u32) -> Self {
        let num = if num_steps == 0 {
            uround(2.0 * PI / flattening_step(rx, ry, 1.0)).max(4)
        } else {
            num_steps
        };
        Self {
            x,
            y,
            rx,
            ry,
            num,
            step: 0,
        }
    }

    /// Number of outline vertices emitted per pass.
    pub fn num_steps(&self) -> u32 {
        self.num
    }
}

impl VertexSource for Ellipse {
    fn rewind(&mut self, _path_id: u32) {
        self.step = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.step == self.num {
            self.step += 1;
            return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE | PATH_FLAGS_CCW;
        }
        if self.step > self.num {
            return PATH_CMD_STOP;
        }
        let angle = self.step as f64 / self.num as f64 * 2.0 * PI;
        *x = self.x + angle.cos() * self.rx;
        *y = self.y + angle.sin() * self.ry;
        self.step += 1;
        if self.step == 1 {
            PATH_CMD_MOVE_TO
        } else {
            PATH_CMD_LINE_TO
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
