//! Binary scanline container (ScanlineBin).
//!
//! The simplest scanline type: no coverage data, each span records only
//! its X start and length. Adjacent spans are merged as they arrive.

use crate::rasterizer_scanline::Scanline;

/// A horizontal span in a binary scanline (no coverage data).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinSpan {
    pub x: i32,
    pub len: i32,
}

/// Binary scanline container: just on/off spans.
#[derive(Debug, Clone)]
pub struct ScanlineBin {
    last_x: i32,
    y_val: i32,
    spans: Vec<BinSpan>,
}

impl ScanlineBin {
    pub fn new() -> Self {
        Self {
            last_x: 0x7FFF_FFF0,
            y_val: 0,
            spans: Vec::new(),
        }
    }

    /// The spans collected for the current scanline.
    pub fn spans(&self) -> &[BinSpan] {
        &self.spans
    }

    fn push(&mut self, x: i32, len: i32) {
        let extends = x == self.last_x + 1;
        match self.spans.last_mut() {
            Some(last) if extends => last.len += len,
            _ => self.spans.push(BinSpan { x, len }),
        }
        self.last_x = x + len - 1;
    }
}

impl Scanline for ScanlineBin {
    fn reset_spans(&mut self) {
        self.last_x = 0x7FFF_FFF0;
        self.spans.clear();
    }

    fn add_span(&mut self, x: i32, len: u32, _cover: u32) {
        self.push(x, len as i32);
    }

    fn finalize(&mut self, y: i32) {
        self.y_val = y;
    }

    fn num_spans(&self) -> u32 {
        self.spans.len() as u32
    }

    fn y(&self) -> i32 {
        self.y_val
    }
}

impl Default for ScanlineBin {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
