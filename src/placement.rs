//! Bounds-safe placement of rotated shapes on the canvas.
//!
//! A shape's reach is the diameter of the circle its rotated footprint can
//! sweep. Centers are drawn so that circle, plus a small margin for pixel
//! sampling, always stays on the canvas.

use rand::Rng;

use crate::error::{Result, SynthError};
use crate::geometry::{generate, Geometry};
use crate::shape::ShapeKind;

/// Extra pixels kept free on every side of the reach circle. Covers the
/// half-pixel offset of pixel centers and nearest-neighbour rounding.
pub const RASTER_MARGIN: u32 = 2;

/// Where a shape's center lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub cx: u32,
    pub cy: u32,
}

/// How far a shape of a given kind and size can extend from its center
/// under any rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reach {
    pub kind: ShapeKind,
    pub size: u32,
    /// Diameter of the circle enclosing every rotation of the shape.
    pub max_dim: u32,
}

impl Reach {
    /// Reach of already generated geometry.
    pub fn of(kind: ShapeKind, size: u32, geometry: &Geometry) -> Self {
        Self {
            kind,
            size,
            max_dim: max_dim(size, geometry.bounding_radius()),
        }
    }

    /// Smallest legal center coordinate on either axis.
    pub fn lo(&self) -> u32 {
        (self.max_dim + 1) / 2 + RASTER_MARGIN
    }
}

/// `ceil(√2·size)`, widened to the shape's actual diameter when the
/// geometry reaches past `size / 2`.
pub fn max_dim(size: u32, bounding_radius: f64) -> u32 {
    let diagonal = (std::f64::consts::SQRT_2 * size as f64).ceil();
    let diameter = (2.0 * bounding_radius).ceil();
    diagonal.max(diameter) as u32
}

/// Draw a center uniformly from `[lo, canvas_size - lo]` on both axes.
pub fn sample_placement<R: Rng + ?Sized>(
    rng: &mut R,
    canvas_size: u32,
    reach: &Reach,
) -> Result<Placement> {
    let lo = reach.lo();
    let hi = feasible_hi(canvas_size, reach)?;
    Ok(Placement {
        cx: rng.gen_range(lo..=hi),
        cy: rng.gen_range(lo..=hi),
    })
}

/// Check that `placement` keeps the whole reach circle on the canvas.
pub fn check_placement(canvas_size: u32, reach: &Reach, placement: Placement) -> Result<()> {
    let lo = reach.lo();
    let hi = feasible_hi(canvas_size, reach)?;
    let band = lo..=hi;
    if band.contains(&placement.cx) && band.contains(&placement.cy) {
        Ok(())
    } else {
        Err(SynthError::PlacementOutOfBounds {
            cx: placement.cx,
            cy: placement.cy,
            lo,
            hi,
        })
    }
}

fn feasible_hi(canvas_size: u32, reach: &Reach) -> Result<u32> {
    let lo = reach.lo();
    match canvas_size.checked_sub(lo) {
        Some(hi) if hi >= lo => Ok(hi),
        _ => Err(SynthError::PlacementInfeasible {
            kind: reach.kind.name(),
            size: reach.size,
            needed: 2 * lo,
            canvas: canvas_size,
        }),
    }
}

/// Verify every shape kind at every size in `min_size..=max_size` can be
/// placed on a `canvas_size` canvas.
pub fn check_feasible(canvas_size: u32, min_size: u32, max_size: u32) -> Result<()> {
    for kind in ShapeKind::ALL {
        for size in min_size..=max_size {
            let geometry = generate(kind, size)?;
            feasible_hi(canvas_size, &Reach::of(kind, size, &geometry))?;
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
