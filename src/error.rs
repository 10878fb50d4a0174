//! Error types for shape synthesis.

use thiserror::Error;

/// Errors that can occur while configuring or running the synthesis engine.
///
/// Apart from `InvalidShapeKind` and `InvalidColor` (bad names coming from
/// the outside), every variant is a precondition or configuration failure.
/// A well-formed engine never produces one while rendering an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthError {
    /// The name does not denote one of the supported shape classes.
    #[error("unknown shape kind `{0}`")]
    InvalidShapeKind(String),

    /// The name does not denote a palette color.
    #[error("unknown palette color `{0}`")]
    InvalidColor(String),

    /// Geometry would collapse: zero size or fewer than three vertices.
    #[error("degenerate geometry: {reason}")]
    DegenerateGeometry {
        /// What made the geometry degenerate.
        reason: String,
    },

    /// The canvas cannot hold the largest rotated bounding box.
    #[error("placement infeasible: {kind} at size {size} needs {needed}px, canvas is {canvas}px")]
    PlacementInfeasible {
        /// Name of the offending shape kind.
        kind: &'static str,
        /// Shape size that does not fit.
        size: u32,
        /// Side of the square band the shape center must stay inside.
        needed: u32,
        /// Canvas side length.
        canvas: u32,
    },

    /// The center leaves part of the shape off the canvas.
    #[error("placement ({cx}, {cy}) is outside the legal band {lo}..={hi}")]
    PlacementOutOfBounds {
        cx: u32,
        cy: u32,
        /// Smallest legal center coordinate.
        lo: u32,
        /// Largest legal center coordinate.
        hi: u32,
    },

    /// The angle is outside `0..360`, or is not a quarter turn for a
    /// fixed-angle shape.
    #[error("angle {angle} is not allowed for {kind}")]
    AngleNotAllowed {
        /// Name of the shape kind.
        kind: &'static str,
        angle: u32,
    },

    /// The shape size lies outside the configured range.
    #[error("size {size} is outside {min}..={max}")]
    SizeOutOfRange { size: u32, min: u32, max: u32 },

    /// There are no colors to draw from.
    #[error("the color palette is empty")]
    EmptyPalette,

    /// The configured size range is empty, starts at zero, or reaches the
    /// canvas dimension.
    #[error("invalid size range {min}..={max}")]
    InvalidSizeRange {
        /// Smallest size.
        min: u32,
        /// Largest size.
        max: u32,
    },
}

impl SynthError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        SynthError::DegenerateGeometry {
            reason: reason.into(),
        }
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, SynthError>;
