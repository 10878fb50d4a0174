//! # shape-synth
//!
//! Synthetic 2D geometric shape images for training image classifiers.
//!
//! Every image is one filled shape drawn from seventeen classes (circle,
//! semicircle, oval, triangle, the quadrilaterals, regular polygons from
//! pentagon to decagon, and a five-pointed star) in a random palette color,
//! size and rotation, placed at a random position on a white 224×224 RGB
//! canvas so that no part of it is cut off.
//!
//! ## Architecture
//!
//! Each image runs through a five-stage pipeline:
//!
//! 1. **Parameters**: color, size and angle drawn per shape class
//! 2. **Geometry**: the class outline around a local origin
//! 3. **Scanline Rasterizer**: fills the outline on a transparent layer
//! 4. **Rotation**: expands the layer so the rotated shape is never clipped
//! 5. **Compositing**: pastes the layer at a bounds-safe center
//!
//! ```no_run
//! use rand::SeedableRng;
//! use shape_synth::{EngineConfig, ShapeKind, ShapeSynth};
//!
//! let engine = ShapeSynth::new(EngineConfig::default())?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let (params, canvas) = engine.create_image(ShapeKind::Star, &mut rng)?;
//! println!("{} star, size {}, {}°", params.color, params.size, params.angle);
//! assert_eq!(canvas.as_bytes().len(), 224 * 224 * 3);
//! # Ok::<(), shape_synth::SynthError>(())
//! ```

// Foundation
pub mod basics;
pub mod color;
pub mod error;
pub mod shape;

// Geometry and vertex sources
pub mod arc;
pub mod ellipse;
pub mod geometry;
pub mod trans_affine;

// Scanline rasterizer
pub mod rasterizer_scanline;
pub mod scanline_bin;

// Pixel formats and rendering
pub mod pixfmt_rgb;
pub mod pixfmt_rgba;
pub mod renderer_scanline;

// Pipeline stages
pub mod compositor;
pub mod engine;
pub mod params;
pub mod placement;
pub mod rotate;

pub use color::{PaletteColor, Rgba8};
pub use engine::{EngineConfig, ShapeLayer, ShapeSynth, CANVAS_SIZE};
pub use error::{Result, SynthError};
pub use geometry::{generate, Geometry};
pub use params::{
    sample_params, validate_params, RenderParams, SamplerConfig, FIXED_ANGLES, MAX_SIZE, MIN_SIZE,
};
pub use pixfmt_rgb::Canvas;
pub use pixfmt_rgba::{Layer, PixelFormat};
pub use placement::{sample_placement, Placement};
pub use shape::{ShapeKind, SymmetryClass};
