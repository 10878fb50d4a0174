//! The per-image pipeline.
//!
//! [`ShapeSynth`] ties the stages together: sample parameters, build the
//! outline, rasterize it on a transparent layer, rotate the layer, pick a
//! bounds-safe center and paste the result onto a fresh background.

use log::{debug, info};
use rand::Rng;

use crate::color::Rgba8;
use crate::compositor::composite;
use crate::error::{Result, SynthError};
use crate::geometry::generate;
use crate::params::{sample_params, validate_params, RenderParams, SamplerConfig};
use crate::pixfmt_rgb::Canvas;
use crate::pixfmt_rgba::Layer;
use crate::placement::{check_feasible, check_placement, sample_placement, Placement, Reach};
use crate::renderer_scanline::rasterize;
use crate::rotate::rotate;
use crate::shape::ShapeKind;

/// Side length of the square output image.
pub const CANVAS_SIZE: u32 = 224;

/// Engine settings. The defaults describe the standard dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub canvas_size: u32,
    pub background: Rgba8,
    pub sampler: SamplerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            background: Rgba8::WHITE,
            sampler: SamplerConfig::default(),
        }
    }
}

/// A shape rasterized and rotated, ready to be placed.
#[derive(Debug, Clone)]
pub struct ShapeLayer {
    pub layer: Layer,
    pub reach: Reach,
}

/// Synthetic shape image generator.
///
/// Construction validates the configuration once; afterwards every shape
/// kind at every configured size is guaranteed to fit the canvas, so
/// rendering with sampled parameters cannot fail on placement.
#[derive(Debug, Clone)]
pub struct ShapeSynth {
    config: EngineConfig,
}

impl ShapeSynth {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let s = &config.sampler;
        if s.palette.is_empty() {
            return Err(SynthError::EmptyPalette);
        }
        if s.min_size == 0 || s.min_size > s.max_size || s.max_size >= config.canvas_size {
            return Err(SynthError::InvalidSizeRange {
                min: s.min_size,
                max: s.max_size,
            });
        }
        check_feasible(config.canvas_size, s.min_size, s.max_size)?;
        info!(
            "shape engine ready: {}px canvas, sizes {}..={}, {} colors",
            config.canvas_size,
            s.min_size,
            s.max_size,
            s.palette.len()
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rasterize `kind` with `params` and rotate it, without placing it.
    ///
    /// `params` must pass [`validate_params`] against the engine's sampler
    /// configuration.
    pub fn shape_layer(&self, kind: ShapeKind, params: &RenderParams) -> Result<ShapeLayer> {
        validate_params(kind, params, &self.config.sampler)?;
        let geometry = generate(kind, params.size)?;
        let reach = Reach::of(kind, params.size, &geometry);
        let n = self.config.canvas_size;
        let flat = rasterize(&geometry, params.color.rgba(), n, n);
        Ok(ShapeLayer {
            layer: rotate(&flat, params.angle as f64),
            reach,
        })
    }

    /// Render `kind` with fixed parameters at a fixed center. The center
    /// must keep the whole shape on the canvas.
    pub fn render_at(
        &self,
        kind: ShapeKind,
        params: &RenderParams,
        placement: Placement,
    ) -> Result<Canvas> {
        let shape = self.shape_layer(kind, params)?;
        check_placement(self.config.canvas_size, &shape.reach, placement)?;
        Ok(self.paste(&shape.layer, placement))
    }

    /// Render `kind` with fixed parameters; only the placement is drawn
    /// from `rng`.
    pub fn render<R: Rng + ?Sized>(
        &self,
        kind: ShapeKind,
        params: &RenderParams,
        rng: &mut R,
    ) -> Result<Canvas> {
        let shape = self.shape_layer(kind, params)?;
        let placement = sample_placement(rng, self.config.canvas_size, &shape.reach)?;
        debug!(
            "{kind}: {} size={} angle={} at ({}, {})",
            params.color, params.size, params.angle, placement.cx, placement.cy
        );
        Ok(self.paste(&shape.layer, placement))
    }

    /// Produce one fully random image of `kind`.
    pub fn create_image<R: Rng + ?Sized>(
        &self,
        kind: ShapeKind,
        rng: &mut R,
    ) -> Result<(RenderParams, Canvas)> {
        let params = sample_params(kind, &self.config.sampler, rng)?;
        let canvas = self.render(kind, &params, rng)?;
        Ok((params, canvas))
    }

    fn paste(&self, layer: &Layer, placement: Placement) -> Canvas {
        let n = self.config.canvas_size;
        let mut canvas = Canvas::new(n, n, self.config.background);
        composite(&mut canvas, layer, placement.cx as i32, placement.cy as i32);
        canvas
    }
}

// ============================================================================
// Tests
// ============================================================================
