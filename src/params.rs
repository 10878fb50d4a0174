//! Random per-image rendering parameters.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::PaletteColor;
use crate::error::{Result, SynthError};
use crate::shape::{ShapeKind, SymmetryClass};

/// Smallest shape size drawn by default.
pub const MIN_SIZE: u32 = 30;
/// Largest shape size drawn by default.
pub const MAX_SIZE: u32 = 100;
/// The only angles a [`SymmetryClass::FixedAngle`] shape may take.
pub const FIXED_ANGLES: [u32; 4] = [0, 90, 180, 270];

/// Everything the renderer needs besides the shape kind and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderParams {
    pub color: PaletteColor,
    pub size: u32,
    /// Clockwise rotation in whole degrees, `0..360`.
    pub angle: u32,
}

/// Ranges the parameter sampler draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Smallest size, inclusive.
    pub min_size: u32,
    /// Largest size, inclusive.
    pub max_size: u32,
    pub palette: Vec<PaletteColor>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
            palette: PaletteColor::ALL.to_vec(),
        }
    }
}

/// Draw color, size and angle for one image of `kind`.
///
/// Color is uniform over the palette and size uniform over the inclusive
/// range. Fixed-angle shapes get one of [`FIXED_ANGLES`]; the rest get any
/// whole degree in `0..360`.
pub fn sample_params<R: Rng + ?Sized>(
    kind: ShapeKind,
    config: &SamplerConfig,
    rng: &mut R,
) -> Result<RenderParams> {
    let color = *config.palette.choose(rng).ok_or(SynthError::EmptyPalette)?;
    if config.min_size == 0 || config.min_size > config.max_size {
        return Err(SynthError::InvalidSizeRange {
            min: config.min_size,
            max: config.max_size,
        });
    }
    let size = rng.gen_range(config.min_size..=config.max_size);
    let angle = match kind.symmetry() {
        SymmetryClass::FixedAngle => FIXED_ANGLES[rng.gen_range(0..FIXED_ANGLES.len())],
        SymmetryClass::FreeAngle => rng.gen_range(0..360),
    };
    Ok(RenderParams { color, size, angle })
}

/// Check caller-supplied parameters for `kind` against `config`.
///
/// Sizes must lie in the configured range. Angles must be below 360, and
/// fixed-angle shapes only take one of [`FIXED_ANGLES`].
pub fn validate_params(
    kind: ShapeKind,
    params: &RenderParams,
    config: &SamplerConfig,
) -> Result<()> {
    if !(config.min_size..=config.max_size).contains(&params.size) {
        return Err(SynthError::SizeOutOfRange {
            size: params.size,
            min: config.min_size,
            max: config.max_size,
        });
    }
    let allowed = match kind.symmetry() {
        SymmetryClass::FixedAngle => FIXED_ANGLES.contains(&params.angle),
        SymmetryClass::FreeAngle => params.angle < 360,
    };
    if !allowed {
        return Err(SynthError::AngleNotAllowed {
            kind: kind.name(),
            angle: params.angle,
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const TRIALS: usize = 2000;

    #[test]
    fn test_fixed_angle_domain() {
        let cfg = SamplerConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        for kind in ShapeKind::ALL
            .into_iter()
            .filter(|k| k.symmetry() == SymmetryClass::FixedAngle)
        {
            let mut seen = HashSet::new();
            for _ in 0..TRIALS {
                let p = sample_params(kind, &cfg, &mut rng).unwrap();
                assert!(FIXED_ANGLES.contains(&p.angle), "{kind}: {}", p.angle);
                seen.insert(p.angle);
            }
            assert_eq!(seen.len(), 4, "{kind} should hit every quarter turn");
        }
    }

    #[test]
    fn test_free_angle_domain() {
        let cfg = SamplerConfig::default();
        let mut rng = StdRng::seed_from_u64(43);
        for kind in ShapeKind::ALL
            .into_iter()
            .filter(|k| k.symmetry() == SymmetryClass::FreeAngle)
        {
            let mut off_axis = 0;
            for _ in 0..TRIALS {
                let p = sample_params(kind, &cfg, &mut rng).unwrap();
                assert!(p.angle < 360, "{kind}: {}", p.angle);
                if p.angle % 90 != 0 {
                    off_axis += 1;
                }
            }
            assert!(off_axis > TRIALS / 2, "{kind}: only {off_axis} off-axis angles");
        }
    }

    #[test]
    fn test_sampled_params_always_validate() {
        let cfg = SamplerConfig::default();
        let mut rng = StdRng::seed_from_u64(45);
        for kind in ShapeKind::ALL {
            for _ in 0..200 {
                let p = sample_params(kind, &cfg, &mut rng).unwrap();
                assert_eq!(validate_params(kind, &p, &cfg), Ok(()), "{kind} {p:?}");
            }
        }
    }

    #[test]
    fn test_validate_rejects_off_axis_fixed_angle() {
        let cfg = SamplerConfig::default();
        let mut p = RenderParams {
            color: PaletteColor::Red,
            size: 60,
            angle: 45,
        };
        assert_eq!(
            validate_params(ShapeKind::Square, &p, &cfg),
            Err(SynthError::AngleNotAllowed {
                kind: "square",
                angle: 45
            })
        );
        assert_eq!(validate_params(ShapeKind::Pentagon, &p, &cfg), Ok(()));
        p.angle = 360;
        assert!(matches!(
            validate_params(ShapeKind::Pentagon, &p, &cfg),
            Err(SynthError::AngleNotAllowed { angle: 360, .. })
        ));
        p.angle = 270;
        assert_eq!(validate_params(ShapeKind::Square, &p, &cfg), Ok(()));
    }

    #[test]
    fn test_validate_rejects_size_outside_range() {
        let cfg = SamplerConfig::default();
        for size in [0, MIN_SIZE - 1, MAX_SIZE + 1, 150] {
            let p = RenderParams {
                color: PaletteColor::Blue,
                size,
                angle: 0,
            };
            assert_eq!(
                validate_params(ShapeKind::Oval, &p, &cfg),
                Err(SynthError::SizeOutOfRange {
                    size,
                    min: MIN_SIZE,
                    max: MAX_SIZE
                })
            );
        }
    }

    #[test]
    fn test_size_and_color_ranges() {
        let cfg = SamplerConfig::default();
        let mut rng = StdRng::seed_from_u64(44);
        let mut sizes = HashSet::new();
        let mut colors = HashSet::new();
        for _ in 0..TRIALS {
            let p = sample_params(ShapeKind::Circle, &cfg, &mut rng).unwrap();
            assert!((MIN_SIZE..=MAX_SIZE).contains(&p.size));
            sizes.insert(p.size);
            colors.insert(p.color);
        }
        assert!(sizes.contains(&MIN_SIZE) && sizes.contains(&MAX_SIZE));
        assert_eq!(colors.len(), PaletteColor::ALL.len());
    }

    #[test]
    fn test_same_seed_same_params() {
        let cfg = SamplerConfig::default();
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for kind in ShapeKind::ALL {
            assert_eq!(
                sample_params(kind, &cfg, &mut a).unwrap(),
                sample_params(kind, &cfg, &mut b).unwrap()
            );
        }
    }

    #[test]
    fn test_restricted_config() {
        let cfg = SamplerConfig {
            min_size: 50,
            max_size: 50,
            palette: vec![PaletteColor::Pink],
        };
        let mut rng = StdRng::seed_from_u64(3);
        let p = sample_params(ShapeKind::Star, &cfg, &mut rng).unwrap();
        assert_eq!((p.color, p.size), (PaletteColor::Pink, 50));
    }

    #[test]
    fn test_bad_config() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty = SamplerConfig {
            palette: Vec::new(),
            ..SamplerConfig::default()
        };
        assert_eq!(
            sample_params(ShapeKind::Star, &empty, &mut rng),
            Err(SynthError::EmptyPalette)
        );
        let inverted = SamplerConfig {
            min_size: 80,
            max_size: 40,
            ..SamplerConfig::default()
        };
        assert!(matches!(
            sample_params(ShapeKind::Star, &inverted, &mut rng),
            Err(SynthError::InvalidSizeRange { .. })
        ));
    }
}
