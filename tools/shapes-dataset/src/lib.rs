// Copyright 2025. Dataset writer for synthetic 2D geometric shape images.
//
// Lays images out as <out>/<shape>/<shape>_<i>.png, one directory per class,
// and spreads the chunks of each class over a rayon thread pool.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use shape_synth::{Canvas, PixelFormat, ShapeKind, ShapeSynth, SynthError};
use thiserror::Error;

/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = "./2D_Geometric_Shapes_Dataset";
/// Default number of images per shape class.
pub const DEFAULT_COUNT: usize = 10_000;
/// Images generated from one seed before re-seeding. Chunks are the unit of
/// parallel work, so output does not depend on the thread count.
pub const CHUNK_SIZE: usize = 250;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Synth(#[from] SynthError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("canvas of {width}x{height} does not hold {len} RGB bytes")]
    BufferSize { width: u32, height: u32, len: usize },

    #[error("could not start the worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub out_dir: PathBuf,
    /// Images per shape class.
    pub count: usize,
    /// Base seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub shapes: Vec<ShapeKind>,
    /// Worker threads; `0` lets rayon pick.
    pub threads: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            count: DEFAULT_COUNT,
            seed: None,
            shapes: ShapeKind::ALL.to_vec(),
            threads: 0,
        }
    }
}

/// Totals for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub written: usize,
    pub skipped: usize,
    pub seed: u64,
    pub out_dir: PathBuf,
}

// ============================================================================
// Output
// ============================================================================

/// `<out>/<shape>/<shape>_<index>.png`, `index` counting from 1.
pub fn image_path(out_dir: &Path, kind: ShapeKind, index: usize) -> PathBuf {
    out_dir.join(kind.name()).join(format!("{}_{}.png", kind.name(), index))
}

/// Encode `canvas` as an RGB PNG at `path`.
pub fn save_png(path: &Path, canvas: Canvas) -> Result<(), DatasetError> {
    let (width, height) = (canvas.width(), canvas.height());
    let bytes = canvas.into_raw();
    let len = bytes.len();
    let img = RgbImage::from_raw(width, height, bytes).ok_or(DatasetError::BufferSize {
        width,
        height,
        len,
    })?;
    img.save(path)?;
    Ok(())
}

/// Seed for one chunk of one class.
fn chunk_seed(base: u64, kind: ShapeKind, chunk: usize) -> u64 {
    base ^ ((kind as u64) << 40) ^ chunk as u64
}

/// Generate and save images `first..first + len` (1-based) of `kind`.
/// Failures are logged and counted, never fatal.
fn write_chunk(
    engine: &ShapeSynth,
    kind: ShapeKind,
    out_dir: &Path,
    seed: u64,
    first: usize,
    len: usize,
) -> (usize, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut written, mut skipped) = (0, 0);
    for index in first..first + len {
        let path = image_path(out_dir, kind, index);
        let result = engine
            .create_image(kind, &mut rng)
            .map_err(DatasetError::from)
            .and_then(|(params, canvas)| {
                debug!("{}: {:?}", path.display(), params);
                save_png(&path, canvas)
            });
        match result {
            Ok(()) => written += 1,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                skipped += 1;
            }
        }
    }
    (written, skipped)
}

/// Write `config.count` images for one class on the current rayon pool.
/// Returns `(written, skipped)`.
pub fn write_class(
    engine: &ShapeSynth,
    kind: ShapeKind,
    config: &DatasetConfig,
    base_seed: u64,
) -> Result<(usize, usize), DatasetError> {
    fs::create_dir_all(config.out_dir.join(kind.name()))?;

    let chunks = (config.count + CHUNK_SIZE - 1) / CHUNK_SIZE;
    let out_dir = config.out_dir.as_path();

    let totals = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let first = chunk * CHUNK_SIZE + 1;
            let len = CHUNK_SIZE.min(config.count - chunk * CHUNK_SIZE);
            let seed = chunk_seed(base_seed, kind, chunk);
            write_chunk(engine, kind, out_dir, seed, first, len)
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));
    Ok(totals)
}

/// Write the whole dataset: every requested class, in order.
pub fn write_dataset(
    engine: &ShapeSynth,
    config: &DatasetConfig,
) -> Result<DatasetSummary, DatasetError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    info!(
        "writing {} images for each of {} classes to {} (seed {}, {} threads)",
        config.count,
        config.shapes.len(),
        config.out_dir.display(),
        seed,
        pool.current_num_threads()
    );

    let mut summary = DatasetSummary {
        seed,
        out_dir: config.out_dir.clone(),
        ..DatasetSummary::default()
    };
    pool.install(|| {
        for &kind in &config.shapes {
            let (written, skipped) = write_class(engine, kind, config, seed)?;
            info!("{kind}: {written} written, {skipped} skipped");
            summary.written += written;
            summary.skipped += skipped;
        }
        Ok::<_, DatasetError>(())
    })?;
    Ok(summary)
}

// ============================================================================
// Tests
// ============================================================================
