/// Composite splitting pipeline
///
/// This module handles:
/// - Loading the composite sheet (loader.rs)
/// - Grid geometry and cropping of the day cells (grid.rs)
/// - Writing each day image to disk (writer.rs)

pub mod grid;
pub mod loader;
pub mod writer;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::paths::prepare_output_dir;

/// Outcome of a successful split
#[derive(Debug, Clone, PartialEq)]
pub struct SplitReport {
    /// Written files, in day order
    pub saved: Vec<PathBuf>,
}

/// Split the composite at `input` into seven day images under `output_dir`.
///
/// Runs strictly in sequence: prepare the directory, load, crop, save.
/// Any failure stops the run; files saved before it are left in place.
pub fn split_composite(input: &Path, output_dir: &Path) -> Result<SplitReport> {
    prepare_output_dir(output_dir)?;

    let composite = loader::load_composite(input)?;

    let mut saved = Vec::with_capacity(grid::DAY_POSITIONS.len());
    for (position, cell) in grid::crop_all(&composite) {
        saved.push(writer::save_day_image(&cell, output_dir, position.day)?);
    }

    Ok(SplitReport { saved })
}

/// Composite where every pixel encodes its own coordinates
#[cfg(test)]
pub(crate) fn synthetic_composite(width: u32, height: u32) -> image::DynamicImage {
    let buffer = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([
            (x % 256) as u8,
            (y % 256) as u8,
            ((x / 256) * 16 + y / 256) as u8,
            255,
        ])
    });
    image::DynamicImage::ImageRgba8(buffer)
}
