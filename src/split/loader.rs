/// Composite image loading
use image::DynamicImage;
use std::path::Path;

use super::grid::GRID_SIZE;
use crate::error::Result;

/// Open and decode the composite sheet.
/// The format is detected by the image crate; failures are returned unchanged.
pub fn load_composite(path: &Path) -> Result<DynamicImage> {
    let image = image::open(path)?;

    let (width, height) = (image.width(), image.height());
    println!("📐 Composite image size: {} x {}", width, height);

    if width % GRID_SIZE != 0 || height % GRID_SIZE != 0 {
        eprintln!(
            "⚠️  Size is not a multiple of {}: dropping {}px on the right and {}px at the bottom",
            GRID_SIZE,
            width % GRID_SIZE,
            height % GRID_SIZE
        );
    }

    Ok(image)
}
