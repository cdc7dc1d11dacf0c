/// Saving day images and reporting progress
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::paths::{day_image_path, OUTPUT_DIR_NAME};

/// Save one day's cell as PNG, replacing any previous file of the same name
pub fn save_day_image(image: &DynamicImage, dir: &Path, day: u8) -> Result<PathBuf> {
    let path = day_image_path(dir, day);
    image.save_with_format(&path, ImageFormat::Png)?;

    println!("✓ Saved Day {}: {}", day, path.display());
    Ok(path)
}

/// Completion message plus the manual upload reminder
pub fn print_summary(dir: &Path, saved: usize) {
    println!("\n✅ All {} images saved to: {}", saved, dir.display());
    println!("\nNext step: Upload these images to Firebase Storage at {}/", OUTPUT_DIR_NAME);
}
