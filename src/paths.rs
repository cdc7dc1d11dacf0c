/// Path resolution and output directory setup
///
/// The output directory sits next to the tool's sources, mirroring
/// `<source dir>/../demo-story-images`. Nothing is configurable at runtime.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};

/// Name of the directory day images are written to
pub const OUTPUT_DIR_NAME: &str = "demo-story-images";

/// Prefix of every day image filename
pub const FILE_PREFIX: &str = "alex-story-day-";

const PROMPT: &str = "Enter the path to your composite image: ";

/// Ask for the composite image path and read one line of input.
/// The answer is trimmed but otherwise taken as-is (no existence check).
pub fn prompt_composite_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(SplitError::EmptyPath);
    }

    Ok(PathBuf::from(trimmed))
}

/// Default output directory: `<crate root>/demo-story-images`
///
/// Resolved at compile time, so a binary copied elsewhere still writes
/// into the source tree it was built from.
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(OUTPUT_DIR_NAME)
}

/// Create the output directory and any missing parents.
/// Existing contents are left untouched.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    println!("📁 Output directory: {}", dir.display());
    Ok(())
}

/// Path of the PNG for a given day
pub fn day_image_path(dir: &Path, day: u8) -> PathBuf {
    dir.join(format!("{}{}.png", FILE_PREFIX, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_prompt_trims_input() {
        let mut input = Cursor::new("  /tmp/sheet.png \n");
        let mut output = Vec::new();

        let path = prompt_composite_path(&mut input, &mut output).unwrap();

        assert_eq!(path, PathBuf::from("/tmp/sheet.png"));
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn test_prompt_rejects_empty_line() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        let result = prompt_composite_path(&mut input, &mut output);
        assert!(matches!(result, Err(SplitError::EmptyPath)));
    }

    #[test]
    fn test_day_image_path() {
        let path = day_image_path(Path::new("out"), 4);
        assert_eq!(path, Path::new("out").join("alex-story-day-4.png"));
    }

    #[test]
    fn test_default_output_dir_name() {
        let dir = default_output_dir();
        assert!(dir.ends_with(OUTPUT_DIR_NAME));
    }

    #[test]
    fn test_prepare_output_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("deeper");

        prepare_output_dir(&dir).unwrap();
        let leftover = dir.join("notes.txt");
        fs::write(&leftover, b"keep me").unwrap();

        // Second call must neither fail nor clear existing files
        prepare_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(fs::read(&leftover).unwrap(), b"keep me");
    }
}
