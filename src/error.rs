/// Error type shared by every stage of the split pipeline
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    /// Reading the prompt, creating the output directory or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The composite could not be decoded, or a day image could not be encoded
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("no composite image path was entered")]
    EmptyPath,
}

pub type Result<T> = std::result::Result<T, SplitError>;
