use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the image-similarity library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Codec-level structural corruption
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// Neither supported codec could decode the input
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Signatures of unequal bit length were compared
    #[error("Signature length mismatch: {left} vs {right} bits")]
    DimensionMismatch { left: usize, right: usize },
}
