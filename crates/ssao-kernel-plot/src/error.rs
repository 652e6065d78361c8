//! Plotting error types.

use thiserror::Error;

/// Errors that can occur while rasterizing or saving a plot.
#[derive(Error, Debug)]
pub enum PlotError {
    /// Image width or height is zero.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Histogram requested with no bins.
    #[error("histogram needs at least one bin")]
    NoBins,

    #[error("histogram bin count {0} exceeds the supported maximum")]
    TooManyBins(usize),

    /// The output extension is not a supported image format.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Failed to write the image.
    #[error("failed to save image: {0}")]
    IoError(#[from] std::io::Error),

    /// Image encoding failed.
    #[error("image encoding error: {0}")]
    ImageError(#[from] image::ImageError),
}

/// A specialized Result type for plotting operations.
pub type PlotResult<T> = std::result::Result<T, PlotError>;
