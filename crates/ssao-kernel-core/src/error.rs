//! Error types for ssao-kernel.

use thiserror::Error;

/// The main error type for kernel generation and export.
#[derive(Error, Debug)]
pub enum KernelError {
    /// The requested sampling algorithm does not exist.
    #[error("incorrect algorithm '{0}' (expected one of: uniform, poisson)")]
    UnknownAlgorithm(String),

    /// The requested output selector does not exist.
    #[error("incorrect output '{0}' (expected one of: c, plot, plot2d, wgsl, json, raw)")]
    UnknownOutput(String),

    /// Component sequences of different lengths.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A sampling or plotting parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Plot rasterization or image encoding failed.
    #[error("plot error: {0}")]
    Plot(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for ssao-kernel operations.
pub type Result<T> = std::result::Result<T, KernelError>;
