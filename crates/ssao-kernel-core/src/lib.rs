//! Core of ssao-kernel.
//!
//! This crate provides the pieces needed to build and emit an SSAO sample kernel:
//! - [`KernelSamples`] storing the kernel as parallel x/y/z sequences
//! - Hemisphere sampling ([`uniform`], [`poisson`])
//! - Shader-source and binary export ([`write_glsl`], [`write_wgsl`], ...)
//! - [`KernelOptions`] configuration and the [`KernelError`] type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod export;
pub mod kernel;
pub mod options;
pub mod sampling;

pub use error::{KernelError, Result};
pub use export::{export, write_glsl, write_json, write_raw, write_wgsl, OutputFormat};
pub use kernel::{GpuSample, KernelSamples};
pub use options::{KernelOptions, PlotOptions, DEFAULT_SAMPLE_COUNT, MAX_HISTOGRAM_BINS};
pub use sampling::{generate, poisson, uniform, uniform_sample, Algorithm, PoissonParams};

// Re-export glam types for convenience
pub use glam::{Vec3, Vec4};
