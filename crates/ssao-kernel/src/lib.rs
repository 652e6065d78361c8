//! ssao-kernel: generate SSAO sample kernels and plot or export them.
//!
//! A kernel is a set of N sample vectors in the upper (+Y) hemisphere, each
//! scaled by a squared random radius. Kernels are either emitted as shader
//! source (GLSL, WGSL), JSON or packed binary, or rendered to an image as a
//! quiver plot or a histogram of sample lengths.
//!
//! # Quick Start
//!
//! ```no_run
//! use ssao_kernel::*;
//!
//! fn main() -> Result<()> {
//!     let options = KernelOptions::new()
//!         .with_output(OutputFormat::C)
//!         .with_samples(16)
//!         .with_seed(42);
//!     run(&options, &mut std::io::stdout())?;
//!     Ok(())
//! }
//! ```

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
mod generator;

pub use generator::{generate_kernel, make_rng, run, RunOutcome};

// Re-export core types
pub use ssao_kernel_core::{
    error::{KernelError, Result},
    export::{export, write_glsl, write_json, write_raw, write_wgsl, OutputFormat},
    kernel::{GpuSample, KernelSamples},
    options::{KernelOptions, PlotOptions, DEFAULT_SAMPLE_COUNT},
    sampling::{generate, poisson, uniform, Algorithm, PoissonParams},
    Vec3, Vec4,
};

// Re-export plot types
pub use ssao_kernel_plot::{PlotError, PlotKind};
