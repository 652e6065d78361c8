//! Headless plotting for ssao-kernel.
//!
//! This crate rasterizes kernels into RGBA images without a window:
//! - [`render_quiver`]: arrows from the origin to every sample, seen from an oblique camera
//! - [`render_histogram`]: density histogram of the sample lengths
//! - [`save_image`]: PNG and JPEG encoding

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod canvas;
pub mod color_maps;
pub mod error;
pub mod histogram;
pub mod quiver;
pub mod screenshot;

pub use camera::Camera;
pub use canvas::Canvas;
pub use color_maps::ColorMap;
pub use error::{PlotError, PlotResult};
pub use histogram::{render_histogram, Histogram};
pub use quiver::{render_quiver, QuiverStyle};
pub use screenshot::save_image;

use image::RgbaImage;
use ssao_kernel_core::{KernelSamples, OutputFormat, PlotOptions};

/// The two kinds of plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// 3D quiver plot (`plot`).
    Quiver,
    /// Sample length histogram (`plot2d`).
    Histogram,
}

impl PlotKind {
    /// Maps an output selector to its plot kind, if it is a plot.
    pub fn from_output(output: OutputFormat) -> Option<Self> {
        match output {
            OutputFormat::Plot => Some(PlotKind::Quiver),
            OutputFormat::Plot2d => Some(PlotKind::Histogram),
            _ => None,
        }
    }
}

/// Renders a plot of `samples` with the size and bin count from `options`.
pub fn render(kind: PlotKind, samples: &KernelSamples, options: &PlotOptions) -> PlotResult<RgbaImage> {
    match kind {
        PlotKind::Quiver => render_quiver(
            samples,
            options.width,
            options.height,
            &QuiverStyle::default(),
        ),
        PlotKind::Histogram => {
            let histogram = Histogram::compute(&samples.radii(), options.bins)?;
            render_histogram(&histogram, options.width, options.height)
        }
    }
}
